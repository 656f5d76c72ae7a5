use serde::{Deserialize, Serialize};

/// Priority tier, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    Medium,
    Low,
}

impl Priority {
    /// All tiers, in display order
    pub const ALL: [Priority; 3] = [Priority::Urgent, Priority::Medium, Priority::Low];

    /// Human-readable label (also the wire tag)
    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a tier name as used in CLI args
    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "urgent" => Some(Priority::Urgent),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Next tier in display order, wrapping (used to cycle the add prompt)
    pub fn next(self) -> Priority {
        match self {
            Priority::Urgent => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::Urgent,
        }
    }
}

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the store, assigned at creation, never reused
    pub id: u64,
    /// Label text, non-empty after trimming
    pub text: String,
    pub priority: Priority,
}

impl Task {
    pub fn new(id: u64, text: String, priority: Priority) -> Self {
        Task { id, text, priority }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_round_trips_labels() {
        for p in Priority::ALL {
            assert_eq!(Priority::parse(p.label()), Some(p));
        }
        assert_eq!(Priority::parse("high"), None);
    }

    #[test]
    fn priority_serializes_as_lowercase_tag() {
        assert_eq!(
            serde_json::to_string(&Priority::Urgent).unwrap(),
            "\"urgent\""
        );
        let p: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn priority_next_cycles() {
        assert_eq!(Priority::Urgent.next(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::Low);
        assert_eq!(Priority::Low.next(), Priority::Urgent);
    }
}
