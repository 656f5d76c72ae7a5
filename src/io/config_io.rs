use std::fs;
use std::path::Path;

use crate::io::store_io::{CONFIG_FILE, StoreError};
use crate::model::config::Config;

/// Read config.toml from the data directory. An absent file yields the
/// defaults; a file that fails to parse is a loud error (config is
/// hand-edited, unlike task data).
pub fn read_config(data_dir: &Path) -> Result<Config, StoreError> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.clone(),
        source: e,
    })?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::CorruptPolicy;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.on_corrupt, CorruptPolicy::Reset);
        assert!(!config.warn_on_save_failure);
    }

    #[test]
    fn reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "on_corrupt = \"fail\"\n").unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.on_corrupt, CorruptPolicy::Fail);
    }

    #[test]
    fn malformed_config_is_a_loud_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "on_corrupt = [nope").unwrap();
        assert!(matches!(
            read_config(dir.path()),
            Err(StoreError::ConfigParse(_))
        ));
    }
}
