use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::handlers::resolve_data_dir;
use crate::model::task::Priority;
use crate::ops::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task into the prompt
    Insert,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the currently visible (filtered) list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Insert mode: text being typed
    pub input: String,
    /// Insert mode: byte offset of the cursor within `input`
    pub input_cursor: usize,
    /// Insert mode: tier the new task will get (Tab cycles)
    pub input_priority: Priority,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let theme = Theme::from_config(&session.config().ui);
        App {
            session,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            input_priority: Priority::Medium,
            show_help: false,
        }
    }

    /// Number of rows in the current filter projection
    pub fn visible_len(&self) -> usize {
        self.session.visible().len()
    }

    /// Id of the task under the cursor, if any
    pub fn cursor_task_id(&self) -> Option<u64> {
        self.session.visible().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after mutations or filter changes
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(data_dir)?;
    let session = Session::open(&data_dir)?;
    let mut app = App::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
