//! Terminal rendering module for rich markdown output
//!
//! Status cards go to stdout, alerts to stderr. Both use termimad when
//! colors are enabled and fall back to the raw markdown otherwise.

use standby_core::Alert;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            for line in markdown.lines() {
                // Headers keep their hash marks
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    println!("{}", self.skin.inline(line));
                }
            }
        } else {
            print!("{markdown}");
        }
    }

    /// Render a failure alert to stderr
    pub fn render_alert(&self, alert: &Alert) {
        let markdown = alert.to_string();
        if self.rich_enabled {
            for line in markdown.lines() {
                eprintln!("{}", self.skin.inline(line));
            }
        } else {
            eprint!("{markdown}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
