//! Terminal output for the markdown produced by the core display types.

use anyhow::Result;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

/// Prints markdown styled through termimad, or verbatim with `--no-color`.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            self.render_line(line);
        }
        Ok(())
    }

    /// Headers keep their hashes so day and item numbers stay readable.
    fn render_line(&self, line: &str) {
        if line.starts_with("## ") {
            println!("{}", line.cyan().bold());
        } else if line.starts_with('#') {
            println!("{}", line.cyan());
        } else if line.starts_with("Skipped:") {
            println!("{}", line.dark_yellow());
        } else if line.starts_with("Error:") {
            println!("{}", line.red());
        } else {
            self.skin.print_inline(line);
            println!();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
