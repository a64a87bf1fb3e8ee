//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use recipe_core::Theme;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    header_color: u8,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer styled for `theme`
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        let mut skin = match theme {
            Theme::Light => MadSkin::default_light(),
            Theme::Dark => MadSkin::default_dark(),
        };

        // ANSI foreground codes: blue on light backgrounds, cyan on dark
        let header_color = match theme {
            Theme::Light => {
                skin.set_headers_fg(Color::Blue);
                skin.bold.set_fg(Color::DarkRed);
                skin.italic.set_fg(Color::Magenta);
                34
            }
            Theme::Dark => {
                skin.set_headers_fg(Color::Cyan);
                skin.bold.set_fg(Color::Yellow);
                skin.italic.set_fg(Color::Magenta);
                36
            }
        };
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            header_color,
            skin,
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[{}m{line}\x1b[0m", self.header_color);
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, Theme::default())
    }
}
