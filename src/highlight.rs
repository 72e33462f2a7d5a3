use std::io::IsTerminal;

use inksac::prelude::*;

/// Terminal colouring for prompts, errors and listings.
///
/// A plain palette returns every string untouched.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::detect()
    }
}

impl Palette {
    pub fn detect() -> Self {
        let supported = !matches!(
            check_color_support().unwrap_or(ColorSupport::NoColor),
            ColorSupport::NoColor
        );
        Self {
            enabled: supported && std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn prompt_path(&self, path: &str) -> String {
        self.paint(path, Style::builder().foreground(Color::Cyan).build())
    }

    pub fn error(&self, message: &str) -> String {
        self.paint(message, Style::builder().foreground(Color::Red).build())
    }

    pub fn builtin(&self, name: &str) -> String {
        self.paint(name, Style::builder().foreground(Color::Green).build())
    }

    pub fn index(&self, index: usize) -> String {
        self.paint(&index.to_string(), Self::listing())
    }

    pub fn entry(&self, name: &str) -> String {
        self.paint(name, Self::listing())
    }

    /// Bright magenta (ANSI 95) for history indices and `ls` names.
    fn listing() -> Style {
        Style::builder()
            .foreground(Color::RGB(255, 85, 255))
            .build()
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.style(style).to_string()
    }
}
