//! Styling for header cell content.
//!
//! A style names its colors rather than fixing them: `fg`/`bg` hold
//! [`StyleColor`] values that are resolved against the active theme when the
//! node is drawn (see [`style_to_ratatui`](crate::render::style_to_ratatui)).
//! Only the attributes the header surface renders with are modeled: bold for
//! the cell chrome, dim for de-emphasized indicators.

use ratatui::style::{Modifier, Style as RatatuiStyle};

use crate::color::StyleColor;

/// Visual style for header cell content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<StyleColor>,
    /// Background color
    pub bg: Option<StyleColor>,
    /// Bold text
    pub bold: bool,
    /// Dim/faint text
    pub dim: bool,
}

impl Style {
    /// Create a new empty style
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
        }
    }

    /// Set foreground color
    pub fn fg(mut self, color: impl Into<StyleColor>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set background color
    pub fn bg(mut self, color: impl Into<StyleColor>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Set bold
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set dim
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Convert the modifier flags to ratatui form.
    ///
    /// Colors are left unset here; they need a theme to resolve named
    /// references and are filled in by the renderer.
    pub fn to_ratatui_modifiers(&self) -> RatatuiStyle {
        let mut modifiers = Modifier::empty();
        if self.bold {
            modifiers |= Modifier::BOLD;
        }
        if self.dim {
            modifiers |= Modifier::DIM;
        }

        if modifiers.is_empty() {
            RatatuiStyle::default()
        } else {
            RatatuiStyle::default().add_modifier(modifiers)
        }
    }
}
