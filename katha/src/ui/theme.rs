//! Color theme and styling for the dashboard TUI

use ratatui::style::{Color, Modifier, Style};

/// Dashboard color theme
#[derive(Debug, Clone)]
pub struct DeckTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_selected: Color,

    // Card colors
    pub name_text: Color,
    pub description_text: Color,
    pub genre_text: Color,

    // Play control colors
    pub play_button: Color,
    pub play_button_active: Color,

    // Chrome colors
    pub title_text: Color,
    pub status_text: Color,
    pub error_text: Color,
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_selected: Color::Cyan,

            name_text: Color::LightBlue,
            description_text: Color::Gray,
            genre_text: Color::Yellow,

            play_button: Color::LightGreen,
            play_button_active: Color::Green,

            title_text: Color::White,
            status_text: Color::DarkGray,
            error_text: Color::LightRed,
        }
    }
}

impl DeckTheme {
    /// Get border style for a card or panel
    pub fn border_style(&self, selected: bool) -> Style {
        Style::default().fg(if selected {
            self.border_selected
        } else {
            self.border
        })
    }

    /// Get style for the title bar
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for story names
    pub fn name_style(&self, selected: bool) -> Style {
        let style = Style::default().fg(self.name_text);
        if selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Get style for story descriptions
    pub fn description_style(&self) -> Style {
        Style::default().fg(self.description_text)
    }

    /// Get style for the genre badge
    pub fn genre_style(&self) -> Style {
        Style::default()
            .fg(self.genre_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for the play control; `active` means keyboard focus sits on
    /// it right now
    pub fn play_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(self.play_button_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.play_button)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Get style for low-priority status text
    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(self.status_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }
}
