//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::router::Screen;
use crate::ui::theme::DeckTheme;

/// Status bar widget showing the current screen, position, and messages
pub struct StatusBarWidget<'a> {
    screen: &'a Screen,
    selected: usize,
    total: usize,
    theme: &'a DeckTheme,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(screen: &'a Screen, selected: usize, total: usize, theme: &'a DeckTheme) -> Self {
        Self {
            screen,
            selected,
            total,
            theme,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Screen indicator
        let (screen_text, screen_style) = match self.screen {
            Screen::Dashboard => (
                "DASHBOARD",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Screen::Story { .. } => (
                "STORY",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Screen::NotFound { .. } => ("LOST", self.theme.error_style()),
        };

        let mut spans = vec![
            Span::styled(format!("-- {screen_text} --"), screen_style),
            Span::raw(" | "),
        ];

        match self.screen {
            Screen::Dashboard => {
                if self.total == 0 {
                    spans.push(Span::styled("No stories", self.theme.status_style()));
                } else {
                    spans.push(Span::raw(format!(
                        "Story {}/{}",
                        self.selected + 1,
                        self.total
                    )));
                }
            }
            Screen::Story { route } => {
                spans.push(Span::raw(format!("/{route}")));
            }
            Screen::NotFound { path } => {
                spans.push(Span::styled(path.as_str(), self.theme.error_style()));
            }
        }

        // Add message if present
        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget<'a> {
    screen: &'a Screen,
    theme: &'a DeckTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(screen: &'a Screen, theme: &'a DeckTheme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hotkeys: Vec<(&str, bool)> = match self.screen {
            Screen::Dashboard => vec![
                ("←↑↓→:select", true),
                ("Enter:open", true),
                ("Tab:play button", true),
                ("Space:play", true),
                ("1-9:quick open", false),
                ("r:routes", false),
                ("?:help", false),
                ("q:quit", false),
            ],
            _ => vec![("Esc:back", true), ("?:help", false), ("q:quit", false)],
        };

        let spans: Vec<Span> = hotkeys
            .iter()
            .flat_map(|(text, primary)| {
                let style = if *primary {
                    Style::default()
                } else {
                    self.theme.status_style()
                };
                vec![Span::styled(*text, style), Span::raw("  ")]
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}
