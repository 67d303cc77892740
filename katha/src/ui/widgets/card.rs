//! Story card widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use katha_core::StoryRecord;

use crate::app::CardFocus;
use crate::ui::layout::{play_button_rect, PLAY_LABEL};
use crate::ui::theme::DeckTheme;

/// A single story card: glyph, title, description, genre badge, and the
/// embedded play control.
pub struct StoryCardWidget<'a> {
    record: &'a StoryRecord,
    theme: &'a DeckTheme,
    position: usize,
    selected: bool,
    focus: CardFocus,
}

impl<'a> StoryCardWidget<'a> {
    pub fn new(record: &'a StoryRecord, theme: &'a DeckTheme) -> Self {
        Self {
            record,
            theme,
            position: 0,
            selected: false,
            focus: CardFocus::Body,
        }
    }

    /// One-based corner number, matching the 1-9 hotkeys. Zero hides it.
    pub fn position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn focus(mut self, focus: CardFocus) -> Self {
        self.focus = focus;
        self
    }
}

impl Widget for StoryCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.selected))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.record.genre),
                    self.theme.genre_style(),
                ))
                .right_aligned(),
            );

        if self.position > 0 {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.position),
                    self.theme.status_style(),
                ))
                .left_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        // Body rows: glyph, title, description. The last inner row belongs
        // to the play control.
        let body_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let lines = vec![
            Line::from(self.record.image.as_str()).centered(),
            Line::from(Span::styled(
                self.record.name.as_str(),
                self.theme.name_style(self.selected),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                self.record.description.as_str(),
                self.theme.description_style(),
            ))
            .centered(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(body_area, buf);

        // Play control. Geometry comes from layout so clicks and pixels
        // cannot drift apart.
        let control = play_button_rect(area);
        let active = self.selected && matches!(self.focus, CardFocus::PlayButton);
        let label = Line::from(Span::styled(
            format!(" {PLAY_LABEL} "),
            self.theme.play_style(active),
        ));
        Paragraph::new(label).render(control, buf);
    }
}
