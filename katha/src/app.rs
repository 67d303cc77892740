//! Main application state and logic

use katha_core::{Catalog, Dispatcher};
use ratatui::layout::Rect;

use crate::router::{Screen, ScreenRouter};
use crate::ui::theme::DeckTheme;
use crate::ui::Overlay;

/// Which surface inside the selected card holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFocus {
    /// The card body; Enter opens the story
    #[default]
    Body,
    /// The embedded play control; Enter presses it
    PlayButton,
}

/// The surface a card activation came from.
///
/// Both surfaces open the same story. The distinction matters for
/// hit-testing (the play control swallows its click instead of letting the
/// card see it too) and for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSurface {
    CardBody,
    PlayControl,
}

/// A resolved card activation: which card, through which surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTrigger {
    pub index: usize,
    pub surface: TriggerSurface,
}

/// Main application state
pub struct App {
    /// The validated story catalog; read-only for the life of the process.
    pub catalog: Catalog,
    /// Dispatcher wired to the screen router.
    pub dispatcher: Dispatcher<ScreenRouter>,

    // UI state
    pub theme: DeckTheme,
    pub selected: usize,
    pub card_focus: CardFocus,
    overlay: Option<Overlay>,

    /// Terminal area from the last draw. Mouse hit-testing recomputes the
    /// card grid from this, so clicks land on what was actually rendered.
    pub viewport: Rect,

    // Status
    status_message: Option<String>,
}

impl App {
    /// Create the application over an already validated catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            dispatcher: Dispatcher::new(ScreenRouter::new()),
            theme: DeckTheme::default(),
            selected: 0,
            card_focus: CardFocus::default(),
            overlay: None,
            viewport: Rect::default(),
            status_message: Some(
                "Enter opens the selected story. Tab reaches its Play button.".to_string(),
            ),
        }
    }

    /// The screen the router currently points at
    pub fn screen(&self) -> &Screen {
        self.dispatcher.navigator().screen()
    }

    /// Record the terminal area the renderer last drew into
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select `index` if a card exists there (mouse path)
    pub fn select(&mut self, index: usize) {
        if index < self.catalog.len() && index != self.selected {
            self.selected = index;
            self.card_focus = CardFocus::Body;
        }
    }

    /// Move selection right, clamped at the last card
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.catalog.len() {
            self.selected += 1;
            self.card_focus = CardFocus::Body;
        }
    }

    /// Move selection left, clamped at the first card
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.card_focus = CardFocus::Body;
        }
    }

    /// Move selection one grid row down; `columns` comes from the live layout
    pub fn select_down(&mut self, columns: usize) {
        let next = self.selected + columns;
        if next < self.catalog.len() {
            self.selected = next;
            self.card_focus = CardFocus::Body;
        }
    }

    /// Move selection one grid row up
    pub fn select_up(&mut self, columns: usize) {
        if self.selected >= columns {
            self.selected -= columns;
            self.card_focus = CardFocus::Body;
        }
    }

    /// Move keyboard focus between the card body and its play control
    pub fn toggle_card_focus(&mut self) {
        self.card_focus = match self.card_focus {
            CardFocus::Body => CardFocus::PlayButton,
            CardFocus::PlayButton => CardFocus::Body,
        };
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Activate whatever the keyboard focus points at on the selected card
    pub fn activate_selected(&mut self) {
        let surface = match self.card_focus {
            CardFocus::Body => TriggerSurface::CardBody,
            CardFocus::PlayButton => TriggerSurface::PlayControl,
        };
        self.open_card(CardTrigger {
            index: self.selected,
            surface,
        });
    }

    /// The single activation funnel. Every trigger surface ends up here, and
    /// one call performs at most one dispatch.
    pub fn open_card(&mut self, trigger: CardTrigger) {
        if trigger.index >= self.catalog.len() {
            self.set_status(format!("No story at position {}", trigger.index + 1));
            return;
        }

        let record = &self.catalog.records()[trigger.index];
        let result = self.dispatcher.dispatch(&self.catalog, record);

        match result {
            Ok(()) => self.clear_status(),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Leave a story or not-found screen; selection is kept
    pub fn back_to_dashboard(&mut self) {
        self.dispatcher.navigator_mut().go_dashboard();
    }

    // =========================================================================
    // Overlays and status
    // =========================================================================

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Toggle the route collision overlay
    pub fn toggle_routes(&mut self) {
        if matches!(self.overlay, Some(Overlay::Routes)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Routes);
        }
    }

    /// Close any open overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Get the current overlay
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Check if an overlay is currently open
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katha_core::sample_records;

    fn sample_app() -> App {
        App::new(Catalog::new(sample_records()).unwrap())
    }

    #[test]
    fn test_new_app_starts_on_dashboard() {
        let app = sample_app();
        assert_eq!(app.screen(), &Screen::Dashboard);
        assert_eq!(app.selected, 0);
        assert_eq!(app.card_focus, CardFocus::Body);
        assert!(app.status_message().is_some());
    }

    #[test]
    fn test_activate_opens_the_selected_story() {
        let mut app = sample_app();
        app.activate_selected();
        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "golconda".to_string()
            }
        );
    }

    #[test]
    fn test_play_focus_opens_the_same_destination() {
        let mut app = sample_app();
        app.select_next();
        app.toggle_card_focus();
        assert_eq!(app.card_focus, CardFocus::PlayButton);

        app.activate_selected();

        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "cleanliness".to_string()
            }
        );
    }

    #[test]
    fn test_stale_trigger_index_is_suppressed() {
        let mut app = sample_app();
        app.open_card(CardTrigger {
            index: 99,
            surface: TriggerSurface::CardBody,
        });

        assert_eq!(app.screen(), &Screen::Dashboard);
        assert_eq!(app.status_message(), Some("No story at position 100"));
    }

    #[test]
    fn test_successful_open_clears_the_status_line() {
        let mut app = sample_app();
        app.set_status("leftover");
        app.activate_selected();
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut app = sample_app();
        app.select_prev();
        assert_eq!(app.selected, 0);

        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected, 5);
    }

    #[test]
    fn test_vertical_selection_moves_by_row() {
        let mut app = sample_app();
        app.select_down(3);
        assert_eq!(app.selected, 3);

        app.select_up(3);
        assert_eq!(app.selected, 0);

        // A full row below the last card does not exist.
        app.select(4);
        app.select_down(3);
        assert_eq!(app.selected, 4);
    }

    #[test]
    fn test_moving_selection_resets_play_focus() {
        let mut app = sample_app();
        app.toggle_card_focus();
        app.select_next();
        assert_eq!(app.card_focus, CardFocus::Body);
    }

    #[test]
    fn test_back_keeps_the_selection() {
        let mut app = sample_app();
        app.select(4);
        app.activate_selected();
        app.back_to_dashboard();

        assert_eq!(app.screen(), &Screen::Dashboard);
        assert_eq!(app.selected, 4);
    }

    #[test]
    fn test_overlays_toggle_and_replace() {
        let mut app = sample_app();
        app.toggle_help();
        assert_eq!(app.overlay(), Some(Overlay::Help));

        app.toggle_routes();
        assert_eq!(app.overlay(), Some(Overlay::Routes));

        app.toggle_routes();
        assert!(!app.has_overlay());
    }
}
