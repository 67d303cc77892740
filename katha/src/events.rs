//! Event handling for the dashboard TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::app::{App, CardTrigger, TriggerSurface};
use crate::router::Screen;
use crate::ui::layout::{self, DashboardLayout};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(width, height) => {
            app.set_viewport(Rect::new(0, 0, width, height));
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Handle overlay keys first
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Route based on the current screen
    if matches!(app.screen(), Screen::Dashboard) {
        handle_dashboard_key(app, key)
    } else {
        handle_story_key(app, key)
    }
}

/// Handle keys on the dashboard (card grid)
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> EventResult {
    let columns = layout::grid_columns(app.viewport.width);

    match key.code {
        // Quit
        KeyCode::Char('q') => EventResult::Quit,

        // Overlays
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('r') => {
            app.toggle_routes();
            EventResult::NeedsRedraw
        }

        // Selection movement
        KeyCode::Left | KeyCode::Char('h') => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_down(columns);
            EventResult::NeedsRedraw
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_up(columns);
            EventResult::NeedsRedraw
        }

        // Focus the play control on the selected card
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_card_focus();
            EventResult::NeedsRedraw
        }

        // Open whatever holds keyboard focus
        KeyCode::Enter => {
            app.activate_selected();
            EventResult::NeedsRedraw
        }

        // Space always presses the embedded play control
        KeyCode::Char(' ') => {
            app.open_card(CardTrigger {
                index: app.selected,
                surface: TriggerSurface::PlayControl,
            });
            EventResult::NeedsRedraw
        }

        // Direct card selection (1-9 keys)
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).unwrap() as usize - 1;
            if index < app.catalog.len() {
                app.select(index);
                app.open_card(CardTrigger {
                    index,
                    surface: TriggerSurface::CardBody,
                });
            } else {
                app.set_status(format!("No story at position {}", index + 1));
            }
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys on a story or not-found screen
fn handle_story_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.back_to_dashboard();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle key when overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char(' ') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    if app.has_overlay() {
        return EventResult::Continue;
    }
    if !matches!(app.screen(), Screen::Dashboard) {
        return EventResult::Continue;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let grid = DashboardLayout::calculate(app.viewport, app.catalog.len());
            if let Some(trigger) = card_trigger_at(&grid, mouse.column, mouse.row) {
                app.select(trigger.index);
                app.open_card(trigger);
                return EventResult::NeedsRedraw;
            }
            EventResult::Continue
        }
        MouseEventKind::ScrollUp => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Resolve a click to the single trigger it lands on.
///
/// The play control sits inside its card, so a point can be inside both.
/// The control is tested first and the first hit wins, which keeps a click
/// on the control from also counting as a card-body click.
pub fn card_trigger_at(grid: &DashboardLayout, column: u16, row: u16) -> Option<CardTrigger> {
    let position = Position::new(column, row);
    for (index, card) in grid.cards.iter().enumerate() {
        if layout::play_button_rect(*card).contains(position) {
            return Some(CardTrigger {
                index,
                surface: TriggerSurface::PlayControl,
            });
        }
        if card.contains(position) {
            return Some(CardTrigger {
                index,
                surface: TriggerSurface::CardBody,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use katha_core::{sample_records, Catalog};

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn sample_app() -> App {
        let mut app = App::new(Catalog::new(sample_records()).unwrap());
        app.set_viewport(VIEWPORT);
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_enter_opens_the_selected_story() {
        let mut app = sample_app();
        let result = handle_event(&mut app, key(KeyCode::Enter));

        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "golconda".to_string()
            }
        );
    }

    #[test]
    fn test_digit_key_selects_and_opens() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Char('4')));

        assert_eq!(app.selected, 3);
        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "charminar".to_string()
            }
        );
    }

    #[test]
    fn test_digit_key_past_the_catalog_is_suppressed() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Char('9')));

        assert_eq!(app.screen(), &Screen::Dashboard);
        assert_eq!(app.status_message(), Some("No story at position 9"));
    }

    #[test]
    fn test_space_presses_the_play_control() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Right));
        handle_event(&mut app, key(KeyCode::Char(' ')));

        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "cleanliness".to_string()
            }
        );
    }

    #[test]
    fn test_click_on_play_control_resolves_to_one_trigger() {
        let grid = DashboardLayout::calculate(VIEWPORT, 6);
        let button = layout::play_button_rect(grid.cards[1]);
        let (col, row) = center(button);

        // The point genuinely lies inside both zones; resolution must pick
        // the control and stop.
        assert!(grid.cards[1].contains(Position::new(col, row)));

        let trigger = card_trigger_at(&grid, col, row).unwrap();
        assert_eq!(
            trigger,
            CardTrigger {
                index: 1,
                surface: TriggerSurface::PlayControl
            }
        );
    }

    #[test]
    fn test_click_on_card_body_resolves_to_the_card() {
        let grid = DashboardLayout::calculate(VIEWPORT, 6);
        // Top-left inner corner: inside the card, far from the control.
        let card = grid.cards[2];
        let trigger = card_trigger_at(&grid, card.x + 1, card.y + 1).unwrap();
        assert_eq!(
            trigger,
            CardTrigger {
                index: 2,
                surface: TriggerSurface::CardBody
            }
        );
    }

    #[test]
    fn test_click_between_cards_hits_nothing() {
        let grid = DashboardLayout::calculate(VIEWPORT, 6);
        let first = grid.cards[0];
        // The column gap between card 0 and card 1.
        let trigger = card_trigger_at(&grid, first.right(), first.y + 1);
        assert_eq!(trigger, None);
    }

    #[test]
    fn test_play_click_navigates_to_the_cards_route() {
        let mut app = sample_app();
        let grid = DashboardLayout::calculate(VIEWPORT, 6);
        let (col, row) = center(layout::play_button_rect(grid.cards[1]));

        let result = handle_event(&mut app, left_click(col, row));

        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(app.selected, 1);
        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "cleanliness".to_string()
            }
        );
    }

    #[test]
    fn test_body_click_navigates_like_the_play_control() {
        let mut app = sample_app();
        let grid = DashboardLayout::calculate(VIEWPORT, 6);
        let card = grid.cards[0];

        handle_event(&mut app, left_click(card.x + 2, card.y + 1));

        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "golconda".to_string()
            }
        );
    }

    #[test]
    fn test_click_with_no_viewport_is_harmless() {
        let mut app = App::new(Catalog::new(sample_records()).unwrap());
        let result = handle_event(&mut app, left_click(5, 5));
        assert_eq!(result, EventResult::Continue);
        assert_eq!(app.screen(), &Screen::Dashboard);
    }

    #[test]
    fn test_clicks_are_ignored_on_story_screens() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Enter));

        let grid = DashboardLayout::calculate(VIEWPORT, 6);
        let (col, row) = center(grid.cards[3]);
        let result = handle_event(&mut app, left_click(col, row));

        assert_eq!(result, EventResult::Continue);
        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "golconda".to_string()
            }
        );
    }

    #[test]
    fn test_escape_returns_to_the_dashboard() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Enter));
        handle_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen(), &Screen::Dashboard);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_overlay_swallows_keys_until_closed() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.has_overlay());

        // Enter closes the overlay instead of opening a story.
        handle_event(&mut app, key(KeyCode::Enter));
        assert!(!app.has_overlay());
        assert_eq!(app.screen(), &Screen::Dashboard);
    }

    #[test]
    fn test_routes_overlay_toggles() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Char('r')));
        assert!(app.has_overlay());
        handle_event(&mut app, key(KeyCode::Esc));
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_tab_then_enter_opens_via_play_control() {
        let mut app = sample_app();
        handle_event(&mut app, key(KeyCode::Tab));
        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.screen(),
            &Screen::Story {
                route: "golconda".to_string()
            }
        );
    }

    #[test]
    fn test_resize_updates_the_viewport() {
        let mut app = sample_app();
        handle_event(&mut app, Event::Resize(80, 24));
        assert_eq!(app.viewport, Rect::new(0, 0, 80, 24));
    }
}
