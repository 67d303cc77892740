//! Layout calculations for the dashboard TUI.
//!
//! All geometry lives here as pure functions of the terminal area, so the
//! renderer and mouse hit-testing always agree on where things are.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of a story card in rows, borders included.
pub const CARD_HEIGHT: u16 = 9;

/// Text of the embedded play control, without padding.
pub const PLAY_LABEL: &str = "▶ Play Now";

/// Horizontal gap between card columns.
const CARD_GAP: u16 = 2;

/// Vertical gap between card rows.
const ROW_GAP: u16 = 1;

/// Cards stop growing past this width on wide terminals.
const MAX_CARD_WIDTH: u16 = 44;

/// Number of card columns for a given terminal width.
///
/// The grid is responsive: narrow terminals get a single column, wide ones
/// three.
pub fn grid_columns(width: u16) -> usize {
    if width < 70 {
        1
    } else if width < 110 {
        2
    } else {
        3
    }
}

/// Calculate the main layout areas
pub struct DashboardLayout {
    pub title_area: Rect,
    pub grid_area: Rect,
    /// One rect per visible card, row-major in catalog order. Cards that do
    /// not fit the grid vertically are dropped, which also makes them
    /// unclickable.
    pub cards: Vec<Rect>,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect, card_count: usize) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // Title bar
                Constraint::Min(CARD_HEIGHT),    // Card grid
                Constraint::Length(1),           // Status bar
                Constraint::Length(1),           // Hotkey bar
            ])
            .split(area);

        let grid_area = main_chunks[1];

        Self {
            title_area: main_chunks[0],
            grid_area,
            cards: card_rects(grid_area, card_count),
            status_bar: main_chunks[2],
            hotkey_bar: main_chunks[3],
        }
    }
}

/// Layout for the story and not-found screens.
pub struct StoryLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl StoryLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Title bar
                Constraint::Min(8),     // Story body
                Constraint::Length(1),  // Status bar
                Constraint::Length(1),  // Hotkey bar
            ])
            .split(area);

        Self {
            title_area: main_chunks[0],
            body_area: main_chunks[1],
            status_bar: main_chunks[2],
            hotkey_bar: main_chunks[3],
        }
    }
}

/// Card rectangles for `card_count` records, laid out row-major and centered
/// horizontally in `grid`.
fn card_rects(grid: Rect, card_count: usize) -> Vec<Rect> {
    if grid.width < 10 || grid.height == 0 || card_count == 0 {
        return Vec::new();
    }

    let columns = grid_columns(grid.width) as u16;
    let gaps = (columns - 1) * CARD_GAP;
    let card_width = ((grid.width - gaps) / columns).min(MAX_CARD_WIDTH);
    let used = columns * card_width + gaps;
    let x0 = grid.x + (grid.width - used) / 2;

    let mut rects = Vec::with_capacity(card_count);
    for index in 0..card_count {
        let col = index as u16 % columns;
        let row = index as u16 / columns;
        let y = grid.y + row * (CARD_HEIGHT + ROW_GAP);
        if y + CARD_HEIGHT > grid.y + grid.height {
            break;
        }
        let x = x0 + col * (card_width + CARD_GAP);
        rects.push(Rect::new(x, y, card_width, CARD_HEIGHT));
    }
    rects
}

/// The clickable play control inside a card.
///
/// One row, centered, on the last row inside the bottom border. Degenerate
/// cards get a zero-width rect, which contains no point.
pub fn play_button_rect(card: Rect) -> Rect {
    if card.width < 4 || card.height < 3 {
        return Rect::new(card.x, card.y, 0, 0);
    }
    let width = (PLAY_LABEL.chars().count() as u16 + 2).min(card.width - 2);
    let x = card.x + (card.width - width) / 2;
    let y = card.y + card.height - 2;
    Rect::new(x, y, width, 1)
}

/// Calculate fixed-size centered popup area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
