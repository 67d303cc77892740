//! Render orchestration for the dashboard TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::router::Screen;
use crate::ui::layout::{centered_rect_fixed, DashboardLayout, StoryLayout};
use crate::ui::widgets::{HotkeyBarWidget, StatusBarWidget, StoryCardWidget};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Routes,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.screen() {
        Screen::Dashboard => render_dashboard(frame, app, area),
        Screen::Story { route } => render_story(frame, app, route, area),
        Screen::NotFound { path } => render_not_found(frame, app, path, area),
    }

    // Render overlay if present
    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the card grid
fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let layout = DashboardLayout::calculate(area, app.catalog.len());

    render_title_bar(frame, app, layout.title_area);

    if app.catalog.is_empty() {
        let empty = Paragraph::new("The story catalog is empty.")
            .style(app.theme.status_style())
            .centered();
        frame.render_widget(empty, layout.grid_area);
    }

    // The zip drops cards the layout had no room for; they are not drawn
    // and not clickable.
    for (index, (record, card_area)) in app
        .catalog
        .records()
        .iter()
        .zip(layout.cards.iter())
        .enumerate()
    {
        let card = StoryCardWidget::new(record, &app.theme)
            .position(index + 1)
            .selected(index == app.selected)
            .focus(app.card_focus);
        frame.render_widget(card, *card_area);
    }

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);
}

/// Render a story's experience screen
fn render_story(frame: &mut Frame, app: &App, route: &str, area: Rect) {
    let layout = StoryLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let record = app.catalog.records().iter().find(|r| r.route == route);
    let shared = app
        .catalog
        .records()
        .iter()
        .filter(|r| r.route == route)
        .count();

    let mut lines = vec![Line::from("")];
    match record {
        Some(record) => {
            lines.push(Line::from(record.image.as_str()).centered());
            lines.push(
                Line::from(Span::styled(
                    record.name.as_str(),
                    app.theme.name_style(true),
                ))
                .centered(),
            );
            lines.push(
                Line::from(Span::styled(record.genre.as_str(), app.theme.genre_style()))
                    .centered(),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    record.description.as_str(),
                    app.theme.description_style(),
                ))
                .centered(),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    "The playable experience opens here.",
                    app.theme.status_style(),
                ))
                .centered(),
            );
            if shared > 1 {
                lines.push(Line::from(""));
                lines.push(
                    Line::from(Span::styled(
                        format!("{shared} catalog entries share this destination."),
                        app.theme.status_style(),
                    ))
                    .centered(),
                );
            }
        }
        None => {
            lines.push(
                Line::from(Span::styled(format!("/{route}"), app.theme.title_style())).centered(),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    "No catalog entry describes this destination.",
                    app.theme.status_style(),
                ))
                .centered(),
            );
        }
    }

    let block = Block::default()
        .title(format!(" /{route} "))
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let body = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(body, layout.body_area);

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);
}

/// Render the fallback screen for unroutable paths
fn render_not_found(frame: &mut Frame, app: &App, path: &str, area: Rect) {
    let layout = StoryLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(path, app.theme.error_style())).centered(),
        Line::from(""),
        Line::from(Span::styled(
            "No screen is registered for this path.",
            app.theme.status_style(),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to return to the dashboard.",
            app.theme.status_style(),
        ))
        .centered(),
    ];

    let block = Block::default()
        .title(" Route Not Found ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        layout.body_area,
    );

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Katha | {} stories ", app.catalog.len());
    let line = Line::from(Span::styled(title, app.theme.title_style()));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = StatusBarWidget::new(app.screen(), app.selected, app.catalog.len(), &app.theme)
        .message(app.status_message());
    frame.render_widget(status, area);
}

/// Render the hotkey bar
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hotkeys = HotkeyBarWidget::new(app.screen(), &app.theme);
    frame.render_widget(hotkeys, area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
        Overlay::Routes => render_routes_overlay(frame, app, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(46, 18, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Katha - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Dashboard:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  ←↑↓→ or hjkl   Move the selection"),
        Line::from("  Enter          Open the selected card"),
        Line::from("  Tab            Focus the Play button"),
        Line::from("  Space          Press the Play button"),
        Line::from("  1-9            Open a card directly"),
        Line::from("  Mouse          Click a card or its button"),
        Line::from(""),
        Line::from(Span::styled(
            "Anywhere:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  r              Show shared routes"),
        Line::from("  Esc            Back to the dashboard"),
        Line::from("  q / Ctrl+C     Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(app.theme.text_style())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// Render the shared-route overlay
fn render_routes_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let collisions = app.catalog.route_collisions();

    let mut lines = vec![
        Line::from(Span::styled(
            " Shared Destinations ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if collisions.is_empty() {
        lines.push(Line::from("Every story has its own destination."));
    } else {
        for collision in &collisions {
            lines.push(Line::from(Span::styled(
                format!("/{} ({} entries)", collision.route, collision.names.len()),
                app.theme.genre_style(),
            )));
            for name in &collision.names {
                lines.push(Line::from(format!("    {name}")));
            }
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(Span::styled(
        "Press Esc or q to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let popup_area = centered_rect_fixed(52, height, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Routes ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(app.theme.text_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
