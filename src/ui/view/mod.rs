//! View layer
//!
//! Main render entry point and the page's panels

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, DeletePrompt};
use crate::banner::{Banner, BannerKind};
use components::render_input_widget;
use layouts::centered_rect;

/// Render the UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let open_banners: Vec<&Banner> = app.banners.open().collect();
    let banner_height = if open_banners.is_empty() {
        0
    } else {
        open_banners.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // title
            Constraint::Length(banner_height), // flash banners
            Constraint::Length(3),             // search bar
            Constraint::Min(10),               // player cards
            Constraint::Length(3),             // status / help
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_banners(frame, &open_banners, chunks[1]);
    render_search(frame, app, chunks[2]);
    render_cards(frame, app, chunks[3]);
    render_status(frame, app, chunks[4]);

    if let AppMode::Confirm(prompt) = &app.mode {
        render_confirm_dialog(frame, prompt);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🏓 Courtside — club roster")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_banners(frame: &mut Frame, banners: &[&Banner], area: Rect) {
    if banners.is_empty() {
        return;
    }

    let lines: Vec<Line> = banners
        .iter()
        .map(|banner| {
            let color = match banner.kind {
                BannerKind::Success => Color::Green,
                BannerKind::Danger => Color::Red,
                BannerKind::Info => Color::Blue,
            };
            Line::from(Span::styled(
                banner.text.clone(),
                Style::default().fg(color),
            ))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().title("Notices").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    render_input_widget(
        frame,
        area,
        "Search",
        &app.query,
        app.mode == AppMode::Searching,
        Color::Yellow,
    );
}

fn render_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .display_list
        .iter()
        .enumerate()
        .filter_map(|(i, id)| {
            let card = app.roster.get(id)?;
            let checkbox = if card.checked { "[x]" } else { "[ ]" };

            let content = format!(
                "{} {}  ({})  {} · member {} days",
                checkbox,
                card.full_name(),
                if card.skill_level.is_empty() {
                    "-"
                } else {
                    &card.skill_level
                },
                if card.city.is_empty() { "-" } else { &card.city },
                card.days_member()
            );

            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if card.checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            Some(ListItem::new(Line::from(vec![Span::styled(content, style)])))
        })
        .collect();

    let select_all_mark = if app.select_all { "[x]" } else { "[ ]" };
    let list_title = format!("Players {select_all_mark} select all [a]");

    let list_widget = List::new(items)
        .block(Block::default().title(list_title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[Space] check  [a] select all  [/] search  [d] delete  [x] dismiss notices  [j/k] navigate  [q] quit"
        }
        AppMode::Searching => "Type to filter  [Enter] done  [Esc] clear",
        AppMode::Confirm(_) => "[y] confirm  [n] cancel",
    };

    let mut parts: Vec<String> = Vec::new();
    if let Some(badge) = &app.count_badge {
        parts.push(format!("Selected: {}", badge.text));
    }
    parts.push(help_text.to_string());

    let status = Paragraph::new(parts.join("  |  "))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_confirm_dialog(frame: &mut Frame, prompt: &DeletePrompt) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(format!("{}\n\n[y] confirm  [n] cancel", prompt.message()))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("⚠️ Confirm delete").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
