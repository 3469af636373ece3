use newsdesk_core::{AppViewModel, Screen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::input::{Focus, UiState};
use super::records;

const ACCENT: Color = Color::Cyan;
const SIDEBAR_WIDTH: u16 = 30;

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let banner_height = if view.error.is_some() { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    if let Some(error) = &view.error {
        draw_error_banner(frame, error, rows[0]);
    }

    match view.screen {
        Screen::Landing => draw_landing(frame, view, ui, rows[1]),
        Screen::Results => {
            draw_results(frame, view, ui, rows[1]);
            if view.loading_overlay {
                draw_loading_overlay(frame, rows[1]);
            }
        }
    }

    draw_footer(frame, view, rows[2]);
}

fn draw_error_banner(frame: &mut Frame, error: &str, area: Rect) {
    let banner = Paragraph::new(format!(" {error} ")).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(banner, area);
}

fn draw_landing(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let panel = centered_rect(64, 9, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Newsdesk ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Search the news by keyword").style(Style::default().fg(Color::Gray)),
        rows[0],
    );
    draw_search_box(frame, ui, true, rows[1]);
    if view.is_transitioning {
        frame.render_widget(
            Paragraph::new("Searching...").style(Style::default().fg(ACCENT)),
            rows[2],
        );
    }
}

fn draw_search_box(frame: &mut Frame, ui: &UiState, focused: bool, area: Rect) {
    let border = if focused { ACCENT } else { Color::DarkGray };
    let input = Paragraph::new(format!("{}_", ui.input)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Keywords "),
    );
    frame.render_widget(input, area);
}

fn draw_results(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    draw_search_box(frame, ui, ui.focus == Focus::Search, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);
    draw_keyword_sidebar(frame, view, ui, columns[0]);
    draw_articles(frame, view, ui, columns[1]);
}

fn draw_keyword_sidebar(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let items: Vec<ListItem> = records::keyword_entries(view)
        .into_iter()
        .map(|entry| {
            let (mark, style) = if entry.selected {
                ("[x] ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                ("[ ] ", Style::default().fg(Color::Gray))
            };
            ListItem::new(Line::from(vec![
                Span::raw(mark),
                Span::styled(entry.keyword, style),
            ]))
        })
        .collect();

    let focused = ui.focus == Focus::Keywords;
    let list = List::new(items)
        .block(panel_block(" Filters ", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(if focused { "> " } else { "  " });

    let mut state = ListState::default();
    state.select(Some(ui.scope.keyword_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_articles(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let title = format!(" Articles ({}) ", view.results.len());
    let focused = ui.focus == Focus::Articles;
    if view.results.is_empty() {
        let empty = Paragraph::new("No articles for these keywords.")
            .style(Style::default().fg(Color::Gray))
            .block(panel_block(&title, focused));
        frame.render_widget(empty, area);
        return;
    }

    let text_width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = view
        .results
        .iter()
        .map(|record| {
            let mut lines = vec![Line::from(Span::styled(
                truncate(&records::title(record), text_width),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(byline) = records::byline(record) {
                lines.push(Line::from(Span::styled(
                    truncate(&byline, text_width),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            if let Some(summary) = records::summary(record) {
                lines.push(Line::from(truncate(summary, text_width)));
            }
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(panel_block(&title, focused))
        .highlight_style(Style::default().fg(ACCENT))
        .highlight_symbol("| ");

    let mut state = ListState::default();
    state.select(Some(ui.scope.article_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_loading_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(28, 3, area);
    frame.render_widget(Clear, popup);
    let loading = Paragraph::new("Loading news...")
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(loading, popup);
}

fn draw_footer(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let hints = match view.screen {
        Screen::Landing => "Enter search | Esc quit",
        Screen::Results => {
            "Enter search | Tab focus | Space toggle keyword | Ctrl-R reset | Esc quit"
        }
    };
    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if view.is_transitioning {
        spans.push(Span::styled("  ...", Style::default().fg(ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title.to_owned())
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
