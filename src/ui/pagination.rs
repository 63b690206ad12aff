use crate::app::App;
use crate::app::pagination::{PageItem, Pagination};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the page strip and records each clickable label
pub fn render_pagination(frame: &mut Frame, app: &mut App, pagination: Pagination, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Page {} of {} ",
            pagination.current_index + 1,
            pagination.page_count
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // (label, target page, is current)
    let mut labels: Vec<(String, Option<usize>, bool)> = vec![("←".to_string(), pagination.previous(), false)];
    for item in pagination.items() {
        match item {
            PageItem::Page(index) => labels.push((
                (index + 1).to_string(),
                Some(index),
                index == pagination.current_index,
            )),
            PageItem::Break => labels.push(("…".to_string(), None, false)),
        }
    }
    labels.push(("→".to_string(), pagination.next(), false));

    let total_width: u16 = labels
        .iter()
        .map(|(label, _, _)| label.chars().count() as u16 + 2)
        .sum::<u16>()
        + labels.len().saturating_sub(1) as u16;

    let mut x = inner.x + inner.width.saturating_sub(total_width) / 2;
    for (label, target, current) in labels {
        let width = label.chars().count() as u16 + 2;
        if x + width > inner.right() {
            break;
        }

        let style = if current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if target.is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let rect = Rect::new(x, inner.y, width, 1);
        frame.render_widget(Paragraph::new(format!(" {} ", label)).style(style), rect);
        if let Some(index) = target {
            app.hit_map.pages.push((rect, index));
        }
        x += width + 1;
    }
}
