use crate::app::App;
use crate::app::notices::NoticeKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const NOTICE_WIDTH: u16 = 48;

/// Stacks notices in the top-right corner, oldest on top
pub fn render_notices(frame: &mut Frame, app: &App, area: Rect) {
    if app.notices.is_empty() {
        return;
    }

    let width = NOTICE_WIDTH.min(area.width);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let mut y = area.y + 1;

    for notice in app.notices.iter() {
        let (icon, color) = match notice.kind {
            NoticeKind::Info => ("ℹ", Color::Cyan),
            NoticeKind::Error => ("✕", Color::Red),
        };

        let lines = (notice.message.chars().count() + 2).div_ceil(text_width).clamp(1, 3) as u16;
        let height = lines + 2;
        if y + height > area.bottom() {
            break;
        }

        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, height);
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::raw(notice.message.as_str()),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
        y += height;
    }
}
