use crate::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if app.overlay.is_open() {
        "(Esc/x) close details, click outside to dismiss"
    } else if app.input.focused {
        "(Enter) to search, (Esc) to clear, (Tab) to results"
    } else if app.should_show_loader() {
        "Loading movies... (/) to search, (q) to quit"
    } else if app.should_show_grid() && app.should_show_pagination() {
        "(↑↓←→/hjkl) move, (Enter) details, (n/p) page, (/) search, (q) quit"
    } else if app.should_show_grid() {
        "(↑↓←→/hjkl) move, (Enter) details, (/) search, (q) quit"
    } else {
        "(/) to search movies, (q) to quit"
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(app);
    let bottom = Paragraph::new(Text::styled(instruction_text, Style::default()))
        .block(bottom_block);

    frame.render_widget(bottom, area);
}
