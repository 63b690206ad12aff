mod error;
mod footer;
mod header;
mod loading;
mod main_content;
mod movie_detail;
mod movie_grid;
mod notices;
mod pagination;
#[allow(clippy::module_inception)]
mod ui;

pub use ui::ui;
