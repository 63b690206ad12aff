#[allow(clippy::module_inception)]
mod app;
pub mod notices;
pub mod overlay;
pub mod pagination;
pub mod search;
pub mod tmdb;

pub use app::{App, BackdropState};
#[cfg(test)]
pub use app::FetchStatus;
