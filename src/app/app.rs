use std::rc::Rc;
use std::sync::{Arc, mpsc};
use std::time::Instant;

use image::DynamicImage;
use ratatui::crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use throbber_widgets_tui::ThrobberState;

use crate::app::notices::{EMPTY_QUERY_NOTICE, LOAD_ERROR_NOTICE, Notices, no_results_notice};
use crate::app::overlay::{ClickTarget, CloseReason, DetailOverlay, KeyListeners, ScrollLock};
use crate::app::pagination::Pagination;
use crate::app::search::SearchInput;
use crate::app::tmdb::{Movie, MovieSource, SearchPage};
use crate::error::{FetchError, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The `(query, page)` pair a fetch was issued for. Only a result whose
/// fingerprint matches the current one is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    /// One-based.
    pub page: u32,
    pub results: Vec<Rc<Movie>>,
    pub total_pages: u32,
    pub status: FetchStatus,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            status: FetchStatus::Idle,
        }
    }
}

pub enum MovieFetchMessage {
    Search {
        fingerprint: Fingerprint,
        result: Result<SearchPage, FetchError>,
    },
    Backdrop {
        movie_id: u64,
        result: Result<DynamicImage, FetchError>,
    },
}

pub enum BackdropState {
    /// No image support in this terminal, or nothing selected.
    Unavailable,
    Loading,
    Ready(StatefulProtocol),
    Failed,
}

/// Clickable regions recorded by the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub cards: Vec<(Rect, usize)>,
    pub pages: Vec<(Rect, usize)>,
    pub overlay: Option<Rect>,
    pub close_button: Option<Rect>,
    pub grid_columns: usize,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.pages.clear();
        self.overlay = None;
        self.close_button = None;
    }
}

pub struct App {
    pub search: SearchState,
    pub input: SearchInput,
    pub notices: Notices,
    pub overlay: DetailOverlay,
    pub scroll_lock: ScrollLock,
    pub key_listeners: KeyListeners,
    pub backdrop: BackdropState,
    /// Last fetch failure, kept for the error screen.
    pub last_error: Option<FetchError>,
    pub cursor: usize,
    pub hit_map: HitMap,
    pub throbber: ThrobberState,
    picker: Option<Picker>,
    source: Arc<dyn MovieSource>,
    sender: mpsc::Sender<MovieFetchMessage>,
    receiver: mpsc::Receiver<MovieFetchMessage>,
}

impl App {
    pub fn new(source: Arc<dyn MovieSource>, picker: Option<Picker>) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            search: SearchState::default(),
            input: SearchInput::default(),
            notices: Notices::default(),
            overlay: DetailOverlay::default(),
            scroll_lock: ScrollLock::default(),
            key_listeners: KeyListeners::default(),
            backdrop: BackdropState::Unavailable,
            last_error: None,
            cursor: 0,
            hit_map: HitMap::default(),
            throbber: ThrobberState::default(),
            picker,
            source,
            sender,
            receiver,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            query: self.search.query.clone(),
            page: self.search.page,
        }
    }

    pub fn should_show_grid(&self) -> bool {
        self.search.status == FetchStatus::Success && !self.search.results.is_empty()
    }

    pub fn should_show_pagination(&self) -> bool {
        self.search.total_pages > 1
    }

    pub fn should_show_error(&self) -> bool {
        self.search.status == FetchStatus::Error
    }

    pub fn should_show_loader(&self) -> bool {
        self.search.status == FetchStatus::Loading
    }

    pub fn results_heading(&self) -> Option<String> {
        if self.search.query.is_empty() {
            None
        } else {
            Some(format!("Results for: {}", self.search.query))
        }
    }

    pub fn missing_token(&self) -> bool {
        self.last_error
            .as_ref()
            .is_some_and(FetchError::is_configuration)
    }

    /// Submits whatever is in the search field.
    pub fn submit_search(&mut self) {
        match self.input.submit() {
            Ok(query) => {
                self.input.focused = false;
                self.submit_query(query);
            }
            Err(ValidationError::EmptyQuery) => {
                tracing::debug!("rejected empty search");
                self.notices.error(EMPTY_QUERY_NOTICE);
            }
        }
    }

    /// Starts a search for `query`, which must already be trimmed and non-empty.
    pub fn submit_query(&mut self, query: String) {
        if query == self.search.query {
            // Resubmitting after a failure is the manual retry
            if self.search.status == FetchStatus::Error {
                self.issue_fetch();
            }
            return;
        }

        self.search.query = query;
        self.search.page = 1;
        self.search.results.clear();
        self.search.total_pages = 0;
        self.cursor = 0;
        self.issue_fetch();
    }

    /// Handles a page change from the page strip. `index` is zero-based.
    pub fn change_page(&mut self, index: usize) {
        if !self.should_show_pagination() || self.search.query.is_empty() {
            return;
        }

        let Ok(page) = u32::try_from(index + 1) else {
            return;
        };
        if page > self.search.total_pages || page == self.search.page {
            return;
        }

        self.search.page = page;
        self.search.results.clear();
        self.cursor = 0;
        self.issue_fetch();
    }

    pub fn next_page(&mut self) {
        if let Some(index) = self.pagination().and_then(|p| p.next()) {
            self.change_page(index);
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(index) = self.pagination().and_then(|p| p.previous()) {
            self.change_page(index);
        }
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.should_show_pagination().then(|| Pagination {
            page_count: self.search.total_pages as usize,
            current_index: self.search.page.saturating_sub(1) as usize,
        })
    }

    fn issue_fetch(&mut self) {
        let fingerprint = self.fingerprint();
        self.search.status = FetchStatus::Loading;
        self.last_error = None;

        tracing::info!(query = %fingerprint.query, page = fingerprint.page, "fetching movies");

        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = source.search_movies(&fingerprint.query, fingerprint.page);
            let _ = sender.send(MovieFetchMessage::Search {
                fingerprint,
                result,
            });
        });
    }

    /// Drains everything the worker threads have sent so far.
    pub fn poll_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: MovieFetchMessage) {
        match message {
            MovieFetchMessage::Search {
                fingerprint,
                result,
            } => self.apply_search(fingerprint, result),
            MovieFetchMessage::Backdrop { movie_id, result } => {
                self.apply_backdrop(movie_id, result)
            }
        }
    }

    fn apply_search(&mut self, fingerprint: Fingerprint, result: Result<SearchPage, FetchError>) {
        if self.search.status != FetchStatus::Loading || fingerprint != self.fingerprint() {
            tracing::debug!(
                query = %fingerprint.query,
                page = fingerprint.page,
                "discarding superseded fetch result"
            );
            return;
        }

        match result {
            Ok(page) => {
                tracing::info!(
                    query = %fingerprint.query,
                    page = fingerprint.page,
                    results = page.movies.len(),
                    total_pages = page.total_pages,
                    "movies loaded"
                );
                if page.movies.is_empty() {
                    self.notices.info(no_results_notice(&fingerprint.query));
                }
                self.search.results = page.movies.into_iter().map(Rc::new).collect();
                self.search.total_pages = page.total_pages;
                self.search.status = FetchStatus::Success;
                self.cursor = 0;
            }
            Err(err) => {
                tracing::error!(
                    query = %fingerprint.query,
                    page = fingerprint.page,
                    error = %err,
                    "failed to load movies"
                );
                self.search.results.clear();
                self.search.total_pages = 0;
                self.search.status = FetchStatus::Error;
                self.notices.error(LOAD_ERROR_NOTICE);
                self.last_error = Some(err);
            }
        }
    }

    fn apply_backdrop(&mut self, movie_id: u64, result: Result<DynamicImage, FetchError>) {
        if self.overlay.movie().map(|m| m.id) != Some(movie_id) {
            return;
        }

        self.backdrop = match (result, &self.picker) {
            (Ok(image), Some(picker)) => BackdropState::Ready(picker.new_resize_protocol(image)),
            (Ok(_), None) => BackdropState::Unavailable,
            (Err(err), _) => {
                tracing::warn!(movie_id, error = %err, "failed to load backdrop");
                BackdropState::Failed
            }
        };
    }

    /// Opens the detail overlay for the result at `index`.
    pub fn select(&mut self, index: usize) {
        let Some(movie) = self.search.results.get(index).cloned() else {
            return;
        };
        self.cursor = index;
        self.input.focused = false;
        self.overlay
            .open(Rc::clone(&movie), &self.scroll_lock, &self.key_listeners);
        self.load_backdrop(&movie);
    }

    pub fn select_current(&mut self) {
        self.select(self.cursor);
    }

    fn load_backdrop(&mut self, movie: &Movie) {
        if self.picker.is_none() {
            self.backdrop = BackdropState::Unavailable;
            return;
        }

        self.backdrop = BackdropState::Loading;
        let movie_id = movie.id;
        let url = movie.detail_image_url();
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = source.fetch_image(&url);
            let _ = sender.send(MovieFetchMessage::Backdrop { movie_id, result });
        });
    }

    pub fn close_detail(&mut self, reason: CloseReason) {
        if self.overlay.close(reason) {
            self.backdrop = BackdropState::Unavailable;
        }
    }

    /// Dispatches keys bound through [`KeyListeners`]. Returns `true` if the
    /// key was consumed.
    pub fn on_global_key(&mut self, code: KeyCode) -> bool {
        if !self.key_listeners.is_bound(code) {
            return false;
        }
        match code {
            KeyCode::Esc => {
                self.close_detail(CloseReason::Escape);
                true
            }
            _ => false,
        }
    }

    /// Left click at a terminal cell, hit-tested against the last frame.
    pub fn click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if self.overlay.is_open() {
            let target = if self
                .hit_map
                .close_button
                .is_some_and(|rect| rect.contains(position))
            {
                ClickTarget::CloseButton
            } else if self
                .hit_map
                .overlay
                .is_some_and(|rect| rect.contains(position))
            {
                ClickTarget::Content
            } else {
                ClickTarget::Backdrop
            };
            if self.overlay.click(target) {
                self.backdrop = BackdropState::Unavailable;
            }
            return;
        }

        if let Some(index) = hit(&self.hit_map.cards, position) {
            self.select(index);
        } else if let Some(index) = hit(&self.hit_map.pages, position) {
            self.change_page(index);
        }
    }

    /// Moves the grid cursor. Ignored while a modal holds the scroll lock.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.scroll_lock.is_locked() || self.search.results.is_empty() {
            return;
        }
        let last = self.search.results.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn move_cursor_rows(&mut self, rows: isize) {
        let columns = self.hit_map.grid_columns.max(1) as isize;
        self.move_cursor(rows * columns);
    }

    pub fn on_tick(&mut self) {
        if self.should_show_loader() {
            self.throbber.calc_next();
        }
        self.notices.prune(Instant::now());
    }
}

fn hit(regions: &[(Rect, usize)], position: Position) -> Option<usize> {
    regions
        .iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, index)| *index)
}
