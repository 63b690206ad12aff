use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const EMPTY_QUERY_NOTICE: &str = "Please enter your search query.";
pub const LOAD_ERROR_NOTICE: &str = "Error loading movies. Please check your network or API token.";

const NOTICE_TTL: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 4;

pub fn no_results_notice(query: &str) -> String {
    format!("No movies found for your request: \"{}\"", query)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Toast-style messages painted in the top-right corner, oldest first.
#[derive(Debug)]
pub struct Notices {
    queue: VecDeque<Notice>,
    ttl: Duration,
}

impl Default for Notices {
    fn default() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }
}

impl Notices {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        tracing::debug!(?kind, %message, "notice");
        self.queue.push_back(Notice {
            kind,
            message,
            shown_at: Instant::now(),
        });
        while self.queue.len() > MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    /// Drops notices older than the TTL.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|notice| now.saturating_duration_since(notice.shown_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
