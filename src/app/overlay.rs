//! Detail overlay state and the resources it holds while open.
//!
//! Opening the overlay locks background scrolling and binds Escape as a
//! global key. Both are held by guards inside [`DetailOverlay::Open`], so
//! every way of leaving the open state (close, replacement, drop) releases
//! them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::crossterm::event::KeyCode;

use crate::app::tmdb::Movie;

/// Shared flag that disables grid scrolling behind a modal.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}

/// Keys that are handled before any screen-specific handling.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    bound: Rc<RefCell<Vec<KeyCode>>>,
}

impl KeyListeners {
    pub fn bind(&self, code: KeyCode) -> KeyListenerGuard {
        self.bound.borrow_mut().push(code);
        KeyListenerGuard {
            code,
            bound: Rc::clone(&self.bound),
        }
    }

    pub fn is_bound(&self, code: KeyCode) -> bool {
        self.bound.borrow().contains(&code)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bound.borrow().len()
    }
}

#[derive(Debug)]
pub struct KeyListenerGuard {
    code: KeyCode,
    bound: Rc<RefCell<Vec<KeyCode>>>,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        let mut bound = self.bound.borrow_mut();
        if let Some(pos) = bound.iter().position(|code| *code == self.code) {
            bound.remove(pos);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// Where a click inside the overlay's frame landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
    CloseButton,
}

#[derive(Debug, Default)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open {
        movie: Rc<Movie>,
        _scroll: ScrollLockGuard,
        _escape: KeyListenerGuard,
    },
}

impl DetailOverlay {
    pub fn open(&mut self, movie: Rc<Movie>, scroll: &ScrollLock, keys: &KeyListeners) {
        tracing::debug!(movie_id = movie.id, title = %movie.title, "opening detail overlay");
        // Acquire first so a replaced overlay never leaves the lock released
        let next = DetailOverlay::Open {
            movie,
            _scroll: scroll.acquire(),
            _escape: keys.bind(KeyCode::Esc),
        };
        *self = next;
    }

    /// Returns `true` if the overlay was open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::debug!(?reason, "closing detail overlay");
        *self = DetailOverlay::Closed;
        true
    }

    /// Only a click on the backdrop itself closes, not one on the content.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(CloseReason::Backdrop),
            ClickTarget::CloseButton => self.close(CloseReason::CloseButton),
            ClickTarget::Content => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailOverlay::Open { .. })
    }

    pub fn movie(&self) -> Option<&Rc<Movie>> {
        match self {
            DetailOverlay::Open { movie, .. } => Some(movie),
            DetailOverlay::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> Rc<Movie> {
        Rc::new(Movie {
            id,
            title: format!("Movie {id}"),
            overview: String::new(),
            release_date: None,
            vote_average: 6.5,
            poster_path: None,
            backdrop_path: None,
        })
    }

    fn opened() -> (DetailOverlay, ScrollLock, KeyListeners) {
        let scroll = ScrollLock::default();
        let keys = KeyListeners::default();
        let mut overlay = DetailOverlay::default();
        overlay.open(movie(1), &scroll, &keys);
        (overlay, scroll, keys)
    }

    #[test]
    fn opening_locks_scroll_and_binds_escape() {
        let (overlay, scroll, keys) = opened();
        assert!(overlay.is_open());
        assert!(scroll.is_locked());
        assert!(keys.is_bound(KeyCode::Esc));
    }

    #[test]
    fn every_close_path_releases_resources() {
        for reason in [CloseReason::Escape, CloseReason::Backdrop, CloseReason::CloseButton] {
            let (mut overlay, scroll, keys) = opened();
            assert!(overlay.close(reason));
            assert!(!overlay.is_open());
            assert!(!scroll.is_locked(), "{reason:?} left scroll locked");
            assert!(!keys.is_bound(KeyCode::Esc), "{reason:?} left listener bound");
        }
    }

    #[test]
    fn dropping_open_overlay_releases_resources() {
        let (overlay, scroll, keys) = opened();
        drop(overlay);
        assert!(!scroll.is_locked());
        assert_eq!(keys.len(), 0);
    }

    #[test]
    fn content_click_keeps_overlay_open() {
        let (mut overlay, scroll, _keys) = opened();
        assert!(!overlay.click(ClickTarget::Content));
        assert!(overlay.is_open());
        assert!(scroll.is_locked());

        assert!(overlay.click(ClickTarget::Backdrop));
        assert!(!scroll.is_locked());
    }

    #[test]
    fn reopening_replaces_movie_without_leaking_guards() {
        let (mut overlay, scroll, keys) = opened();
        overlay.open(movie(2), &scroll, &keys);
        assert_eq!(overlay.movie().map(|m| m.id), Some(2));
        assert_eq!(keys.len(), 1);

        overlay.close(CloseReason::Escape);
        assert!(!scroll.is_locked());
        assert_eq!(keys.len(), 0);
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let mut overlay = DetailOverlay::default();
        assert!(!overlay.close(CloseReason::Escape));
        assert!(overlay.movie().is_none());
    }

    #[test]
    fn overlay_shares_the_movie_it_was_given() {
        let scroll = ScrollLock::default();
        let keys = KeyListeners::default();
        let selected = movie(7);
        let mut overlay = DetailOverlay::default();
        overlay.open(Rc::clone(&selected), &scroll, &keys);
        assert!(Rc::ptr_eq(overlay.movie().unwrap(), &selected));
    }
}
