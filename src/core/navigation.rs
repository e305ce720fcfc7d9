//! # Navigation
//!
//! A route stack: the gallery is the root, details screens are pushed on top.
//! The detail route owns the record it was opened with, so the detail screen
//! never reaches back into gallery state.

use log::debug;

use crate::api::ImageRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Details(ImageRecord),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Gallery => "Gallery",
            Route::Details(_) => "Image Details",
        }
    }
}

pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Gallery],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        debug!("Navigate -> {}", route.title());
        self.stack.push(route);
    }

    /// Pops one route. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            debug!("Navigate back -> {}", self.current().title());
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_starts_at_gallery() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &Route::Gallery);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_carries_payload_and_back_returns() {
        let mut nav = Navigator::new();
        let item = record("PIA001", true);
        nav.push(Route::Details(item.clone()));
        assert_eq!(nav.current(), &Route::Details(item));
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Gallery);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
    }
}
