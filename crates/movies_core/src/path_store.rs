use catalog_logging::{catalog_debug, catalog_warn};

use crate::Route;

/// Navigation stack held as explicit state.
///
/// The path only grows by appending and only shrinks to a prefix; it is never
/// reordered or spliced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathStore {
    path: Vec<Route>,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[Route] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn top(&self) -> Option<&Route> {
        self.path.last()
    }

    pub fn push(&mut self, route: Route) {
        catalog_debug!("Push route {:?} at depth {}", route.label(), self.path.len());
        self.path.push(route);
    }

    /// Keeps the prefix ending at `index` (inclusive).
    ///
    /// An index past the end leaves the path untouched and returns `false`.
    pub fn reduce_to(&mut self, index: usize) -> bool {
        if index >= self.path.len() {
            catalog_warn!(
                "Ignoring truncate to index {} on path of length {}",
                index,
                self.path.len()
            );
            return false;
        }
        self.path.truncate(index + 1);
        true
    }

    pub fn pop(&mut self) -> Option<Route> {
        self.path.pop()
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }
}
