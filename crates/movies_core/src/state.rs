use crate::view_model::{self, AppViewModel};
use crate::{DataStore, PathStore, Route};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    data: DataStore,
    path: PathStore,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &DataStore {
        &self.data
    }

    pub fn path(&self) -> &PathStore {
        &self.path
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(&self.data, &self.path)
    }

    /// Routes reachable from the current screen, in display order.
    pub fn links(&self) -> Vec<Route> {
        view_model::links(&self.data, &self.path)
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn data_mut(&mut self) -> &mut DataStore {
        &mut self.data
    }

    pub(crate) fn path_mut(&mut self) -> &mut PathStore {
        &mut self.path
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
