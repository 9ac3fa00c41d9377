use std::collections::HashSet;

use catalog_logging::{catalog_debug, catalog_warn};

use crate::{Actor, Director, Movie};

/// Lifecycle of the one-shot catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Owner of the movie catalog and its read queries.
///
/// The catalog is only ever replaced wholesale: a load either installs the
/// complete, sorted collection or leaves the store empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataStore {
    movies: Vec<Movie>,
    load_state: LoadState,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Sorts the catalog ascending by title.
    pub fn sort(&mut self) {
        self.movies.sort_by(|a, b| a.title.cmp(&b.title));
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn movies_with_actor(&self, actor: &Actor) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.actors.contains(actor))
            .cloned()
            .collect()
    }

    pub fn movies_by_director(&self, director: &Director) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| &movie.director == director)
            .cloned()
            .collect()
    }

    /// Actors across every movie by `director`, in first-occurrence order.
    pub fn actors_for_director(&self, director: &Director) -> Vec<Actor> {
        let mut seen = HashSet::new();
        self.movies
            .iter()
            .filter(|movie| &movie.director == director)
            .flat_map(|movie| movie.actors.iter())
            .filter(|actor| seen.insert(*actor))
            .cloned()
            .collect()
    }

    pub(crate) fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Installs a freshly loaded catalog and sorts it before anyone can read it.
    pub(crate) fn populate(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.sort();
        self.load_state = LoadState::Loaded;
        catalog_debug!("Catalog populated with {} movies", self.movies.len());
    }

    pub(crate) fn reset(&mut self, reason: &str) {
        catalog_warn!(
            "Catalog load failed, dropping {} movies: {}",
            self.movies.len(),
            reason
        );
        self.movies.clear();
        self.load_state = LoadState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            description: String::new(),
            actors: Vec::new(),
            director: Director {
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                movies: vec![title.to_string()],
            },
            release_date: "2000".to_string(),
        }
    }

    #[test]
    fn populate_sorts_by_title() {
        let mut store = DataStore::new();
        store.begin_load();
        store.populate(vec![movie("b"), movie("C"), movie("a")]);

        let titles: Vec<_> = store.movies().iter().map(|m| m.title.as_str()).collect();
        // Default string ordering puts uppercase before lowercase.
        assert_eq!(titles, vec!["C", "a", "b"]);
        assert_eq!(store.load_state(), LoadState::Loaded);
    }

    #[test]
    fn reset_clears_prior_contents() {
        let mut store = DataStore::new();
        store.populate(vec![movie("a")]);
        store.reset("boom");

        assert!(store.movies().is_empty());
        assert_eq!(store.load_state(), LoadState::Failed);
    }

    #[test]
    fn new_store_is_empty_and_not_loaded() {
        let store = DataStore::new();
        assert!(store.movies().is_empty());
        assert_eq!(store.load_state(), LoadState::NotLoaded);
        assert!(!store.is_loading());
    }
}
