use crate::{Actor, DataStore, Director, LoadState, Movie, PathStore, Route};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load_state: LoadState,
    /// True while the catalog must not be treated as authoritative.
    pub loading: bool,
    pub movies: Vec<MovieRowView>,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Detail screen for the top of the path; `None` at the root.
    pub detail: Option<DetailView>,
    /// Labels of the routes reachable from the current screen.
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRowView {
    pub title: String,
    pub release_date: String,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Movie {
        movie: Movie,
    },
    Director {
        director: Director,
        movies: Vec<Movie>,
        actors: Vec<Actor>,
    },
    Actor {
        actor: Actor,
        movies: Vec<Movie>,
    },
}

pub(crate) fn build(data: &DataStore, path: &PathStore) -> AppViewModel {
    let movies = data
        .movies()
        .iter()
        .map(|movie| MovieRowView {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            director: movie.director.full_name(),
        })
        .collect();

    let breadcrumbs = path
        .path()
        .iter()
        .enumerate()
        .map(|(index, route)| Breadcrumb {
            index,
            label: route.label(),
        })
        .collect();

    AppViewModel {
        load_state: data.load_state(),
        loading: data.is_loading(),
        movies,
        breadcrumbs,
        detail: path.top().map(|route| detail(data, route)),
        links: links(data, path).iter().map(Route::label).collect(),
    }
}

fn detail(data: &DataStore, route: &Route) -> DetailView {
    match route {
        Route::Movie(movie) => DetailView::Movie {
            movie: movie.clone(),
        },
        Route::Director(director) => DetailView::Director {
            director: director.clone(),
            movies: data.movies_by_director(director),
            actors: data.actors_for_director(director),
        },
        Route::Actor(actor) => DetailView::Actor {
            actor: actor.clone(),
            movies: data.movies_with_actor(actor),
        },
    }
}

/// Nothing is reachable while a load is in flight; the catalog is not authoritative yet.
pub(crate) fn links(data: &DataStore, path: &PathStore) -> Vec<Route> {
    if data.is_loading() {
        return Vec::new();
    }
    let Some(top) = path.top() else {
        return data.movies().iter().cloned().map(Route::Movie).collect();
    };

    match top {
        Route::Movie(movie) => std::iter::once(Route::Director(movie.director.clone()))
            .chain(movie.actors.iter().cloned().map(Route::Actor))
            .collect(),
        Route::Director(director) => data
            .movies_by_director(director)
            .into_iter()
            .map(Route::Movie)
            .chain(
                data.actors_for_director(director)
                    .into_iter()
                    .map(Route::Actor),
            )
            .collect(),
        Route::Actor(actor) => data
            .movies_with_actor(actor)
            .into_iter()
            .map(Route::Movie)
            .collect(),
    }
}
