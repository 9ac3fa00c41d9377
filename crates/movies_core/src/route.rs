use crate::{Actor, Director, Movie};

/// A navigable destination. Routes compare and hash by the value they carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Movie(Movie),
    Director(Director),
    Actor(Actor),
}

impl Route {
    /// Short text used for breadcrumbs and link lists.
    pub fn label(&self) -> String {
        match self {
            Route::Movie(movie) => movie.title.clone(),
            Route::Director(director) => director.full_name(),
            Route::Actor(actor) => actor.full_name(),
        }
    }
}

impl From<Movie> for Route {
    fn from(movie: Movie) -> Self {
        Route::Movie(movie)
    }
}

impl From<Director> for Route {
    fn from(director: Director) -> Self {
        Route::Director(director)
    }
}

impl From<Actor> for Route {
    fn from(actor: Actor) -> Self {
        Route::Actor(actor)
    }
}
