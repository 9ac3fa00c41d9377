//! Movies core: pure state machine, catalog queries and view-model helpers.
mod data_store;
mod effect;
mod model;
mod msg;
mod path_store;
mod route;
mod state;
mod update;
mod view_model;

pub use data_store::{DataStore, LoadState};
pub use effect::Effect;
pub use model::{Actor, Director, Movie, Movies};
pub use msg::Msg;
pub use path_store::PathStore;
pub use route::Route;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, Breadcrumb, DetailView, MovieRowView};
