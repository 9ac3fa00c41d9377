use catalog_logging::{catalog_info, catalog_warn};

use crate::{AppState, Effect, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted | Msg::ReloadRequested => {
            if state.data().is_loading() {
                catalog_warn!("Catalog load already in flight; ignoring request");
                Vec::new()
            } else {
                state.data_mut().begin_load();
                state.mark_dirty();
                vec![Effect::LoadCatalog]
            }
        }
        Msg::CancelRequested => {
            if state.data().is_loading() {
                vec![Effect::CancelLoad]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogLoaded(movies) => {
            if state.data().is_loading() {
                catalog_info!("Catalog loaded with {} movies", movies.len());
                state.data_mut().populate(movies);
                state.mark_dirty();
            } else {
                catalog_warn!("Dropping catalog that arrived with no load in flight");
            }
            Vec::new()
        }
        Msg::CatalogLoadFailed { reason } => {
            if state.data().is_loading() {
                state.data_mut().reset(&reason);
                state.mark_dirty();
            } else {
                catalog_warn!("Ignoring load failure with no load in flight: {}", reason);
            }
            Vec::new()
        }
        Msg::RouteSelected(route) => {
            push(&mut state, route);
            Vec::new()
        }
        Msg::LinkSelected(index) => {
            match state.links().into_iter().nth(index) {
                Some(route) => push(&mut state, route),
                None => catalog_warn!("Ignoring selection of missing link {}", index),
            }
            Vec::new()
        }
        Msg::BreadcrumbSelected(index) => {
            if state.path_mut().reduce_to(index) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BackRequested => {
            if state.path_mut().pop().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RootRequested => {
            if !state.path().is_empty() {
                state.path_mut().clear();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn push(state: &mut AppState, route: Route) {
    state.path_mut().push(route);
    state.mark_dirty();
}
