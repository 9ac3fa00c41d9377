use std::collections::HashSet;
use std::sync::Once;

use movies_core::{update, Actor, AppState, Director, Movie, Msg};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn actor(first: &str, last: &str) -> Actor {
    Actor {
        first_name: first.to_string(),
        last_name: last.to_string(),
        birthday: "1960-01-01".to_string(),
    }
}

fn director(first: &str, last: &str, movies: &[&str]) -> Director {
    Director {
        first_name: first.to_string(),
        last_name: last.to_string(),
        movies: movies.iter().map(|t| t.to_string()).collect(),
    }
}

fn movie(title: &str, director: &Director, actors: &[&Actor]) -> Movie {
    Movie {
        title: title.to_string(),
        description: format!("About {title}"),
        actors: actors.iter().map(|a| (*a).clone()).collect(),
        director: director.clone(),
        release_date: "1999-01-01".to_string(),
    }
}

struct Fixture {
    mann: Director,
    scott: Director,
    pacino: Actor,
    de_niro: Actor,
    crowe: Actor,
    catalog: Vec<Movie>,
}

fn fixture() -> Fixture {
    let mann = director("Michael", "Mann", &["Heat", "The Insider"]);
    let scott = director("Ridley", "Scott", &["Gladiator"]);
    let pacino = actor("Al", "Pacino");
    let de_niro = actor("Robert", "De Niro");
    let crowe = actor("Russell", "Crowe");
    // Deliberately unsorted.
    let catalog = vec![
        movie("The Insider", &mann, &[&pacino, &crowe]),
        movie("Heat", &mann, &[&pacino, &de_niro]),
        movie("Gladiator", &scott, &[&crowe]),
    ];
    Fixture {
        mann,
        scott,
        pacino,
        de_niro,
        crowe,
        catalog,
    }
}

fn loaded(catalog: Vec<Movie>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::AppStarted);
    let (state, _) = update(state, Msg::CatalogLoaded(catalog));
    state
}

fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}

#[test]
fn loaded_catalog_is_sorted_by_title() {
    init_logging();
    let state = loaded(fixture().catalog);

    assert_eq!(
        titles(state.data().movies()),
        vec!["Gladiator", "Heat", "The Insider"]
    );
    let sorted = state
        .data()
        .movies()
        .windows(2)
        .all(|pair| pair[0].title <= pair[1].title);
    assert!(sorted);
}

#[test]
fn movies_with_actor_preserves_catalog_order() {
    init_logging();
    let f = fixture();
    let state = loaded(f.catalog.clone());

    assert_eq!(
        titles(&state.data().movies_with_actor(&f.pacino)),
        vec!["Heat", "The Insider"]
    );
    assert_eq!(
        titles(&state.data().movies_with_actor(&f.de_niro)),
        vec!["Heat"]
    );
    assert!(state
        .data()
        .movies_with_actor(&actor("Nobody", "Known"))
        .is_empty());
}

#[test]
fn actor_match_is_by_full_value() {
    init_logging();
    let f = fixture();
    let state = loaded(f.catalog);
    let other_birthday = Actor {
        birthday: "2001-01-01".to_string(),
        ..f.pacino
    };

    assert!(state.data().movies_with_actor(&other_birthday).is_empty());
}

#[test]
fn movies_by_director_returns_subsequence() {
    init_logging();
    let f = fixture();
    let state = loaded(f.catalog);

    assert_eq!(
        titles(&state.data().movies_by_director(&f.mann)),
        vec!["Heat", "The Insider"]
    );
    assert_eq!(
        titles(&state.data().movies_by_director(&f.scott)),
        vec!["Gladiator"]
    );
    let stranger = director("Sofia", "Coppola", &[]);
    assert!(state.data().movies_by_director(&stranger).is_empty());
}

#[test]
fn actors_for_director_are_deduplicated() {
    init_logging();
    let f = fixture();
    let state = loaded(f.catalog);

    let actors = state.data().actors_for_director(&f.mann);
    assert_eq!(actors, vec![f.pacino.clone(), f.de_niro.clone(), f.crowe.clone()]);
    let unique: HashSet<_> = actors.iter().collect();
    assert_eq!(unique.len(), actors.len());
}

#[test]
fn failed_load_empties_previous_catalog() {
    init_logging();
    let state = loaded(fixture().catalog);
    assert_eq!(state.data().movies().len(), 3);

    let (state, _) = update(state, Msg::ReloadRequested);
    let (state, effects) = update(
        state,
        Msg::CatalogLoadFailed {
            reason: "decode error".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.data().movies().is_empty());
    assert!(state.view().movies.is_empty());
}
