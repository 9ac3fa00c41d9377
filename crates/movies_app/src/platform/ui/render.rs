use movies_core::{AppViewModel, DetailView, LoadState};

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.loading {
        lines.push("Loading movies...".to_string());
        return lines;
    }

    let mut trail = vec!["Movies".to_string()];
    trail.extend(
        view.breadcrumbs
            .iter()
            .map(|crumb| format!("[{}] {}", crumb.index, crumb.label)),
    );
    lines.push(trail.join(" > "));
    lines.push(String::new());

    match &view.detail {
        None => render_list(view, &mut lines),
        Some(DetailView::Movie { movie }) => {
            lines.push(movie.title.clone());
            lines.push(format!("Released: {}", movie.release_date));
            lines.push(format!("Directed by {}", movie.director.full_name()));
            lines.push(movie.description.clone());
        }
        Some(DetailView::Director {
            director,
            movies,
            actors,
        }) => {
            lines.push(director.full_name());
            lines.push(format!(
                "{} movies in catalog, {} actors worked with",
                movies.len(),
                actors.len()
            ));
            if !director.movies.is_empty() {
                lines.push(format!("Filmography: {}", director.movies.join(", ")));
            }
        }
        Some(DetailView::Actor { actor, movies }) => {
            lines.push(actor.full_name());
            lines.push(format!("Born: {}", actor.birthday));
            lines.push(format!("{} movies in catalog", movies.len()));
        }
    }

    if !view.links.is_empty() {
        lines.push(String::new());
        lines.extend(
            view.links
                .iter()
                .enumerate()
                .map(|(index, label)| format!("  {index}) {label}")),
        );
    }

    lines
}

fn render_list(view: &AppViewModel, lines: &mut Vec<String>) {
    if view.movies.is_empty() {
        let text = match view.load_state {
            LoadState::NotLoaded => "Catalog not loaded yet.",
            LoadState::Loading | LoadState::Loaded | LoadState::Failed => "No movies.",
        };
        lines.push(text.to_string());
        return;
    }
    lines.push(format!("{} movies", view.movies.len()));
}
