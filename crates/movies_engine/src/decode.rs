use movies_core::{Movie, Movies};
use serde::Deserialize;

use crate::LoadError;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped(Movies),
    Bare(Vec<Movie>),
}

/// Decode a catalog document: either `{ "movies": [...] }` or a bare array of movies.
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<Movie>, LoadError> {
    let document: CatalogDocument =
        serde_json::from_slice(bytes).map_err(|err| LoadError::Decode(err.to_string()))?;
    Ok(match document {
        CatalogDocument::Wrapped(movies) => movies.movies,
        CatalogDocument::Bare(movies) => movies,
    })
}
