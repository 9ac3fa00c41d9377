//! Movies engine: catalog sources, decoding and the background load runner.
mod decode;
mod engine;
mod loader;
mod source;
mod types;

pub use decode::decode_catalog;
pub use engine::EngineHandle;
pub use loader::{CatalogLoader, LoadSettings, DEFAULT_LOAD_DELAY};
pub use source::{BundledSource, CatalogSource, FileSource, BUNDLED_CATALOG};
pub use tokio_util::sync::CancellationToken;
pub use types::{EngineEvent, LoadError};
