use std::io;

use catalog_logging::{catalog_debug, catalog_info, catalog_warn};
use movies_core::{Effect, Msg};
use movies_engine::{CatalogLoader, EngineEvent, EngineHandle};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(loader: CatalogLoader) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(loader)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog => {
                    catalog_info!("LoadCatalog requested");
                    self.engine.load();
                }
                Effect::CancelLoad => {
                    catalog_info!("CancelLoad requested");
                    self.engine.cancel();
                }
            }
        }
    }

    /// Drains pending engine events into messages for the update loop.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .filter_map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::LoadStarted => {
            catalog_debug!("Engine started catalog load");
            None
        }
        EngineEvent::LoadCompleted { result: Ok(movies) } => Some(Msg::CatalogLoaded(movies)),
        EngineEvent::LoadCompleted { result: Err(err) } => {
            catalog_warn!("Catalog load failed: {}", err);
            Some(Msg::CatalogLoadFailed {
                reason: err.to_string(),
            })
        }
    }
}
