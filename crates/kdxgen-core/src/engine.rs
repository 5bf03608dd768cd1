use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::checksum::Checksum;
use crate::config::{AppConfig, MAX_DISPLAY_LEN};
use crate::error::Error;
use crate::report::Diagnostics;
use crate::serialize;
use crate::walker::TreeWalker;

pub struct CollectionEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct RunResult {
    /// The rendered collections mapping, ready for the device.
    pub json: String,
    pub collections: usize,
    pub items: usize,
    pub walk_duration: Duration,
}

impl CollectionEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline:
    /// 1. Validate the device root and walk its documents tree
    /// 2. Serialize the collection store into the device format
    pub fn run(&self, root: &Path, diag: &dyn Diagnostics) -> Result<RunResult, Error> {
        if self.config.max_collection_name_len > MAX_DISPLAY_LEN {
            // Accepted, but long names may render poorly on the device.
            diag.warn(&format!(
                "Collection names up to {} characters may not display properly on the device.",
                self.config.max_collection_name_len
            ));
        }

        info!("Scanning documents under {}...", root.display());
        let walk_start = Instant::now();
        let checksum = Checksum::new(self.config.uppercase_hex);
        let walker = TreeWalker::new(checksum, self.config.max_collection_name_len, diag);
        let store = walker.walk(root)?;
        let walk_duration = walk_start.elapsed();
        debug!(
            "Walk completed in {:.2}s — {} collections, {} items",
            walk_duration.as_secs_f64(),
            store.len(),
            store.item_count(),
        );

        let json = serialize::to_json(&store);
        Ok(RunResult {
            json,
            collections: store.len(),
            items: store.item_count(),
            walk_duration,
        })
    }
}
