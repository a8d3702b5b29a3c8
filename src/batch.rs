//! Batch driver over discovered collection units

use crate::config::Config;
use crate::error::Result;
use crate::input::PageSource;
use crate::processing::collection::{CollectionProcessor, CollectionSummary};
use crate::processing::embeddings::Embedder;
use log::{error, info};
use std::path::{Path, PathBuf};

/// Outcome of one collection's processing, returned to the caller so
/// reporting decisions stay with the driver's consumer.
pub struct CollectionRun {
    pub collection: String,
    pub outcome: Result<CollectionSummary>,
}

/// Discover collection directories under `root`, in lexicographic order.
pub async fn discover_collections(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut collections = Vec::new();
    let mut entries = tokio::fs::read_dir(root).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with(&config.batch.collection_prefix) {
                collections.push(path);
            }
        }
    }

    collections.sort();
    Ok(collections)
}

/// Process every collection under `root`, isolating failures: one
/// collection's error is recorded in its run and never aborts the rest.
pub async fn run_batch<P: PageSource, E: Embedder>(
    root: &Path,
    config: &Config,
    pages: &P,
    embedder: &E,
) -> Result<Vec<CollectionRun>> {
    let collections = discover_collections(root, config).await?;
    info!(
        "Discovered {} collection(s) under {}",
        collections.len(),
        root.display()
    );

    let processor = CollectionProcessor::new(pages, embedder, config);
    let mut runs = Vec::new();

    for dir in collections {
        let collection = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        let outcome = processor.process(&dir).await;
        if let Err(e) = &outcome {
            error!("Error processing {}: {}", collection, e);
        }

        runs.push(CollectionRun {
            collection,
            outcome,
        });
    }

    Ok(runs)
}
