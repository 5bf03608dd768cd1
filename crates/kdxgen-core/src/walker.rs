use std::fs;
use std::path::Path;

use crate::asin;
use crate::checksum::Checksum;
use crate::classify::{self, Category};
use crate::collections::{normalize_name, CollectionStore, Item};
use crate::error::Error;
use crate::report::Diagnostics;

/// Top-level directories whose joint presence marks a Kindle device root.
const DEVICE_SIGNATURE: [&str; 4] = ["audible", "documents", "music", "system"];

/// The one signature directory that actually gets scanned.
const DOCUMENTS_DIR: &str = "documents";

/// Single-pass, depth-first walk of the device's documents tree.
///
/// Sibling order is filesystem enumeration order; determinism of the final
/// output comes from the store's sorted map, not from traversal order.
/// I/O failures during the walk propagate and abort the run.
pub struct TreeWalker<'a> {
    checksum: Checksum,
    max_name_len: usize,
    diag: &'a dyn Diagnostics,
}

impl<'a> TreeWalker<'a> {
    pub fn new(checksum: Checksum, max_name_len: usize, diag: &'a dyn Diagnostics) -> Self {
        Self {
            checksum,
            max_name_len,
            diag,
        }
    }

    /// Walk the device rooted at `root` and build the collection store.
    ///
    /// `root` must be a directory exhibiting the device signature; anything
    /// else is fatal. Files directly under `documents/` are never collected,
    /// which keeps the device's top-level contents out of every collection.
    pub fn walk(&self, root: &Path) -> Result<CollectionStore, Error> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        let root = fs::canonicalize(root)?;
        if !has_device_signature(&root)? {
            return Err(Error::NotADeviceRoot(root));
        }

        let mut store = CollectionStore::new();
        for entry in fs::read_dir(root.join(DOCUMENTS_DIR))? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name().to_string_lossy().into_owned();
                self.visit_dir(&path, &format!("{}/", name), &mut store)?;
            }
        }
        Ok(store)
    }

    fn visit_dir(&self, dir: &Path, rel: &str, store: &mut CollectionStore) -> Result<(), Error> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if path.is_dir() {
                self.visit_dir(&path, &format!("{}{}/", rel, name), store)?;
            } else {
                self.visit_file(&path, &name, rel, store);
            }
        }
        Ok(())
    }

    /// Classify one file and, when a key derives, append it to the collection
    /// named by the current relative path. Derivation failures skip the file
    /// and the walk continues.
    fn visit_file(&self, path: &Path, name: &str, rel: &str, store: &mut CollectionStore) {
        let category = classify::classify(name);
        let key = match category {
            Category::ContentHashDocument => self.checksum.path_key(&format!("{}{}", rel, name)),
            Category::AsinDocument => asin::asin_key(name, self.diag),
            Category::Unknown => None,
        };
        let Some(key) = key else {
            return;
        };
        let collection_name = normalize_name(rel, self.max_name_len);
        store.entry(&collection_name).items.push(Item {
            name: name.to_string(),
            path: path.to_string_lossy().into_owned(),
            category,
            key,
        });
    }
}

/// Check for the four expected device directories among the root's actual
/// children. Names compare case-sensitively even on case-folding filesystems.
fn has_device_signature(root: &Path) -> Result<bool, Error> {
    let mut found = [false; DEVICE_SIGNATURE.len()];
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Some(pos) = DEVICE_SIGNATURE.iter().position(|d| name == *d) {
            found[pos] = true;
        }
    }
    Ok(found.iter().all(|f| *f))
}
