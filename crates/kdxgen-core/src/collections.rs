use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::classify::Category;

/// One recognized document inside a collection.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub path: String,
    pub category: Category,
    /// Derived identifier, already carrying its category prefix
    /// (`*` for content-hash documents, `#` for ASIN documents).
    pub key: String,
}

/// A named group of documents mirroring one directory subtree.
#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    /// Best-effort wall clock at creation time, seconds since epoch.
    /// The device manages the real access time itself.
    pub last_access: u64,
    pub items: Vec<Item>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        let last_access = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            name: name.into(),
            last_access,
            items: Vec::new(),
        }
    }
}

/// Normalized name → collection map. A BTreeMap keeps serialization order
/// lexicographic regardless of discovery order.
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: BTreeMap<String, Collection>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the collection for `name`. Distinct directory paths that
    /// normalize to the same name merge here.
    pub fn entry(&mut self, name: &str) -> &mut Collection {
        self.collections
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.collections.values().map(|c| c.items.len()).sum()
    }
}

/// Normalize an accumulated relative directory path (trailing `/` included,
/// no leading `/`) into a collection name of at most `max_len` characters.
///
/// Over-long paths shorten to exactly `max_len` characters ending in `...`;
/// otherwise at most one trailing separator is stripped. Lengths count
/// characters, so truncation never splits a multi-byte sequence.
pub fn normalize_name(path: &str, max_len: usize) -> String {
    if path.chars().count() > max_len {
        let mut name: String = path.chars().take(max_len.saturating_sub(3)).collect();
        name.push_str("...");
        name
    } else {
        path.strip_suffix('/').unwrap_or(path).to_string()
    }
}
