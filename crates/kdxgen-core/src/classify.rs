/// Document categories recognized during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Unrecognized extension; never collected.
    Unknown,
    /// Keyed by a SHA-1 of the virtual device path (`*` prefix).
    ContentHashDocument,
    /// Keyed by the ASIN and book type parsed from the filename (`#` prefix).
    AsinDocument,
}

/// Classify a file by the extension after the last `.`, case-insensitively.
/// Names without a dot are Unknown.
pub fn classify(file_name: &str) -> Category {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return Category::Unknown,
    };
    match ext.as_str() {
        "pdf" => Category::ContentHashDocument,
        "azw" | "azw1" => Category::AsinDocument,
        _ => Category::Unknown,
    }
}
