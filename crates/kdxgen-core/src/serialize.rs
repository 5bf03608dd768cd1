use crate::collections::CollectionStore;

/// Locale tag the device appends to every collection key.
const LOCALE_SUFFIX: &str = "@en-US";

/// Render the store in the device's collections.json format:
///
/// `{"<Name>@en-US":{"items":["<key>",...],"lastAccess":<secs>},...}`
///
/// Collection keys come out in lexicographic order (the store's map order);
/// item keys keep discovery order. Collections with no items are skipped.
/// Forward slashes in names escape to `\/`; no other escaping is applied.
pub fn to_json(store: &CollectionStore) -> String {
    let mut out = String::from("{");
    let mut first = true;
    for collection in store.iter() {
        if collection.items.is_empty() {
            continue;
        }
        if !first {
            out.push(',');
        }
        first = false;
        out.push('"');
        out.push_str(&collection.name.replace('/', "\\/"));
        out.push_str(LOCALE_SUFFIX);
        out.push_str("\":{\"items\":[");
        for (i, item) in collection.items.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('"');
            out.push_str(&item.key);
            out.push('"');
        }
        out.push_str("],\"lastAccess\":");
        out.push_str(&collection.last_access.to_string());
        out.push('}');
    }
    out.push('}');
    out
}
