use crate::report::Diagnostics;

/// Book type codes that belong in collections. The device gathers NWPR
/// periodicals into its own 'periodicals' collection, so those stay out.
const SUPPORTED_TYPE_CODES: [&str; 2] = ["EBOK", "EBSP"];

/// Derive the `#<ASIN>^<TYPE>` item key from an AZW filename of the form
/// `...-asin_<ASIN>-type_<TYPE>-v_<VERSION>...`.
///
/// Each marker is matched at its first occurrence; anything past
/// `-v_<version>` is ignored. A filename missing a marker is skipped with an
/// info diagnostic; an unsupported type code is skipped silently.
pub fn asin_key(file_name: &str, diag: &dyn Diagnostics) -> Option<String> {
    let Some((_, rest)) = file_name.split_once("-asin_") else {
        diag.info(&format!("No ASIN found in '{}'. Skipping file...", file_name));
        return None;
    };
    let Some((asin, rest)) = rest.split_once("-type_") else {
        diag.info(&format!(
            "No book type found in '{}'. Skipping file...",
            file_name
        ));
        return None;
    };
    let Some((type_code, _)) = rest.split_once("-v_") else {
        diag.info(&format!(
            "No version found in '{}'. Skipping file...",
            file_name
        ));
        return None;
    };
    if !SUPPORTED_TYPE_CODES.contains(&type_code) {
        return None;
    }
    Some(format!("#{}^{}", asin, type_code))
}
