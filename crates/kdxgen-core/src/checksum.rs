use sha1::{Digest, Sha1};

/// Virtual mount point the device prepends when hashing document paths.
pub const DEVICE_MOUNT: &str = "/mnt/us/documents/";

/// SHA-1 path checksum calculator for content-hash document keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checksum {
    uppercase_hex: bool,
}

impl Checksum {
    pub fn new(uppercase_hex: bool) -> Self {
        Self { uppercase_hex }
    }

    /// Hex-encoded SHA-1 of `text`, taken as single-byte characters.
    /// Returns None for an empty string.
    pub fn sha1_hex(&self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }
        let bytes: Vec<u8> = text.chars().map(single_byte).collect();
        let digest = Sha1::digest(&bytes);
        Some(if self.uppercase_hex {
            hex::encode_upper(digest)
        } else {
            hex::encode(digest)
        })
    }

    /// Item key for the document at `relative_path` below the documents root:
    /// the SHA-1 of its virtual absolute path, `*`-prefixed.
    pub fn path_key(&self, relative_path: &str) -> Option<String> {
        let mut virtual_path = String::with_capacity(DEVICE_MOUNT.len() + relative_path.len());
        virtual_path.push_str(DEVICE_MOUNT);
        virtual_path.push_str(relative_path);
        self.sha1_hex(&virtual_path).map(|hash| format!("*{}", hash))
    }
}

/// The device hashes path strings one byte per character. Characters above
/// U+00FF have no single-byte form and map to `?`.
fn single_byte(c: char) -> u8 {
    let code = c as u32;
    if code <= 0xFF {
        code as u8
    } else {
        b'?'
    }
}
