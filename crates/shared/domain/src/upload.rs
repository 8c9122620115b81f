//! Uploaded image summary.

use serde::{Deserialize, Serialize};

use crate::constants::BYTES_PER_KB;

/// What the API reports back about an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub filename: String,
    pub format: String,
    pub size_kb: f64,
}

impl ImageUpload {
    /// Summarize an upload from its byte length.
    pub fn new(filename: impl Into<String>, format: impl Into<String>, byte_len: usize) -> Self {
        Self {
            filename: filename.into(),
            format: format.into(),
            size_kb: size_in_kb(byte_len),
        }
    }
}

/// Byte length in kilobytes, rounded to two decimals.
///
/// Ties round to even, so 128 bytes (0.125 KB) reports 0.12.
pub fn size_in_kb(byte_len: usize) -> f64 {
    let kb = byte_len as f64 / BYTES_PER_KB;
    (kb * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_kb() {
        assert_eq!(size_in_kb(0), 0.0);
        assert_eq!(size_in_kb(1024), 1.0);
        assert_eq!(size_in_kb(1536), 1.5);
        // 1000 / 1024 = 0.9765...
        assert_eq!(size_in_kb(1000), 0.98);
    }

    #[test]
    fn test_size_in_kb_ties_round_to_even() {
        // 0.125 and 0.375 sit exactly between two hundredths
        assert_eq!(size_in_kb(128), 0.12);
        assert_eq!(size_in_kb(384), 0.38);
    }

    #[test]
    fn test_new_upload() {
        let upload = ImageUpload::new("cat.png", "image/png", 2048);
        assert_eq!(upload.filename, "cat.png");
        assert_eq!(upload.format, "image/png");
        assert_eq!(upload.size_kb, 2.0);
    }
}
