//! Artifact verification utilities for testing.
//!
//! This module provides helper functions for checking exported figure files.

use std::path::Path;

/// PNG file signature
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Assert that the file at `path` is a plausible PNG artifact
pub fn assert_png_artifact(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read PNG artifact {}: {}", path.display(), e));

    assert!(
        bytes.starts_with(&PNG_MAGIC),
        "File {} does not start with the PNG signature",
        path.display()
    );
    assert!(
        bytes.len() > PNG_MAGIC.len(),
        "PNG artifact {} has no data beyond the signature",
        path.display()
    );
}

/// Assert that the file at `path` is a plausible HTML chart artifact
pub fn assert_html_artifact(path: &Path) {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read HTML artifact {}: {}", path.display(), e));

    let lowered = content.to_lowercase();
    assert!(
        lowered.contains("<html"),
        "File {} is not an HTML document",
        path.display()
    );
    assert!(
        lowered.contains("echarts"),
        "File {} does not reference the chart runtime",
        path.display()
    );
}
