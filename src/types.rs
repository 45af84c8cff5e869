//! Core types for the catalog importer.

/// ProductId: Monotonically assigned catalog identifier
pub type ProductId = u32;

/// First id assigned in every run. Ids are unique and strictly increasing
/// within a run; they are not stable across runs if the source tree changes.
pub const PRODUCT_ID_BASE: ProductId = 2000;

/// File extensions (lowercase, no dot) recognized as product images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check whether a file name has a recognized image extension.
pub fn is_image_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
