//! Product Catalog
//!
//! The output record of an import run and the catalog file writer. The
//! catalog is a pretty-printed JSON array; every run regenerates it in full
//! and overwrites the previous file.

use crate::classify::{Brand, Color};
use crate::error::ImportError;
use crate::taxonomy::Category;
use crate::types::ProductId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One sellable product variant extracted from a model leaf folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub brand: Brand,
    /// Site-relative URL of the copied representative image
    pub image: String,
    /// Single inferred color; the hand-authored catalog supports several
    /// per product, the importer never emits more than one.
    pub colors: Vec<Color>,
    /// No inventory signal exists in the source tree.
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// Build the destination file name for a product image:
/// `<id>_<original name with whitespace replaced by underscores>`.
pub fn image_file_name(id: ProductId, original_name: &str) -> String {
    let sanitized: String = original_name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}_{}", id, sanitized)
}

/// Build the site-relative image URL recorded in the catalog.
pub fn image_url(url_prefix: &str, file_name: &str) -> String {
    format!("{}/{}", url_prefix.trim_end_matches('/'), file_name)
}

/// Serialize the product list and overwrite the catalog file.
///
/// Serialization or write failure is fatal; there is no partial-result
/// guarantee and no atomic rename.
pub fn write_catalog(path: &Path, products: &[Product]) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(products)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ImportError::CatalogWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }
    std::fs::write(path, json).map_err(|e| ImportError::CatalogWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PRODUCT_ID_BASE;
    use tempfile::TempDir;

    fn sample_product() -> Product {
        Product {
            id: PRODUCT_ID_BASE,
            name: "Ручка Alfa Black".to_string(),
            category: Category::DoorHandles,
            subcategory: "rosette_handles".to_string(),
            brand: Brand::Apollo,
            image: "/images/products/auto/2000_img.jpg".to_string(),
            colors: vec![Color::Black],
            in_stock: true,
        }
    }

    #[test]
    fn test_product_json_shape() {
        let value = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(value["id"], 2000);
        assert_eq!(value["category"], "door_handles");
        assert_eq!(value["subcategory"], "rosette_handles");
        assert_eq!(value["brand"], "Apollo");
        assert_eq!(value["colors"], serde_json::json!(["Черный"]));
        assert_eq!(value["inStock"], true);
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_image_file_name_replaces_whitespace() {
        assert_eq!(
            image_file_name(2001, "model a photo.jpg"),
            "2001_model_a_photo.jpg"
        );
        assert_eq!(image_file_name(2002, "img.png"), "2002_img.png");
    }

    #[test]
    fn test_image_url_joins_prefix() {
        assert_eq!(
            image_url("/images/products/auto", "2000_img.jpg"),
            "/images/products/auto/2000_img.jpg"
        );
        assert_eq!(
            image_url("/images/products/auto/", "2000_img.jpg"),
            "/images/products/auto/2000_img.jpg"
        );
    }

    #[test]
    fn test_write_catalog_overwrites_previous_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("products_db.json");

        write_catalog(&path, &[sample_product()]).unwrap();
        let first: Vec<Product> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(first.len(), 1);

        write_catalog(&path, &[]).unwrap();
        let second: Vec<Product> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_write_catalog_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scripts").join("products_db.json");
        write_catalog(&path, &[sample_product()]).unwrap();
        assert!(path.exists());
    }
}
