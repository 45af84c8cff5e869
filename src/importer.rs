//! Catalog Importer
//!
//! Recursive-descent traversal of the vendor image tree. Walks depth-first
//! in lexicographic order, treats the first folder containing an image below
//! the source root as a model leaf, classifies it, copies one representative
//! image, and accumulates `Product` records. All traversal state (the id
//! counter and the product accumulator) is threaded explicitly; nothing is
//! process-global.

use crate::catalog::{self, Product};
use crate::classify;
use crate::config::ImporterConfig;
use crate::error::ImportError;
use crate::types::{is_image_file, ProductId, PRODUCT_ID_BASE};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, error, info};

/// Counters reported after a run
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub products: usize,
    pub images_copied: usize,
    pub copy_failures: usize,
    pub catalog_file: String,
    pub dry_run: bool,
    pub generated_at: String,
}

/// Result of an import run: the emitted products plus run counters
#[derive(Debug)]
pub struct ImportOutcome {
    pub products: Vec<Product>,
    pub summary: ImportSummary,
}

/// Traversal state threaded through the recursive descent
struct ImportState {
    next_id: ProductId,
    products: Vec<Product>,
    images_copied: usize,
    copy_failures: usize,
    dry_run: bool,
}

/// One directory listing, partitioned and lexicographically sorted
struct DirListing {
    images: Vec<String>,
    subdirs: Vec<String>,
}

pub struct Importer {
    config: ImporterConfig,
}

impl Importer {
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }

    /// Run the import: traverse the source tree, copy representative images,
    /// and overwrite the catalog file. With `dry_run` set, classification
    /// runs in full but nothing touches the filesystem.
    ///
    /// Unreadable source root, unwritable destination, and catalog write
    /// failure are fatal. A single image-copy failure is logged, drops that
    /// one product, and leaves its id unconsumed.
    pub fn run(&self, dry_run: bool) -> Result<ImportOutcome, ImportError> {
        info!(source = %self.config.source_dir.display(), dry_run, "starting extraction");

        if !dry_run {
            std::fs::create_dir_all(&self.config.dest_dir).map_err(|e| {
                ImportError::Destination {
                    path: self.config.dest_dir.clone(),
                    source: e,
                }
            })?;
        }

        let mut state = ImportState {
            next_id: PRODUCT_ID_BASE,
            products: Vec::new(),
            images_copied: 0,
            copy_failures: 0,
            dry_run,
        };
        let mut chain: Vec<String> = Vec::new();
        self.process_directory(&self.config.source_dir, &mut chain, &mut state)?;

        if !dry_run {
            catalog::write_catalog(&self.config.catalog_file, &state.products)?;
            info!(catalog = %self.config.catalog_file.display(), "saved catalog");
        }
        info!(count = state.products.len(), "extracted products");

        let summary = ImportSummary {
            products: state.products.len(),
            images_copied: state.images_copied,
            copy_failures: state.copy_failures,
            catalog_file: self.config.catalog_file.display().to_string(),
            dry_run,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };
        Ok(ImportOutcome {
            products: state.products,
            summary,
        })
    }

    /// Depth-first, pre-order descent. `chain` holds the folder names from
    /// the taxonomy root down to `dir` (empty at the source root).
    fn process_directory(
        &self,
        dir: &Path,
        chain: &mut Vec<String>,
        state: &mut ImportState,
    ) -> Result<(), ImportError> {
        let listing = list_directory(dir, chain.is_empty())?;

        // Model-leaf policy: an image below the source root ends the descent
        // here, even when sub-folders exist.
        if !listing.images.is_empty() && !chain.is_empty() {
            self.emit_model(dir, chain, &listing.images[0], state);
            return Ok(());
        }

        for name in &listing.subdirs {
            chain.push(name.clone());
            self.process_directory(&dir.join(name), chain, state)?;
            chain.pop();
        }
        Ok(())
    }

    /// Classify one model leaf and copy its representative image. Branches
    /// with an unmapped taxonomy root are skipped here, silently by policy.
    fn emit_model(&self, dir: &Path, chain: &[String], image_name: &str, state: &mut ImportState) {
        let classification = match classify::classify_model(chain) {
            Some(c) => c,
            None => {
                debug!(
                    root = chain.first().map(String::as_str).unwrap_or(""),
                    path = %dir.display(),
                    "skipping branch: taxonomy root not in category map"
                );
                return;
            }
        };

        let file_name = catalog::image_file_name(state.next_id, image_name);
        if !state.dry_run {
            let src = dir.join(image_name);
            let dest = self.config.dest_dir.join(&file_name);
            if let Err(e) = std::fs::copy(&src, &dest) {
                error!(
                    source = %src.display(),
                    dest = %dest.display(),
                    "image copy failed: {}", e
                );
                state.copy_failures += 1;
                return;
            }
        }

        state.products.push(Product {
            id: state.next_id,
            name: classification.name,
            category: classification.taxonomy.category,
            subcategory: classification.taxonomy.subcategory.to_string(),
            brand: classification.brand,
            image: catalog::image_url(&self.config.image_url_prefix, &file_name),
            colors: classification.colors,
            in_stock: true,
        });
        state.next_id += 1;
        state.images_copied += 1;
    }
}

/// List a directory, partition entries into images and sub-directories, and
/// sort each group lexicographically by name. The explicit sort makes the
/// representative-image choice and id assignment deterministic where the
/// platform listing order is not.
fn list_directory(dir: &Path, at_root: bool) -> Result<DirListing, ImportError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        if at_root {
            ImportError::SourceRoot {
                path: dir.to_path_buf(),
                source: e,
            }
        } else {
            ImportError::Io(e)
        }
    })?;

    let mut images = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            subdirs.push(name);
        } else if is_image_file(&name) {
            images.push(name);
        }
    }
    images.sort();
    subdirs.sort();
    Ok(DirListing { images, subdirs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Brand, Color};
    use crate::taxonomy::Category;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> ImporterConfig {
        ImporterConfig {
            source_dir: root.join("products_image"),
            dest_dir: root.join("auto"),
            catalog_file: root.join("products_db.json"),
            image_url_prefix: "/images/products/auto".to_string(),
            ..ImporterConfig::default()
        }
    }

    fn add_model(root: &Path, chain: &[&str], images: &[&str]) {
        let mut dir = PathBuf::from(root).join("products_image");
        for segment in chain {
            dir = dir.join(segment);
        }
        fs::create_dir_all(&dir).unwrap();
        for image in images {
            fs::write(dir.join(image), b"jpegdata").unwrap();
        }
    }

    #[test]
    fn test_end_to_end_handle_model() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["РУЧКИ", "Apollo Black"], &["img.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        assert_eq!(outcome.products.len(), 1);
        let p = &outcome.products[0];
        assert_eq!(p.id, 2000);
        assert_eq!(p.category, Category::DoorHandles);
        assert_eq!(p.subcategory, "rosette_handles");
        assert_eq!(p.brand, Brand::Apollo);
        assert_eq!(p.colors, vec![Color::Black]);
        assert!(p.name.starts_with("Ручка "));
        assert_eq!(p.image, "/images/products/auto/2000_img.jpg");
        assert!(p.in_stock);

        assert!(temp.path().join("auto").join("2000_img.jpg").exists());
        let catalog: Vec<Product> = serde_json::from_str(
            &fs::read_to_string(temp.path().join("products_db.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_unmapped_root_emits_nothing() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["ГруппаХ", "ModelY"], &["photo1.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        assert!(outcome.products.is_empty());
        assert_eq!(outcome.summary.copy_failures, 0);
        let copies: Vec<_> = fs::read_dir(temp.path().join("auto"))
            .unwrap()
            .collect();
        assert!(copies.is_empty());
    }

    #[test]
    fn test_ids_increase_in_traversal_order() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["ЗАМКИ", "B Model"], &["b.jpg"]);
        add_model(temp.path(), &["ЗАМКИ", "A Model"], &["a.jpg"]);
        add_model(temp.path(), &["РУЧКИ", "C Model"], &["c.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        let ids: Vec<u32> = outcome.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2000, 2001, 2002]);
        // Lexicographic descent: ЗАМКИ sorts before РУЧКИ, A before B.
        assert_eq!(outcome.products[0].name, "A Model");
        assert_eq!(outcome.products[1].name, "B Model");
        assert_eq!(outcome.products[2].category, Category::DoorHandles);
    }

    #[test]
    fn test_model_leaf_stops_descent() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["ЗАЩЕЛКИ", "Alfa"], &["img.jpg"]);
        // Nested folder under the model leaf must be ignored.
        add_model(temp.path(), &["ЗАЩЕЛКИ", "Alfa", "варианты"], &["extra.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].name, "Alfa");
    }

    #[test]
    fn test_first_image_is_lexicographic() {
        let temp = TempDir::new().unwrap();
        add_model(
            temp.path(),
            &["ЗАДВИЖКИ", "Beta"],
            &["z_photo.jpg", "a_photo.jpg", "m_photo.png"],
        );

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(
            outcome.products[0].image,
            "/images/products/auto/2000_a_photo.jpg"
        );
        // Sibling images are not copied.
        assert_eq!(fs::read_dir(temp.path().join("auto")).unwrap().count(), 1);
    }

    #[test]
    fn test_images_at_source_root_are_ignored() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("products_image");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("stray.jpg"), b"jpegdata").unwrap();
        add_model(temp.path(), &["ЗАМКИ", "Alfa"], &["img.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].name, "Alfa");
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["РУЧКИ", "Apollo Gold"], &["img.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(true).unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert!(outcome.summary.dry_run);
        assert!(!temp.path().join("auto").exists());
        assert!(!temp.path().join("products_db.json").exists());
    }

    #[test]
    fn test_copy_failure_skips_product_and_keeps_id() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["ЗАМКИ", "AModel"], &["a.jpg"]);
        add_model(temp.path(), &["ЗАМКИ", "BModel"], &["b.jpg"]);

        // Block the first copy target with a directory of the same name.
        let dest = temp.path().join("auto");
        fs::create_dir_all(dest.join("2000_a.jpg")).unwrap();

        let importer = Importer::new(test_config(temp.path()));
        let outcome = importer.run(false).unwrap();

        assert_eq!(outcome.summary.copy_failures, 1);
        assert_eq!(outcome.products.len(), 1);
        // The failed product's id was not consumed.
        assert_eq!(outcome.products[0].id, 2000);
        assert_eq!(outcome.products[0].name, "BModel");
        assert!(dest.join("2000_b.jpg").exists());
    }

    #[test]
    fn test_rerun_accumulates_copies() {
        let temp = TempDir::new().unwrap();
        add_model(temp.path(), &["ЗАМКИ", "M Model"], &["m.jpg"]);

        let importer = Importer::new(test_config(temp.path()));
        importer.run(false).unwrap();
        let first: Vec<String> = fs::read_dir(temp.path().join("auto"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();

        // A model sorting earlier shifts id assignment on the second run;
        // stale copies from the first run are never cleaned up.
        add_model(temp.path(), &["ЗАМКИ", "A Model"], &["a.jpg"]);
        importer.run(false).unwrap();
        let second: Vec<String> = fs::read_dir(temp.path().join("auto"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();

        for name in &first {
            assert!(second.contains(name), "stale copy {} was removed", name);
        }
        assert!(second.len() > first.len());
    }

    #[test]
    fn test_missing_source_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let importer = Importer::new(test_config(temp.path()));
        let err = importer.run(false).unwrap_err();
        assert!(matches!(err, ImportError::SourceRoot { .. }));
    }
}
