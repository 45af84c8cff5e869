//! Source Tree Inspection
//!
//! Read-only report over the vendor image tree: which top-level folders are
//! recognized taxonomy roots, and how many model leaves and images each one
//! holds. Useful before an import to see what a run would pick up and which
//! branches would be skipped.

use crate::error::ImportError;
use crate::taxonomy;
use crate::types::is_image_file;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Per-taxonomy-root section of the report
#[derive(Debug, Clone, Serialize)]
pub struct RootReport {
    pub folder: String,
    pub recognized: bool,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub model_leaves: usize,
    pub images: usize,
}

/// Full source-tree report
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub source_dir: String,
    pub roots: Vec<RootReport>,
    pub total_model_leaves: usize,
    pub unmapped_roots: usize,
}

/// Build the report for every top-level folder under the source root.
pub fn inspect_source(source_dir: &Path) -> Result<InspectReport, ImportError> {
    let entries = std::fs::read_dir(source_dir).map_err(|e| ImportError::SourceRoot {
        path: source_dir.to_path_buf(),
        source: e,
    })?;

    let mut top_level: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            top_level.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    top_level.sort();

    let mut roots = Vec::new();
    let mut total_model_leaves = 0;
    let mut unmapped_roots = 0;
    for folder in top_level {
        let entry = taxonomy::lookup(&folder);
        if entry.is_none() {
            unmapped_roots += 1;
        }
        let (model_leaves, images) = scan_root(&source_dir.join(&folder))?;
        total_model_leaves += model_leaves;
        roots.push(RootReport {
            folder,
            recognized: entry.is_some(),
            category: entry.map(|e| e.category.as_str().to_string()),
            subcategory: entry.map(|e| e.subcategory.to_string()),
            model_leaves,
            images,
        });
    }

    Ok(InspectReport {
        source_dir: source_dir.display().to_string(),
        roots,
        total_model_leaves,
        unmapped_roots,
    })
}

/// Count model leaves and their images under one taxonomy root. A model
/// leaf is the first directory along a path that directly contains an
/// image; the walk does not descend past it, matching the importer.
fn scan_root(root: &Path) -> Result<(usize, usize), ImportError> {
    let mut model_leaves = 0;
    let mut images = 0;

    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| ImportError::Io(e.into()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let image_count = count_direct_images(entry.path())?;
        if image_count > 0 {
            model_leaves += 1;
            images += image_count;
            if entry.depth() > 0 {
                walker.skip_current_dir();
            } else {
                // The taxonomy root itself is the leaf; nothing below counts.
                break;
            }
        }
    }

    Ok((model_leaves, images))
}

fn count_direct_images(dir: &Path) -> Result<usize, ImportError> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file()
            && is_image_file(&entry.file_name().to_string_lossy())
        {
            count += 1;
        }
    }
    Ok(count)
}
