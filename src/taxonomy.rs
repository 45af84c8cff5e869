//! Category Taxonomy
//!
//! Static table translating taxonomy root folder names (as they appear on
//! disk in the vendor image tree) into catalog (category, subcategory)
//! pairs. The table is a closed enumeration; folder names must match a key
//! exactly (case-sensitive). Unknown roots are skipped by policy.

use serde::{Deserialize, Serialize};

/// Top-level catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DoorHandles,
    DoorHinges,
    LocksAndSecurity,
    DoorFittings,
    SlidingSystems,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DoorHandles => "door_handles",
            Category::DoorHinges => "door_hinges",
            Category::LocksAndSecurity => "locks_and_security",
            Category::DoorFittings => "door_fittings",
            Category::SlidingSystems => "sliding_systems",
        }
    }
}

/// A (category, subcategory) pair mapped from a taxonomy root folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub category: Category,
    pub subcategory: &'static str,
}

/// Taxonomy root folder name -> catalog placement. Keys are the literal
/// folder names used by the vendor tree; sliding systems carry no
/// subcategory.
const CATEGORY_MAP: &[(&str, TaxonomyEntry)] = &[
    (
        "РУЧКИ",
        TaxonomyEntry {
            category: Category::DoorHandles,
            subcategory: "rosette_handles",
        },
    ),
    (
        "Ручки скобы",
        TaxonomyEntry {
            category: Category::DoorHandles,
            subcategory: "pull_handles",
        },
    ),
    (
        "СКОБЫ ДЛЯ ДВЕРНЫХ РУЧЕК",
        TaxonomyEntry {
            category: Category::DoorHandles,
            subcategory: "pull_handles",
        },
    ),
    (
        "СКРЫТАЯ ПЕТЛЯ",
        TaxonomyEntry {
            category: Category::DoorHinges,
            subcategory: "hidden_hinges",
        },
    ),
    (
        "ВРЕЗНЫЕ ПЕТЛИ",
        TaxonomyEntry {
            category: Category::DoorHinges,
            subcategory: "mortise_hinges",
        },
    ),
    (
        "ПРУЖИННАЯ ПЕТЛЯ",
        TaxonomyEntry {
            category: Category::DoorHinges,
            subcategory: "spring_hinges",
        },
    ),
    (
        "ДВЕРНЫЕ НАВЕСЫ",
        TaxonomyEntry {
            category: Category::DoorHinges,
            subcategory: "overlay_hinges",
        },
    ),
    (
        "ЗАМКИ",
        TaxonomyEntry {
            category: Category::LocksAndSecurity,
            subcategory: "mortise_locks",
        },
    ),
    (
        "ДВЕРНЫЕ МЕХАНИЗМЫ",
        TaxonomyEntry {
            category: Category::LocksAndSecurity,
            subcategory: "mortise_locks",
        },
    ),
    (
        "ЭЛЕКТРОННЫЕ ДВЕРНЫЕ ЗАМКИ",
        TaxonomyEntry {
            category: Category::LocksAndSecurity,
            subcategory: "smart_locks",
        },
    ),
    (
        "СЕРДЕЦЕВИНЫ",
        TaxonomyEntry {
            category: Category::LocksAndSecurity,
            subcategory: "cylinders",
        },
    ),
    (
        "ЗАЩЕЛКИ",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "latches_and_bolts",
        },
    ),
    (
        "ЗАДВИЖКИ",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "latches_and_bolts",
        },
    ),
    (
        "ФИКСАТОРЫ",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "wc_and_escutcheons",
        },
    ),
    (
        "НАКЛАДКИ",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "wc_and_escutcheons",
        },
    ),
    (
        "WC-комплект с ключом",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "wc_and_escutcheons",
        },
    ),
    (
        "УПОРЫ ДВЕРНЫЕ",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "door_stops",
        },
    ),
    (
        "ДОВОДЧИКИ ДВЕРНЫЕ",
        TaxonomyEntry {
            category: Category::DoorFittings,
            subcategory: "door_closers",
        },
    ),
    (
        "РАЗДВИЖНЫЕ СИСТЕМЫ",
        TaxonomyEntry {
            category: Category::SlidingSystems,
            subcategory: "",
        },
    ),
];

/// Look up the taxonomy placement for a root folder name.
///
/// The lookup is performed only against the first path segment of the
/// relative folder chain; deeper segments never participate.
pub fn lookup(root_folder: &str) -> Option<&'static TaxonomyEntry> {
    CATEGORY_MAP
        .iter()
        .find(|(key, _)| *key == root_folder)
        .map(|(_, entry)| entry)
}

/// All taxonomy root folder names known to the importer.
pub fn known_roots() -> impl Iterator<Item = &'static str> {
    CATEGORY_MAP.iter().map(|(key, _)| *key)
}
