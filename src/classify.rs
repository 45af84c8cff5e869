//! Model Classification
//!
//! Pure string-based inference over folder names: brand, color, and display
//! name for a model leaf. Each inference is an ordered rule table evaluated
//! in priority order; the first matching rule wins and every input resolves
//! to exactly one result (the last rule's fallback is a deliberate
//! catch-all, not a missing-data error).

use crate::taxonomy::{self, Category, TaxonomyEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product brand inferred from folder-name text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brand {
    Apollo,
    Status,
    Neon,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Apollo => "Apollo",
            Brand::Status => "Status",
            Brand::Neon => "Neon",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical product color (catalog uses the Russian display names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "Черный")]
    Black,
    #[serde(rename = "Белый")]
    White,
    #[serde(rename = "Золото")]
    Gold,
    #[serde(rename = "Бронза")]
    Bronze,
    #[serde(rename = "Никель")]
    Nickel,
    #[serde(rename = "Графит")]
    Graphite,
    #[serde(rename = "Хром")]
    Chrome,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "Черный",
            Color::White => "Белый",
            Color::Gold => "Золото",
            Color::Bronze => "Бронза",
            Color::Nickel => "Никель",
            Color::Graphite => "Графит",
            Color::Chrome => "Хром",
        }
    }
}

/// Brand rules in priority order; keywords are matched as substrings of the
/// uppercased classification text.
const BRAND_RULES: &[(&[&str], Brand)] = &[
    (&["APOLLO"], Brand::Apollo),
    (&["STATUS", "СТАТУС"], Brand::Status),
    (&["NEON"], Brand::Neon),
];

/// Fallback brand when no keyword matches.
pub const DEFAULT_BRAND: Brand = Brand::Apollo;

/// Color rules in priority order.
const COLOR_RULES: &[(&[&str], Color)] = &[
    (&["ЧЕРН", "BLACK"], Color::Black),
    (&["БЕЛ"], Color::White),
    (&["ЗОЛОТ", "GOLD"], Color::Gold),
    (&["БРОНЗ"], Color::Bronze),
    (&["НИКЕЛ", "SN"], Color::Nickel),
    (&["ГРАФИТ"], Color::Graphite),
];

/// Fallback color when no keyword matches.
pub const DEFAULT_COLOR: Color = Color::Chrome;

/// Brand keywords stripped from model names (uppercase forms).
const NAME_STRIP_KEYWORDS: &[&str] = &["APOLLO", "STATUS", "NEON", "СТАТУС"];

/// Build the text both brand and color inference run against: the leaf
/// folder's own name concatenated with the slash-joined parent chain,
/// uppercased.
pub fn classification_text(leaf_name: &str, chain: &[String]) -> String {
    format!("{} {}", leaf_name, chain.join("/")).to_uppercase()
}

/// Infer the brand from uppercased classification text.
pub fn infer_brand(text_upper: &str) -> Brand {
    for (keywords, brand) in BRAND_RULES {
        if keywords.iter().any(|kw| text_upper.contains(kw)) {
            return *brand;
        }
    }
    DEFAULT_BRAND
}

/// Infer the single product color from uppercased classification text.
pub fn infer_color(text_upper: &str) -> Color {
    for (keywords, color) in COLOR_RULES {
        if keywords.iter().any(|kw| text_upper.contains(kw)) {
            return *color;
        }
    }
    DEFAULT_COLOR
}

/// Remove every occurrence of a brand keyword from a model folder name,
/// case-insensitively, and trim the remainder.
pub fn strip_brand_keywords(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    // Per-char simple uppercase keeps indices aligned with the original.
    let upper: Vec<char> = chars
        .iter()
        .map(|c| c.to_uppercase().next().unwrap_or(*c))
        .collect();
    let mut keep = vec![true; chars.len()];

    for keyword in NAME_STRIP_KEYWORDS {
        let kw: Vec<char> = keyword.chars().collect();
        if kw.is_empty() || kw.len() > chars.len() {
            continue;
        }
        let mut i = 0;
        while i + kw.len() <= chars.len() {
            if upper[i..i + kw.len()] == kw[..] {
                for flag in &mut keep[i..i + kw.len()] {
                    *flag = false;
                }
                i += kw.len();
            } else {
                i += 1;
            }
        }
    }

    chars
        .iter()
        .zip(&keep)
        .filter(|(_, &kept)| kept)
        .map(|(c, _)| c)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Derive the catalog display name for a model leaf.
///
/// Brand keywords are stripped from the folder name; an empty remainder
/// falls back to `"<brand> Model"`. Door-handle products get the localized
/// "Ручка " prefix.
pub fn derive_name(leaf_name: &str, brand: Brand, category: Category) -> String {
    let base = strip_brand_keywords(leaf_name);
    let base = if base.is_empty() {
        format!("{} Model", brand.as_str())
    } else {
        base
    };
    if category == Category::DoorHandles {
        format!("Ручка {}", base)
    } else {
        base
    }
}

/// Full classification of one model leaf
#[derive(Debug, Clone)]
pub struct Classification {
    pub taxonomy: &'static TaxonomyEntry,
    pub brand: Brand,
    pub colors: Vec<Color>,
    pub name: String,
}

/// Classify a model leaf given its folder chain (taxonomy root first, leaf
/// last). Returns `None` when the chain is empty or its root segment is not
/// a known taxonomy root; that branch produces no catalog output.
pub fn classify_model(chain: &[String]) -> Option<Classification> {
    let root = chain.first()?;
    let taxonomy = taxonomy::lookup(root)?;
    let leaf = chain.last()?;
    let text = classification_text(leaf, chain);
    let brand = infer_brand(&text);
    let color = infer_color(&text);
    let name = derive_name(leaf, brand, taxonomy.category);
    Some(Classification {
        taxonomy,
        brand,
        colors: vec![color],
        name,
    })
}
