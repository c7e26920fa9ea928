//! Catalog - In-memory knowledge taxonomy
//!
//! Owns the category tree and answers lookups and searches.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Catalog                                  │
//! │  categories: Vec<Category>  (owned tree) │
//! │  points:     id -> (cat, sub, point)     │
//! │  category_index: id -> cat               │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The index is built once at load time. Ids are validated there: a
//! duplicate id or a point whose `category`/`subcategory` does not name its
//! parent rejects the whole catalog.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::curriculum;
use super::knowledge::{Category, KnowledgePoint};

/// Catalog load errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("knowledge point {id} declares {field} '{declared}' but lives under '{actual}'")]
    ForeignKey {
        id: String,
        field: &'static str,
        declared: String,
        actual: String,
    },
}

/// Position of a knowledge point inside the tree
#[derive(Debug, Clone, Copy)]
struct Slot {
    category: usize,
    subcategory: usize,
    point: usize,
}

/// Static knowledge catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    points: HashMap<String, Slot>,
    category_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a category tree, validating ids
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut points = HashMap::new();
        let mut category_index = HashMap::new();

        for (ci, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), ci).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "category",
                    id: category.id.clone(),
                });
            }

            for (si, sub) in category.subcategories.iter().enumerate() {
                for (pi, point) in sub.knowledge_points.iter().enumerate() {
                    check_parent(point, "category", &point.category, &category.id)?;
                    check_parent(point, "subcategory", &point.subcategory, &sub.id)?;

                    let slot = Slot {
                        category: ci,
                        subcategory: si,
                        point: pi,
                    };
                    if points.insert(point.id.clone(), slot).is_some() {
                        return Err(CatalogError::DuplicateId {
                            kind: "knowledge point",
                            id: point.id.clone(),
                        });
                    }
                }
            }
        }

        debug!(
            categories = categories.len(),
            points = points.len(),
            "catalog loaded"
        );

        Ok(Self {
            categories,
            points,
            category_index,
        })
    }

    /// Load the built-in curriculum
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(curriculum::categories())
    }

    /// All categories in definition order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every knowledge point, flattened in definition order
    pub fn all_knowledge_points(&self) -> impl Iterator<Item = &KnowledgePoint> + '_ {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.knowledge_points.iter())
    }

    /// Look up a knowledge point by id
    pub fn knowledge_point(&self, id: &str) -> Option<&KnowledgePoint> {
        let slot = self.points.get(id)?;
        Some(
            &self.categories[slot.category].subcategories[slot.subcategory].knowledge_points
                [slot.point],
        )
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// Case-insensitive substring search over title, description and keywords
    ///
    /// Results keep catalog order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&KnowledgePoint> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.all_knowledge_points()
            .filter(|p| p.matches(&needle))
            .collect()
    }

    /// Number of knowledge points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn check_parent(
    point: &KnowledgePoint,
    field: &'static str,
    declared: &str,
    actual: &str,
) -> Result<(), CatalogError> {
    if declared == actual {
        return Ok(());
    }
    Err(CatalogError::ForeignKey {
        id: point.id.clone(),
        field,
        declared: declared.to_string(),
        actual: actual.to_string(),
    })
}
