//! Knowledge point - Core data structures
//!
//! A knowledge point is one addressable topic of the curriculum.
//!
//! # Hierarchy
//! ```text
//! Category (required1)
//! └── Subcategory (earth-universe)
//!     └── KnowledgePoint (earth-rotation)
//! ```
//!
//! Field names serialize in camelCase (`hasSimulation`, `knowledgePoints`)
//! to keep the JSON shape the web frontend consumes.

use serde::{Deserialize, Serialize};

/// One addressable topic in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePoint {
    /// Globally unique, stable identifier (also the routing key)
    pub id: String,

    /// Display title
    pub title: String,

    /// One-sentence description
    pub description: String,

    /// Id of the enclosing category
    pub category: String,

    /// Id of the enclosing subcategory
    pub subcategory: String,

    /// Whether an interactive diagram exists for this point
    pub has_simulation: bool,

    /// Search keywords, in display order
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KnowledgePoint {
    /// Create a knowledge point with an interactive diagram
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            has_simulation: true,
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn without_simulation(mut self) -> Self {
        self.has_simulation = false;
        self
    }

    /// Case-insensitive substring match against title, description or any keyword.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// A group of knowledge points inside a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    /// Owned points, in display order
    pub knowledge_points: Vec<KnowledgePoint>,
}

/// Top-level curriculum grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon name used by the frontend (e.g. `globe`)
    pub icon: String,
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Total number of knowledge points across all subcategories
    pub fn point_count(&self) -> usize {
        self.subcategories
            .iter()
            .map(|s| s.knowledge_points.len())
            .sum()
    }

    /// Find a subcategory by id
    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let point = KnowledgePoint::new("ocean-currents", "洋流", "desc", "required1", "hydrosphere")
            .with_keywords(["暖流", "寒流"]);

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["hasSimulation"], true);
        assert_eq!(json["keywords"][0], "暖流");
        assert!(json.get("has_simulation").is_none());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let point = KnowledgePoint::new("urban-structure", "城市内部空间结构", "城市功能分区", "required2", "urbanization")
            .with_keywords(["CBD", "住宅区"]);

        assert!(point.matches("cbd"));
        assert!(point.matches("功能"));
        assert!(!point.matches("洋流"));
    }

    #[test]
    fn test_point_count() {
        let category = Category {
            id: "c".into(),
            name: "C".into(),
            description: String::new(),
            icon: "globe".into(),
            subcategories: vec![
                Subcategory {
                    id: "a".into(),
                    name: "A".into(),
                    knowledge_points: vec![KnowledgePoint::new("p1", "P1", "", "c", "a")],
                },
                Subcategory {
                    id: "b".into(),
                    name: "B".into(),
                    knowledge_points: vec![
                        KnowledgePoint::new("p2", "P2", "", "c", "b"),
                        KnowledgePoint::new("p3", "P3", "", "c", "b").without_simulation(),
                    ],
                },
            ],
        };

        assert_eq!(category.point_count(), 3);
        assert!(category.subcategory("b").is_some());
        assert!(category.subcategory("z").is_none());
    }
}
