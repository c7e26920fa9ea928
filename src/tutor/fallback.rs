//! Fallback - Canned tutoring answers
//!
//! Used when the provider is unreachable or returns garbage. Lookup is a
//! chain of successively broader answers:
//!
//! 1. first keyword of the point's entry contained in the question
//! 2. the point's default answer
//! 3. [`GENERIC_ANSWER`]
//!
//! Matching is case-sensitive; the content is single-language.

use std::collections::HashMap;

use crate::core::catalog::Catalog;
use crate::core::knowledge::KnowledgePoint;

/// Answer for knowledge points without an entry
pub const GENERIC_ANSWER: &str = "这是一个很好的问题！建议你仔细观察演示动画，结合课本上的知识进行分析。如果还有疑问，可以尝试调整参数，观察结果的变化。";

/// Canned answers for one knowledge point
#[derive(Debug, Clone)]
pub struct FallbackEntry {
    default: String,
    keywords: Vec<(String, String)>,
}

impl FallbackEntry {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            keywords: Vec::new(),
        }
    }

    /// Add a keyword answer; earlier keywords win
    pub fn keyword(mut self, keyword: impl Into<String>, answer: impl Into<String>) -> Self {
        self.keywords.push((keyword.into(), answer.into()));
        self
    }

    fn answer(&self, question: &str) -> &str {
        self.keywords
            .iter()
            .find(|(keyword, _)| question.contains(keyword.as_str()))
            .map(|(_, answer)| answer.as_str())
            .unwrap_or(self.default.as_str())
    }
}

/// Per-knowledge-point canned answer table
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    entries: HashMap<String, FallbackEntry>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, knowledge_id: impl Into<String>, entry: FallbackEntry) -> Self {
        self.entries.insert(knowledge_id.into(), entry);
        self
    }

    /// Best canned answer for a question about a knowledge point
    pub fn answer(&self, knowledge_id: &str, question: &str) -> &str {
        match self.entries.get(knowledge_id) {
            Some(entry) => entry.answer(question),
            None => GENERIC_ANSWER,
        }
    }

    pub fn contains(&self, knowledge_id: &str) -> bool {
        self.entries.contains_key(knowledge_id)
    }

    /// Catalog points that only get the generic answer
    pub fn uncovered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a KnowledgePoint> {
        catalog
            .all_knowledge_points()
            .filter(|p| !self.contains(&p.id))
            .collect()
    }

    /// Table ids that do not exist in the catalog
    pub fn dangling(&self, catalog: &Catalog) -> Vec<String> {
        let mut ids: Vec<_> = self
            .entries
            .keys()
            .filter(|id| catalog.knowledge_point(id).is_none())
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Built-in answers
    pub fn builtin() -> Self {
        Self::new()
            .with_entry(
                "earth-rotation",
                FallbackEntry::new("地球自转是地球绕地轴自西向东旋转的运动。自转周期约为23时56分4秒（恒星日），产生昼夜交替、地方时差异、地转偏向力等地理现象。")
                    .keyword("速度", "地球自转角速度除两极外各地相同，约15°/小时；线速度从赤道向两极递减，赤道最大约1670km/h。")
                    .keyword("方向", "地球自转方向是自西向东。从北极上空看为逆时针，从南极上空看为顺时针。"),
            )
            .with_entry(
                "atmospheric-circulation",
                FallbackEntry::new("大气环流是全球性有规律的大气运动，包括三圈环流和季风环流。三圈环流形成了七个气压带和六个风带。")
                    .keyword("三圈", "三圈环流包括低纬环流（哈德莱环流）、中纬环流（费雷尔环流）和高纬环流（极地环流）。")
                    .keyword("季风", "季风是由于海陆热力性质差异和气压带风带季节移动形成的大范围风向随季节变化的现象。"),
            )
            .with_entry(
                "water-cycle",
                FallbackEntry::new("水循环是地球上各种水体通过蒸发、水汽输送、降水、径流等环节不断循环的过程。主要包括海陆间循环、陆地内循环和海上内循环。")
                    .keyword("意义", "水循环的意义：维持全球水量平衡、更新陆地淡水资源、调节气候、塑造地表形态、联系各圈层。"),
            )
            .with_entry(
                "plate-tectonics",
                FallbackEntry::new("板块构造学说认为岩石圈分为六大板块，漂浮在软流层上运动。板块边界是地震、火山活动集中的地带。")
                    .keyword("边界", "板块边界分为生长边界（张裂）和消亡边界（碰撞）。生长边界形成海岭、裂谷；消亡边界形成山脉、海沟。"),
            )
    }
}
