//! Study hints per knowledge point

use super::catalog::Catalog;

/// Hints shown for points without a dedicated list
pub const DEFAULT_HINTS: &[&str] = &["仔细观察演示动画", "结合课本知识理解", "尝试调整参数观察变化"];

const HINTS: &[(&str, &[&str])] = &[
    (
        "earth-rotation",
        &[
            "地球自转方向：自西向东",
            "自转周期：恒星日约23时56分",
            "角速度：除两极外各地相同，约15°/小时",
            "线速度：从赤道向两极递减",
        ],
    ),
    (
        "atmospheric-circulation",
        &[
            "三圈环流：低纬、中纬、高纬环流",
            "七个气压带：赤道低压、副热带高压、副极地低压、极地高压",
            "六个风带：信风带、西风带、极地东风带",
            "气压带风带随太阳直射点移动",
        ],
    ),
    (
        "water-cycle",
        &[
            "水循环环节：蒸发、水汽输送、降水、径流",
            "海陆间循环是最重要的水循环类型",
            "水循环动力：太阳辐射和重力",
            "人类活动可以影响水循环的部分环节",
        ],
    ),
    (
        "plate-tectonics",
        &[
            "六大板块：亚欧、非洲、印度洋、太平洋、美洲、南极洲",
            "板块边界是地震火山集中带",
            "生长边界：张裂，形成海岭裂谷",
            "消亡边界：碰撞，形成山脉海沟",
        ],
    ),
];

/// Hints for a knowledge point, or [`DEFAULT_HINTS`]
pub fn hints_for(knowledge_id: &str) -> &'static [&'static str] {
    HINTS
        .iter()
        .find(|(id, _)| *id == knowledge_id)
        .map(|(_, hints)| *hints)
        .unwrap_or(DEFAULT_HINTS)
}

/// Whether a point has its own hint list
pub fn has_hints(knowledge_id: &str) -> bool {
    HINTS.iter().any(|(id, _)| *id == knowledge_id)
}

/// Hint table ids that do not exist in the catalog
pub fn dangling(catalog: &Catalog) -> Vec<&'static str> {
    HINTS
        .iter()
        .map(|(id, _)| *id)
        .filter(|id| catalog.knowledge_point(id).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_point() {
        let hints = hints_for("water-cycle");
        assert_eq!(hints.len(), 4);
        assert!(hints[0].contains("蒸发"));
        assert!(has_hints("water-cycle"));
    }

    #[test]
    fn test_default_hints() {
        assert_eq!(hints_for("monsoon"), DEFAULT_HINTS);
        assert!(!has_hints("monsoon"));
    }

    #[test]
    fn test_no_dangling_ids() {
        let catalog = Catalog::builtin().unwrap();
        assert!(dangling(&catalog).is_empty());
    }
}
