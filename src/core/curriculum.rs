//! Curriculum - Built-in catalog definition
//!
//! The high-school geography curriculum: two required modules and three
//! elective modules. Definition order here is display order everywhere.

use super::knowledge::{Category, KnowledgePoint, Subcategory};

/// `(id, title, description, keywords)`
type PointDef = (&'static str, &'static str, &'static str, &'static [&'static str]);

fn subcategory(category: &str, id: &str, name: &str, points: &[PointDef]) -> Subcategory {
    Subcategory {
        id: id.to_string(),
        name: name.to_string(),
        knowledge_points: points
            .iter()
            .map(|(pid, title, description, keywords)| {
                KnowledgePoint::new(*pid, *title, *description, category, id)
                    .with_keywords(keywords.iter().copied())
            })
            .collect(),
    }
}

fn category(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    subcategories: Vec<Subcategory>,
) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        subcategories,
    }
}

/// All built-in categories in display order
pub fn categories() -> Vec<Category> {
    vec![required1(), required2(), elective1(), elective2(), elective3()]
}

// 必修一：自然地理
fn required1() -> Category {
    const ID: &str = "required1";
    category(
        ID,
        "自然地理基础",
        "必修一：宇宙中的地球、地球上的大气、地球上的水、地表形态的塑造",
        "globe",
        vec![
            subcategory(ID, "earth-universe", "宇宙中的地球", &[
                ("earth-rotation", "地球的自转", "地球绕地轴自西向东旋转，产生昼夜交替、地方时差异等现象", &["自转", "昼夜交替", "地方时", "角速度", "线速度"]),
                ("earth-revolution", "地球的公转", "地球绕太阳公转，产生四季变化、昼夜长短变化等现象", &["公转", "四季", "黄赤交角", "太阳直射点"]),
                ("day-night", "昼夜交替与时差", "地球自转导致昼夜交替，不同经度产生时差", &["昼夜", "晨昏线", "时区", "区时"]),
                ("seasons", "四季变化", "地球公转和黄赤交角导致四季更替和昼夜长短变化", &["四季", "节气", "昼夜长短", "正午太阳高度"]),
            ]),
            subcategory(ID, "atmosphere", "地球上的大气", &[
                ("atmosphere-structure", "大气的垂直分层", "大气层按温度变化分为对流层、平流层、高层大气", &["对流层", "平流层", "大气分层", "气温垂直变化"]),
                ("heat-balance", "大气的受热过程", "太阳辐射、地面辐射、大气逆辐射之间的能量传递", &["太阳辐射", "地面辐射", "大气逆辐射", "温室效应"]),
                ("atmospheric-circulation", "大气环流", "三圈环流、季风环流等全球性大气运动", &["三圈环流", "信风", "西风", "季风"]),
                ("weather-systems", "常见天气系统", "气旋、反气旋、锋面等天气系统的形成与影响", &["气旋", "反气旋", "冷锋", "暖锋", "准静止锋"]),
                ("climate-types", "世界气候类型", "全球主要气候类型的分布、特征和成因", &["热带", "温带", "寒带", "气候分布"]),
            ]),
            subcategory(ID, "hydrosphere", "地球上的水", &[
                ("water-cycle", "水循环", "海陆间循环、陆地内循环、海上内循环的过程", &["蒸发", "降水", "径流", "水循环"]),
                ("ocean-currents", "洋流", "世界洋流的分布规律及其对地理环境的影响", &["暖流", "寒流", "洋流分布", "渔场"]),
                ("river-features", "河流特征", "河流的水文特征及其影响因素", &["流量", "水位", "含沙量", "结冰期"]),
            ]),
            subcategory(ID, "lithosphere", "地表形态的塑造", &[
                ("internal-forces", "内力作用", "地壳运动、岩浆活动、变质作用等内力作用", &["地壳运动", "褶皱", "断层", "火山", "地震"]),
                ("plate-tectonics", "板块构造", "六大板块的分布及板块运动", &["板块", "张裂", "碰撞", "消亡边界", "生长边界"]),
                ("external-forces", "外力作用", "风化、侵蚀、搬运、沉积等外力作用", &["风化", "侵蚀", "搬运", "沉积"]),
                ("river-landforms", "河流地貌", "河流侵蚀地貌和堆积地貌的形成", &["V形谷", "冲积扇", "三角洲", "河漫滩"]),
                ("wind-landforms", "风成地貌", "风力侵蚀和堆积形成的地貌", &["风蚀蘑菇", "雅丹", "沙丘", "黄土高原"]),
                ("karst-landforms", "喀斯特地貌", "石灰岩溶蚀形成的特殊地貌", &["溶洞", "石林", "峰林", "地下河"]),
            ]),
        ],
    )
}

// 必修二：人文地理
fn required2() -> Category {
    const ID: &str = "required2";
    category(
        ID,
        "人文地理基础",
        "必修二：人口、城市、农业、工业、交通",
        "users",
        vec![
            subcategory(ID, "population", "人口", &[
                ("population-growth", "人口增长模式", "原始型、传统型、现代型人口增长模式的特点", &["出生率", "死亡率", "自然增长率", "人口转型"]),
                ("population-migration", "人口迁移", "人口迁移的类型、原因和影响", &["迁移", "推拉理论", "城市化", "人口流动"]),
                ("population-distribution", "人口分布", "世界人口分布规律及影响因素", &["人口密度", "人口分布", "稀疏区", "稠密区"]),
            ]),
            subcategory(ID, "urbanization", "城市与城市化", &[
                ("urban-structure", "城市内部空间结构", "城市功能分区及其形成原因", &["CBD", "住宅区", "工业区", "功能分区"]),
                ("urbanization-process", "城市化进程", "城市化的标志、阶段和问题", &["城市化率", "郊区化", "逆城市化", "再城市化"]),
                ("urban-planning", "城市规划", "城市规划的原则和方法", &["规划", "布局", "交通", "环境"]),
            ]),
            subcategory(ID, "agriculture", "农业", &[
                ("agriculture-location", "农业区位因素", "影响农业生产的自然和社会经济因素", &["气候", "地形", "土壤", "市场", "交通"]),
                ("agriculture-types", "农业地域类型", "世界主要农业地域类型的分布和特点", &["水稻种植", "商品谷物", "混合农业", "乳畜业"]),
            ]),
            subcategory(ID, "industry", "工业", &[
                ("industry-location", "工业区位因素", "影响工业布局的主要因素", &["原料", "市场", "劳动力", "技术", "交通"]),
                ("industry-transfer", "产业转移", "产业转移的原因、方向和影响", &["转移", "承接", "产业升级", "区域发展"]),
            ]),
            subcategory(ID, "transportation", "交通运输", &[
                ("transport-modes", "交通运输方式", "五种主要交通运输方式的特点和选择", &["铁路", "公路", "水运", "航空", "管道"]),
                ("transport-layout", "交通运输布局", "交通运输网络的形成和影响因素", &["枢纽", "网络", "布局", "区位"]),
            ]),
        ],
    )
}

// 选择性必修一：自然地理深化
fn elective1() -> Category {
    const ID: &str = "elective1";
    category(
        ID,
        "自然地理深化",
        "选择性必修一：地球运动深化、大气深化、水文深化、地貌深化",
        "mountain",
        vec![
            subcategory(ID, "earth-motion-advanced", "地球运动深化", &[
                ("solar-altitude", "太阳高度角", "正午太阳高度角的计算和应用", &["太阳高度", "正午", "计算", "影子"]),
                ("day-length", "昼夜长短计算", "不同纬度、不同日期的昼夜长短变化", &["昼长", "夜长", "极昼", "极夜"]),
            ]),
            subcategory(ID, "atmosphere-advanced", "大气深化", &[
                ("pressure-systems", "气压系统", "高压、低压系统的形成和天气特征", &["高压", "低压", "气压带", "风带"]),
                ("monsoon", "季风气候", "东亚季风和南亚季风的成因和特点", &["夏季风", "冬季风", "雨季", "旱季"]),
            ]),
            subcategory(ID, "hydrology-advanced", "水文深化", &[
                ("groundwater", "地下水", "地下水的类型、分布和利用", &["潜水", "承压水", "含水层", "泉"]),
                ("lake-wetland", "湖泊与湿地", "湖泊和湿地的形成、功能和保护", &["湖泊", "湿地", "生态", "调节"]),
            ]),
        ],
    )
}

// 选择性必修二：区域发展
fn elective2() -> Category {
    const ID: &str = "elective2";
    category(
        ID,
        "区域发展",
        "选择性必修二：区域与区域发展、资源与环境、区域联系",
        "map",
        vec![
            subcategory(ID, "regional-development", "区域与区域发展", &[
                ("regional-characteristics", "区域特征分析", "区域的概念、特征和划分", &["区域", "特征", "差异", "联系"]),
                ("regional-strategy", "区域发展战略", "不同区域的发展战略和模式", &["战略", "发展", "协调", "可持续"]),
            ]),
            subcategory(ID, "resources-environment", "资源与环境", &[
                ("resource-distribution", "资源分布", "自然资源的分布规律和开发利用", &["矿产", "能源", "水资源", "土地资源"]),
                ("environmental-issues", "环境问题", "主要环境问题的成因和治理", &["污染", "生态破坏", "治理", "保护"]),
            ]),
        ],
    )
}

// 选择性必修三：资源、环境与国家安全
fn elective3() -> Category {
    const ID: &str = "elective3";
    category(
        ID,
        "资源环境与安全",
        "选择性必修三：资源安全、环境安全、生态安全",
        "shield",
        vec![
            subcategory(ID, "resource-security", "资源安全", &[
                ("energy-security", "能源安全", "能源资源的战略意义和安全保障", &["石油", "天然气", "新能源", "能源战略"]),
                ("food-security", "粮食安全", "粮食生产和供应的安全保障", &["粮食", "耕地", "农业", "安全"]),
            ]),
            subcategory(ID, "ecological-security", "生态安全", &[
                ("biodiversity", "生物多样性", "生物多样性的价值和保护", &["物种", "生态系统", "保护区", "濒危"]),
                ("climate-change", "全球气候变化", "全球变暖的原因、影响和应对", &["温室效应", "海平面", "碳排放", "低碳"]),
            ]),
        ],
    )
}
