//! System prompt for the tutoring conversation

use serde::{Deserialize, Serialize};

use crate::core::knowledge::KnowledgePoint;

/// Title used when a question is not tied to a known point
pub const GENERIC_TITLE: &str = "地理知识";

/// The slice of a knowledge point the tutor is told about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeContext {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Free-form context supplied by the caller (e.g. diagram state)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl KnowledgeContext {
    /// Context for questions not tied to a catalog entry
    pub fn generic() -> Self {
        Self {
            title: GENERIC_TITLE.to_string(),
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}

impl From<&KnowledgePoint> for KnowledgeContext {
    fn from(point: &KnowledgePoint) -> Self {
        Self {
            title: point.title.clone(),
            description: point.description.clone(),
            keywords: point.keywords.clone(),
            extra: None,
        }
    }
}

/// Build the system message for a knowledge point
pub fn system_prompt(context: &KnowledgeContext) -> String {
    let mut prompt = format!(
        "你是一位专业的高中地理老师，正在辅导学生学习\"{}\"这个知识点。\n",
        context.title
    );
    if !context.description.is_empty() {
        prompt.push_str(&format!("知识点描述：{}\n", context.description));
    }
    if !context.keywords.is_empty() {
        prompt.push_str(&format!("关键词：{}\n", context.keywords.join("、")));
    }
    prompt.push_str(
        "\n请根据学生的问题，提供清晰、准确的地理知识解答。\n\
         - 使用简洁易懂的语言\n\
         - 结合具体例子和地理原理解释\n\
         - 适当使用专业术语，但要解释其含义\n\
         - 鼓励学生思考和探索\n\
         - 如果涉及地图或图表，用文字描述清楚\n\
         - 如果涉及计算（如时区、太阳高度角），给出详细的解题步骤",
    );
    if let Some(extra) = context.extra.as_deref().filter(|e| !e.is_empty()) {
        prompt.push_str(&format!("\n\n上下文信息：{}", extra));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_point() {
        let point = KnowledgePoint::new("ocean-currents", "洋流", "世界洋流的分布规律", "required1", "hydrosphere")
            .with_keywords(["暖流", "寒流"]);
        let prompt = system_prompt(&KnowledgeContext::from(&point));

        assert!(prompt.contains("\"洋流\"这个知识点"));
        assert!(prompt.contains("知识点描述：世界洋流的分布规律"));
        assert!(prompt.contains("关键词：暖流、寒流"));
        assert!(!prompt.contains("上下文信息"));
    }

    #[test]
    fn test_generic_prompt() {
        let prompt = system_prompt(&KnowledgeContext::generic().with_extra("{\"lat\":30}"));
        assert!(prompt.contains(GENERIC_TITLE));
        assert!(!prompt.contains("知识点描述"));
        assert!(prompt.ends_with("上下文信息：{\"lat\":30}"));
    }
}
