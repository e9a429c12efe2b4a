// ==========================================
// 教师任课分配引擎 - 科目领域模型
// ==========================================

use crate::domain::types::Phase;
use serde::{Deserialize, Serialize};

/// 科目
///
/// `specialization_ids` 为空表示该科目对任何专业开放（通识科目）。
/// `periods_per_class` 为给一个班级授课时每周计入教师工作量的课时数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialization_ids: Vec<String>,
    pub periods_per_class: u32,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_grades: Option<Vec<u8>>,
    #[serde(default)]
    pub is_archived: bool, // 归档: 不参与分配，但保留历史
}

impl Subject {
    /// 未限定专业（开放科目）
    pub fn is_open(&self) -> bool {
        self.specialization_ids.is_empty()
    }

    /// 专业是否在严格匹配列表中
    pub fn lists_specialization(&self, specialization_id: &str) -> bool {
        self.specialization_ids.iter().any(|id| id == specialization_id)
    }
}
