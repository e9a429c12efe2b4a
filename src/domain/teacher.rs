// ==========================================
// 教师任课分配引擎 - 教师领域模型
// ==========================================
// 红线: quota_limit 是授课课时总和的硬上限（自动分配不得突破）
// waiting_quota 为非授课值守课时，只计入负担展示，不参与自动分配校验
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization_id: Option<String>,
    pub quota_limit: u32, // 授课课时上限（每周）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_quota: Option<u32>, // 值守课时（每周）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Teacher {
    pub fn has_specialization(&self, specialization_id: &str) -> bool {
        self.specialization_id.as_deref() == Some(specialization_id)
    }

    pub fn waiting_quota_or_zero(&self) -> u32 {
        self.waiting_quota.unwrap_or(0)
    }
}
