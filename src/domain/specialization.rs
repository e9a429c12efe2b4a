// ==========================================
// 教师任课分配引擎 - 专业领域模型
// ==========================================
// 红线: 专业只按需创建，从不自动删除
// 红线: 仍被教师引用的专业不可删除
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 专业（任教资格的规范身份）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    pub id: String,   // 专业ID
    pub name: String, // 显示名（保留原始写法）
}

impl Specialization {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// 以新生成的ID创建专业（导入/手工录入时未命中已有专业）
    pub fn with_generated_id(name: impl Into<String>) -> Self {
        Self::new(format!("spec-{}", Uuid::new_v4().simple()), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Specialization::with_generated_id("فيزياء");
        let b = Specialization::with_generated_id("فيزياء");
        assert!(a.id.starts_with("spec-"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "فيزياء");
    }
}
