// ==========================================
// 教师任课分配引擎 - 班级领域模型
// ==========================================

use crate::domain::types::Phase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 年级科目表: "<学段>-<年级>" → 有序科目ID列表（外部提供）
pub type GradeSubjectMap = BTreeMap<String, Vec<String>>;

/// 班级
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRoom {
    pub id: String,
    pub phase: Phase,
    pub grade: u8,
    pub section: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>, // 自定义名称（默认 "年级-班号"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<String>>, // 显式科目列表（优先于年级科目表）
}

impl ClassRoom {
    pub fn grade_key(&self) -> String {
        self.phase.grade_key(self.grade)
    }

    /// 显式指定且非空的科目列表
    pub fn explicit_subject_ids(&self) -> Option<&[String]> {
        self.subject_ids
            .as_deref()
            .filter(|ids| !ids.is_empty())
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("{}-{}", self.grade, self.section),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(subject_ids: Option<Vec<String>>) -> ClassRoom {
        ClassRoom {
            id: "C1".to_string(),
            phase: Phase::Elementary,
            grade: 2,
            section: 3,
            name: None,
            subject_ids,
        }
    }

    #[test]
    fn test_empty_explicit_list_is_ignored() {
        assert!(class(Some(vec![])).explicit_subject_ids().is_none());
        assert!(class(None).explicit_subject_ids().is_none());
        assert_eq!(
            class(Some(vec!["S1".to_string()])).explicit_subject_ids(),
            Some(&["S1".to_string()][..])
        );
    }

    #[test]
    fn test_display_name_default() {
        assert_eq!(class(None).display_name(), "2-3");
        assert_eq!(class(None).grade_key(), "الابتدائية-2");
    }
}
