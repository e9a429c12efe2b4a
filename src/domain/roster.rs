// ==========================================
// 教师任课分配引擎 - 学校名册快照
// ==========================================
// 职责: 调用方提供的内存快照（专业/教师/科目/班级/年级科目表）
// 红线: 名册查找失败一律返回 None，由调用方按"未找到"处理
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::classroom::{ClassRoom, GradeSubjectMap};
use crate::domain::specialization::Specialization;
use crate::domain::subject::Subject;
use crate::domain::teacher::Teacher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRoster {
    #[serde(default)]
    pub specializations: Vec<Specialization>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub classes: Vec<ClassRoom>,
    #[serde(default)]
    pub grade_subjects: GradeSubjectMap,
}

impl SchoolRoster {
    pub fn teacher(&self, teacher_id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }

    pub fn teacher_mut(&mut self, teacher_id: &str) -> Option<&mut Teacher> {
        self.teachers.iter_mut().find(|t| t.id == teacher_id)
    }

    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }

    pub fn class(&self, class_id: &str) -> Option<&ClassRoom> {
        self.classes.iter().find(|c| c.id == class_id)
    }

    pub fn specialization(&self, specialization_id: &str) -> Option<&Specialization> {
        self.specializations
            .iter()
            .find(|s| s.id == specialization_id)
    }

    /// 引用某专业的教师数量
    pub fn teachers_with_specialization(&self, specialization_id: &str) -> usize {
        self.teachers
            .iter()
            .filter(|t| t.has_specialization(specialization_id))
            .count()
    }
}

/// 名册 + 任课记录（命令行读写的 JSON 文件格式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSnapshot {
    #[serde(flatten)]
    pub roster: SchoolRoster,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}
