// ==========================================
// 教师任课分配引擎 - 班级课程清单
// ==========================================
// 职责: 确定班级需开设的科目、统计班级任课覆盖率
// 规则: 班级显式科目列表优先；否则查年级科目表；都没有则为空
// 规则: 结果按科目目录顺序，去重；归档科目默认排除
// ==========================================

use crate::domain::assignment::AssignmentSet;
use crate::domain::classroom::{ClassRoom, GradeSubjectMap};
use crate::domain::subject::Subject;
use crate::domain::types::Phase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurriculumOptions {
    pub include_archived: bool,
}

/// 班级需开设的科目（按科目目录顺序）
pub fn required_subjects<'a>(
    class: &ClassRoom,
    subjects: &'a [Subject],
    grade_subjects: &GradeSubjectMap,
    options: &CurriculumOptions,
) -> Vec<&'a Subject> {
    let wanted: &[String] = match class.explicit_subject_ids() {
        Some(ids) => ids,
        None => grade_subjects
            .get(&class.grade_key())
            .map(Vec::as_slice)
            .unwrap_or(&[]),
    };
    if wanted.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = wanted.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    subjects
        .iter()
        .filter(|s| wanted.contains(s.id.as_str()))
        .filter(|s| options.include_archived || !s.is_archived)
        .filter(|s| seen.insert(s.id.as_str()))
        .collect()
}

// ==========================================
// ClassCoverage - 班级任课完成度
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCoverage {
    pub class_id: String,
    pub class_name: String,
    pub required: usize,
    pub covered: usize,
    pub progress_percent: u8, // 无需开设科目时记 100
    pub missing_subject_ids: Vec<String>,
}

/// 统计班级覆盖率；phase 为 None 时统计全部班级
pub fn class_coverage(
    classes: &[ClassRoom],
    subjects: &[Subject],
    grade_subjects: &GradeSubjectMap,
    assignments: &AssignmentSet,
    phase: Option<Phase>,
    options: &CurriculumOptions,
) -> Vec<ClassCoverage> {
    classes
        .iter()
        .filter(|c| phase.map_or(true, |p| c.phase == p))
        .map(|class| {
            let required = required_subjects(class, subjects, grade_subjects, options);
            let missing_subject_ids: Vec<String> = required
                .iter()
                .filter(|s| !assignments.contains(&class.id, &s.id))
                .map(|s| s.id.clone())
                .collect();
            let covered = required.len() - missing_subject_ids.len();
            let progress_percent = if required.is_empty() {
                100
            } else {
                ((covered as f64 / required.len() as f64) * 100.0).round() as u8
            };

            ClassCoverage {
                class_id: class.id.clone(),
                class_name: class.display_name(),
                required: required.len(),
                covered,
                progress_percent,
                missing_subject_ids,
            }
        })
        .collect()
}
