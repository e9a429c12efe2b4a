// ==========================================
// 教师任课分配引擎 - 课时负载计算
// ==========================================
// 职责: 汇总教师当前已承担的每周授课课时
// 红线: 科目找不到的记录计 0，不报错（悬空引用）
// 红线: 负载必须现算或由显式维护的计数器提供，不得缓存过期值
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::subject::Subject;
use crate::domain::teacher::Teacher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// SubjectIndex - 科目ID索引
// ==========================================
pub struct SubjectIndex<'a> {
    by_id: HashMap<&'a str, &'a Subject>,
}

impl<'a> SubjectIndex<'a> {
    pub fn new(subjects: &'a [Subject]) -> Self {
        Self {
            by_id: subjects.iter().map(|s| (s.id.as_str(), s)).collect(),
        }
    }

    pub fn get(&self, subject_id: &str) -> Option<&'a Subject> {
        self.by_id.get(subject_id).copied()
    }

    /// 科目课时数；科目不存在时为 0
    pub fn periods_of(&self, subject_id: &str) -> u32 {
        self.get(subject_id).map(|s| s.periods_per_class).unwrap_or(0)
    }
}

/// 计算教师当前负载（授课课时总和）
pub fn teacher_load<'a, I>(teacher_id: &str, assignments: I, subjects: &SubjectIndex<'_>) -> u32
where
    I: IntoIterator<Item = &'a Assignment>,
{
    assignments
        .into_iter()
        .filter(|a| a.teacher_id == teacher_id)
        .map(|a| subjects.periods_of(&a.subject_id))
        .sum()
}

// ==========================================
// LoadLedger - 运行中负载计数器
// ==========================================
// 自动分配过程中逐条累加，避免每步全量重算
#[derive(Debug, Clone, Default)]
pub struct LoadLedger {
    loads: HashMap<String, u32>,
}

impl LoadLedger {
    /// 一次遍历记录集合建立初始负载
    pub fn from_assignments<'a, I>(assignments: I, subjects: &SubjectIndex<'_>) -> Self
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        let mut loads: HashMap<String, u32> = HashMap::new();
        for assignment in assignments {
            *loads.entry(assignment.teacher_id.clone()).or_insert(0) +=
                subjects.periods_of(&assignment.subject_id);
        }
        Self { loads }
    }

    pub fn load_of(&self, teacher_id: &str) -> u32 {
        self.loads.get(teacher_id).copied().unwrap_or(0)
    }

    pub fn add(&mut self, teacher_id: &str, periods: u32) {
        *self.loads.entry(teacher_id.to_string()).or_insert(0) += periods;
    }

    /// 追加 periods 后是否仍不超过上限（含等于）
    pub fn fits(&self, teacher: &Teacher, periods: u32) -> bool {
        self.load_of(&teacher.id).saturating_add(periods) <= teacher.quota_limit
    }
}

// ==========================================
// TeacherLoadSummary - 任课报表行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherLoadSummary {
    pub teacher_id: String,
    pub teacher_name: String,
    pub teaching_load: u32,
    pub waiting_quota: u32,
    pub total_burden: u32, // 授课 + 值守
    pub quota_limit: u32,
    pub remaining: i64,    // 上限 - 授课；为负表示超课时
    pub is_over_quota: bool,
    pub assignment_count: usize,
}

/// 按教师输入顺序生成负载汇总
pub fn summarize_loads<'a, I>(
    teachers: &[Teacher],
    assignments: I,
    subjects: &SubjectIndex<'_>,
) -> Vec<TeacherLoadSummary>
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut loads: HashMap<&str, u32> = HashMap::new();
    for assignment in assignments {
        *counts.entry(assignment.teacher_id.as_str()).or_insert(0) += 1;
        *loads.entry(assignment.teacher_id.as_str()).or_insert(0) +=
            subjects.periods_of(&assignment.subject_id);
    }

    teachers
        .iter()
        .map(|teacher| {
            let teaching_load = loads.get(teacher.id.as_str()).copied().unwrap_or(0);
            let waiting_quota = teacher.waiting_quota_or_zero();
            TeacherLoadSummary {
                teacher_id: teacher.id.clone(),
                teacher_name: teacher.name.clone(),
                teaching_load,
                waiting_quota,
                total_burden: teaching_load + waiting_quota,
                quota_limit: teacher.quota_limit,
                remaining: teacher.quota_limit as i64 - teaching_load as i64,
                is_over_quota: teaching_load > teacher.quota_limit,
                assignment_count: counts.get(teacher.id.as_str()).copied().unwrap_or(0),
            }
        })
        .collect()
}
