// ==========================================
// 教师任课分配引擎 - 自动分配器
// ==========================================
// 职责: 为目标学段每个班级的每个必开科目贪心选择教师
// 输入: 教师 + 科目目录 + 班级 + 已有任课 + 年级科目表 + 目标学段
// 输出: 新的任课列表（已有在前，新增在后）+ 分配/未分配计数
// ==========================================
// 红线: 不覆盖已有任课（单元格已占用直接跳过）
// 红线: 任何新增任课不得使教师运行中负载超过 quota_limit
// 红线: 输入相同（含顺序）则输出逐字节相同；不使用随机数，不依赖无序集合的遍历顺序
// 红线: 纯函数，不修改输入
// ==========================================

use crate::config::{AssignmentConfigReader, ConfigResult};
use crate::domain::assignment::{Assignment, AssignmentSet};
use crate::domain::classroom::{ClassRoom, GradeSubjectMap};
use crate::domain::roster::SchoolRoster;
use crate::domain::subject::Subject;
use crate::domain::teacher::Teacher;
use crate::domain::types::Phase;
use crate::engine::curriculum::{required_subjects, CurriculumOptions};
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::error::EngineResult;
use crate::engine::load::{LoadLedger, SubjectIndex};
use crate::engine::scoring::{pick_best, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::instrument;

// ==========================================
// DistributionConfig - 分配参数
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionConfig {
    pub weights: ScoringWeights,
    pub fallback_specialization_ids: Vec<String>,
    pub include_archived: bool,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            fallback_specialization_ids: vec!["1".to_string()],
            include_archived: false,
        }
    }
}

impl DistributionConfig {
    pub fn from_reader<C>(reader: &C) -> ConfigResult<Self>
    where
        C: AssignmentConfigReader + ?Sized,
    {
        Ok(Self {
            weights: ScoringWeights {
                class_affinity_bonus: reader.get_class_affinity_bonus()?,
                headroom_weight: reader.get_headroom_weight()?,
            },
            fallback_specialization_ids: reader.get_fallback_specialization_ids()?,
            include_archived: reader.get_include_archived_subjects()?,
        })
    }
}

// ==========================================
// 输入 / 输出
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct DistributionInput<'a> {
    pub teachers: &'a [Teacher],
    pub subjects: &'a [Subject],
    pub classes: &'a [ClassRoom],
    pub existing: &'a [Assignment],
    pub grade_subjects: &'a GradeSubjectMap,
    pub target_phase: Phase,
    pub base_revision: u64, // 快照对应的任课集合版本
}

impl<'a> DistributionInput<'a> {
    pub fn from_roster(roster: &'a SchoolRoster, existing: &'a [Assignment], target_phase: Phase) -> Self {
        Self {
            teachers: &roster.teachers,
            subjects: &roster.subjects,
            classes: &roster.classes,
            existing,
            grade_subjects: &roster.grade_subjects,
            target_phase,
            base_revision: 0,
        }
    }

    pub fn with_base_revision(mut self, revision: u64) -> Self {
        self.base_revision = revision;
        self
    }
}

/// 未分配原因（预期内结果，不是错误）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnassignedReason {
    NoQualifiedTeacher, // 无专业匹配的教师
    QuotaExhausted,     // 有资格的教师课时均已满
}

impl fmt::Display for UnassignedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnassignedReason::NoQualifiedTeacher => write!(f, "NO_QUALIFIED_TEACHER"),
            UnassignedReason::QuotaExhausted => write!(f, "QUOTA_EXHAUSTED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedSlot {
    pub class_id: String,
    pub subject_id: String,
    pub reason: UnassignedReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    pub assignments: Vec<Assignment>, // 完整列表: 已有 + 新增
    pub added: Vec<Assignment>,       // 本次新增（按提交顺序）
    pub assigned_count: usize,
    pub unassigned_count: usize,
    pub unassigned_slots: Vec<UnassignedSlot>,
    pub base_revision: u64,
}

// ==========================================
// AssignmentDistributor - 自动分配器
// ==========================================
pub struct AssignmentDistributor {
    config: DistributionConfig,
    eligibility: EligibilityFilter,
}

impl AssignmentDistributor {
    pub fn new(config: DistributionConfig) -> Self {
        let eligibility = EligibilityFilter::new(config.fallback_specialization_ids.clone());
        Self {
            config,
            eligibility,
        }
    }

    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    /// 执行一次自动分配
    ///
    /// 顺序: 目标学段班级按输入顺序 → 每班必开科目按目录顺序
    /// 1) 单元格已有任课 → 跳过
    /// 2) 资格筛选（严格匹配优先）
    /// 3) 课时筛选（运行中负载 + 科目课时 <= 上限）
    /// 4) 无候选 → 未分配计数 +1
    /// 5) 评分择优（同分先到先得）
    /// 6) 提交，更新运行中负载
    ///
    /// # 错误
    /// - 已有任课列表本身含重复单元格 → DuplicateAssignment
    #[instrument(skip(self, input), fields(
        target_phase = %input.target_phase,
        teachers_count = input.teachers.len(),
        classes_count = input.classes.len(),
        existing_count = input.existing.len()
    ))]
    pub fn distribute(&self, input: &DistributionInput<'_>) -> EngineResult<DistributionResult> {
        let mut book = AssignmentSet::from_assignments(input.existing.iter().cloned())?;
        let index = SubjectIndex::new(input.subjects);
        let mut ledger = LoadLedger::from_assignments(input.existing, &index);
        let mut class_teachers: HashSet<(&str, &str)> = input
            .existing
            .iter()
            .map(|a| (a.class_id.as_str(), a.teacher_id.as_str()))
            .collect();
        let options = CurriculumOptions {
            include_archived: self.config.include_archived,
        };

        let mut added = Vec::new();
        let mut unassigned_slots = Vec::new();

        for class in input
            .classes
            .iter()
            .filter(|c| c.phase == input.target_phase)
        {
            for subject in required_subjects(class, input.subjects, input.grade_subjects, &options) {
                if book.contains(&class.id, &subject.id) {
                    continue;
                }

                let qualified = self.eligibility.qualified(subject, input.teachers);
                if qualified.is_empty() {
                    unassigned_slots.push(UnassignedSlot {
                        class_id: class.id.clone(),
                        subject_id: subject.id.clone(),
                        reason: UnassignedReason::NoQualifiedTeacher,
                    });
                    continue;
                }

                let scored: Vec<(&Teacher, f64)> = qualified
                    .into_iter()
                    .filter(|t| ledger.fits(t, subject.periods_per_class))
                    .map(|t| {
                        let teaches_class = class_teachers.contains(&(class.id.as_str(), t.id.as_str()));
                        let score = self
                            .config
                            .weights
                            .score(teaches_class, ledger.load_of(&t.id), t.quota_limit);
                        (t, score)
                    })
                    .collect();

                let winner = match pick_best(&scored) {
                    Some(idx) => scored[idx].0,
                    None => {
                        unassigned_slots.push(UnassignedSlot {
                            class_id: class.id.clone(),
                            subject_id: subject.id.clone(),
                            reason: UnassignedReason::QuotaExhausted,
                        });
                        continue;
                    }
                };

                let assignment = Assignment::new(&winner.id, &class.id, &subject.id);
                book.insert_new(assignment.clone())?;
                ledger.add(&winner.id, subject.periods_per_class);
                class_teachers.insert((class.id.as_str(), winner.id.as_str()));

                tracing::debug!(
                    class_id = %class.id,
                    subject_id = %subject.id,
                    teacher_id = %winner.id,
                    running_load = ledger.load_of(&winner.id),
                    quota_limit = winner.quota_limit,
                    "任课已分配"
                );
                added.push(assignment);
            }
        }

        let result = DistributionResult {
            assignments: book.to_vec(),
            assigned_count: added.len(),
            unassigned_count: unassigned_slots.len(),
            added,
            unassigned_slots,
            base_revision: input.base_revision,
        };

        tracing::info!(
            assigned_count = result.assigned_count,
            unassigned_count = result.unassigned_count,
            total_assignments = result.assignments.len(),
            "自动分配完成"
        );
        Ok(result)
    }
}

impl Default for AssignmentDistributor {
    fn default() -> Self {
        Self::new(DistributionConfig::default())
    }
}

/// 以默认参数执行自动分配
pub fn distribute(
    teachers: &[Teacher],
    subjects: &[Subject],
    classes: &[ClassRoom],
    existing: &[Assignment],
    grade_subjects: &GradeSubjectMap,
    target_phase: Phase,
) -> EngineResult<DistributionResult> {
    let input = DistributionInput {
        teachers,
        subjects,
        classes,
        existing,
        grade_subjects,
        target_phase,
        base_revision: 0,
    };
    AssignmentDistributor::default().distribute(&input)
}
