// ==========================================
// 教师任课分配引擎 - 人工任课工作台
// ==========================================
// 职责: 人工调整任课（指派/取消/批量删除/修改课时上限）并记录操作日志
// 红线: 同一 (班级, 科目) 只能有一条任课，由 AssignmentSet 在写入点保证
// 红线: 超课时与批量删除不静默执行，必须返回待确认操作并经 confirm 执行
// 红线: 待确认操作携带签发时的版本号，版本已变化则拒绝执行
// 规则: 修改课时上限不回溯校验已有任课（超课时仅标记，不自动纠正）
// ==========================================

use crate::domain::action_log::{ActionType, AssignmentAction};
use crate::domain::assignment::{Assignment, AssignmentSet};
use crate::domain::roster::SchoolRoster;
use crate::domain::specialization::Specialization;
use crate::domain::subject::Subject;
use crate::domain::teacher::Teacher;
use crate::domain::classroom::ClassRoom;
use crate::domain::types::Phase;
use crate::engine::curriculum::{class_coverage, ClassCoverage, CurriculumOptions};
use crate::engine::distributor::{AssignmentDistributor, DistributionInput, DistributionResult};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::load::{summarize_loads, teacher_load, SubjectIndex, TeacherLoadSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

// ==========================================
// 决策结果
// ==========================================

/// 人工指派的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignDecision {
    /// 单元格已由同一教师负责，无变化
    Unchanged,
    /// 已写入；previous_teacher_id 为被替换的教师
    Committed { previous_teacher_id: Option<String> },
    /// 超课时，等待人工确认
    RequiresConfirmation(PendingAction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingKind {
    #[serde(rename_all = "camelCase")]
    QuotaOverrun {
        assignment: Assignment,
        current_load: u32,
        would_be_load: u32,
        quota_limit: u32,
    },
    #[serde(rename_all = "camelCase")]
    UnassignAllForTeacher { teacher_id: String, affected: usize },
    #[serde(rename_all = "camelCase")]
    ClearAll { affected: usize },
}

/// 待确认操作（签发时的任课集合版本号随行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingAction {
    pub kind: PendingKind,
    pub base_revision: u64,
}

/// confirm 的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmed {
    Assigned { previous_teacher_id: Option<String> },
    Removed(Vec<Assignment>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaChange {
    pub teacher_id: String,
    pub previous_limit: u32,
    pub new_limit: u32,
    pub teaching_load: u32,
    pub is_over_quota: bool,
}

/// 删除名册记录及其级联删除的任课
#[derive(Debug, Clone, PartialEq)]
pub struct Deleted<T> {
    pub record: T,
    pub removed_assignments: Vec<Assignment>,
}

// ==========================================
// AssignmentWorkbench - 人工任课工作台
// ==========================================
pub struct AssignmentWorkbench {
    actor: String,
    assignments: AssignmentSet,
    action_log: Vec<AssignmentAction>,
}

impl AssignmentWorkbench {
    pub fn new(actor: &str) -> Self {
        Self {
            actor: actor.to_string(),
            assignments: AssignmentSet::new(),
            action_log: Vec::new(),
        }
    }

    /// 由已有任课列表构建；列表含重复单元格时报错
    pub fn with_assignments(actor: &str, assignments: Vec<Assignment>) -> EngineResult<Self> {
        Ok(Self {
            actor: actor.to_string(),
            assignments: AssignmentSet::from_assignments(assignments)?,
            action_log: Vec::new(),
        })
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn assignments(&self) -> &AssignmentSet {
        &self.assignments
    }

    pub fn revision(&self) -> u64 {
        self.assignments.revision()
    }

    pub fn action_log(&self) -> &[AssignmentAction] {
        &self.action_log
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments.to_vec()
    }

    // ==========================================
    // 单元格操作
    // ==========================================

    /// 指派教师到 (班级, 科目)
    ///
    /// - 同一教师已负责 → Unchanged
    /// - 其他教师负责 → 替换（旧记录不保留）
    /// - 当前负载 + 科目课时 > 上限 → RequiresConfirmation
    #[instrument(skip(self, roster), fields(actor = %self.actor))]
    pub fn assign(
        &mut self,
        roster: &SchoolRoster,
        teacher_id: &str,
        class_id: &str,
        subject_id: &str,
    ) -> EngineResult<AssignDecision> {
        let (teacher, subject) = resolve_references(roster, teacher_id, class_id, subject_id)?;

        if self.assignments.teacher_for(class_id, subject_id) == Some(teacher_id) {
            return Ok(AssignDecision::Unchanged);
        }

        let index = SubjectIndex::new(&roster.subjects);
        let current_load = teacher_load(teacher_id, self.assignments.iter(), &index);
        let would_be_load = current_load.saturating_add(subject.periods_per_class);
        let assignment = Assignment::new(teacher_id, class_id, subject_id);

        if would_be_load > teacher.quota_limit {
            tracing::warn!(
                current_load,
                would_be_load,
                quota_limit = teacher.quota_limit,
                "指派将超出课时上限，等待确认"
            );
            return Ok(AssignDecision::RequiresConfirmation(PendingAction {
                kind: PendingKind::QuotaOverrun {
                    assignment,
                    current_load,
                    would_be_load,
                    quota_limit: teacher.quota_limit,
                },
                base_revision: self.assignments.revision(),
            }));
        }

        let previous_teacher_id = self.commit_assignment(assignment, None);
        Ok(AssignDecision::Committed {
            previous_teacher_id,
        })
    }

    /// 取消单个任课；不存在时无操作
    pub fn unassign(&mut self, class_id: &str, subject_id: &str) -> Option<Assignment> {
        let removed = self.assignments.remove(class_id, subject_id)?;
        self.record(
            AssignmentAction::new(ActionType::Unassign, &self.actor)
                .with_teacher(&removed.teacher_id)
                .with_cell(class_id, subject_id),
        );
        Some(removed)
    }

    // ==========================================
    // 批量删除（需确认）
    // ==========================================

    pub fn request_unassign_all_for_teacher(&self, teacher_id: &str) -> PendingAction {
        PendingAction {
            kind: PendingKind::UnassignAllForTeacher {
                teacher_id: teacher_id.to_string(),
                affected: self.assignments.for_teacher(teacher_id).count(),
            },
            base_revision: self.assignments.revision(),
        }
    }

    pub fn request_clear_all(&self) -> PendingAction {
        PendingAction {
            kind: PendingKind::ClearAll {
                affected: self.assignments.len(),
            },
            base_revision: self.assignments.revision(),
        }
    }

    /// 执行已确认的操作
    ///
    /// # 错误
    /// - 签发后任课集合已变更 → StaleRevision（重新发起请求）
    /// - 超课时指派所引用的教师/班级/科目已被删除 → *NotFound
    #[instrument(skip(self, roster, pending), fields(actor = %self.actor, base_revision = pending.base_revision))]
    pub fn confirm(
        &mut self,
        roster: &SchoolRoster,
        pending: PendingAction,
    ) -> EngineResult<Confirmed> {
        let actual = self.assignments.revision();
        if pending.base_revision != actual {
            return Err(EngineError::StaleRevision {
                expected: pending.base_revision,
                actual,
            });
        }

        match pending.kind {
            PendingKind::QuotaOverrun {
                assignment,
                current_load,
                would_be_load,
                quota_limit,
            } => {
                resolve_references(
                    roster,
                    &assignment.teacher_id,
                    &assignment.class_id,
                    &assignment.subject_id,
                )?;
                let overrun = json!({
                    "current_load": current_load,
                    "would_be_load": would_be_load,
                    "quota_limit": quota_limit,
                });
                let previous_teacher_id = self.commit_assignment(assignment, Some(overrun));
                Ok(Confirmed::Assigned {
                    previous_teacher_id,
                })
            }
            PendingKind::UnassignAllForTeacher { teacher_id, .. } => {
                let removed = self.assignments.remove_teacher(&teacher_id);
                self.record(
                    AssignmentAction::new(ActionType::UnassignTeacher, &self.actor)
                        .with_teacher(&teacher_id)
                        .with_payload(json!({ "removed": removed.len() })),
                );
                tracing::info!(teacher_id = %teacher_id, removed = removed.len(), "已取消教师全部任课");
                Ok(Confirmed::Removed(removed))
            }
            PendingKind::ClearAll { .. } => {
                let removed = self.assignments.to_vec();
                self.assignments.clear();
                self.record(
                    AssignmentAction::new(ActionType::ClearAll, &self.actor)
                        .with_payload(json!({ "removed": removed.len() })),
                );
                tracing::info!(removed = removed.len(), "已清空全部任课");
                Ok(Confirmed::Removed(removed))
            }
        }
    }

    // ==========================================
    // 名册维护
    // ==========================================

    /// 修改课时上限；已有任课保持不变
    pub fn set_quota(
        &mut self,
        roster: &mut SchoolRoster,
        teacher_id: &str,
        new_limit: u32,
    ) -> EngineResult<QuotaChange> {
        let teaching_load = {
            let index = SubjectIndex::new(&roster.subjects);
            teacher_load(teacher_id, self.assignments.iter(), &index)
        };
        let teacher = roster
            .teacher_mut(teacher_id)
            .ok_or_else(|| EngineError::TeacherNotFound(teacher_id.to_string()))?;
        let previous_limit = teacher.quota_limit;
        teacher.quota_limit = new_limit;

        let change = QuotaChange {
            teacher_id: teacher_id.to_string(),
            previous_limit,
            new_limit,
            teaching_load,
            is_over_quota: teaching_load > new_limit,
        };
        if change.is_over_quota {
            tracing::warn!(teacher_id, teaching_load, new_limit, "新课时上限低于当前负载");
        }
        self.record(
            AssignmentAction::new(ActionType::SetQuota, &self.actor)
                .with_teacher(teacher_id)
                .with_payload(json!({
                    "previous_limit": previous_limit,
                    "new_limit": new_limit,
                    "teaching_load": teaching_load,
                })),
        );
        Ok(change)
    }

    /// 删除教师并级联删除其任课
    pub fn delete_teacher(
        &mut self,
        roster: &mut SchoolRoster,
        teacher_id: &str,
    ) -> EngineResult<Deleted<Teacher>> {
        let pos = roster
            .teachers
            .iter()
            .position(|t| t.id == teacher_id)
            .ok_or_else(|| EngineError::TeacherNotFound(teacher_id.to_string()))?;
        let record = roster.teachers.remove(pos);
        let removed_assignments = self.assignments.remove_teacher(teacher_id);
        self.record(
            AssignmentAction::new(ActionType::DeleteTeacher, &self.actor)
                .with_teacher(teacher_id)
                .with_payload(json!({ "removed": removed_assignments.len() })),
        );
        Ok(Deleted {
            record,
            removed_assignments,
        })
    }

    /// 删除班级并级联删除其任课
    pub fn delete_class(
        &mut self,
        roster: &mut SchoolRoster,
        class_id: &str,
    ) -> EngineResult<Deleted<ClassRoom>> {
        let pos = roster
            .classes
            .iter()
            .position(|c| c.id == class_id)
            .ok_or_else(|| EngineError::ClassNotFound(class_id.to_string()))?;
        let record = roster.classes.remove(pos);
        let removed_assignments = self.assignments.remove_class(class_id);
        self.record(
            AssignmentAction::new(ActionType::DeleteClass, &self.actor)
                .with_class(class_id)
                .with_payload(json!({ "removed": removed_assignments.len() })),
        );
        Ok(Deleted {
            record,
            removed_assignments,
        })
    }

    /// 删除专业；仍有教师引用时拒绝
    pub fn remove_specialization(
        &mut self,
        roster: &mut SchoolRoster,
        specialization_id: &str,
    ) -> EngineResult<Specialization> {
        let pos = roster
            .specializations
            .iter()
            .position(|s| s.id == specialization_id)
            .ok_or_else(|| EngineError::SpecializationNotFound(specialization_id.to_string()))?;
        let teacher_count = roster.teachers_with_specialization(specialization_id);
        if teacher_count > 0 {
            return Err(EngineError::SpecializationInUse {
                specialization_id: specialization_id.to_string(),
                teacher_count,
            });
        }
        let removed = roster.specializations.remove(pos);
        self.record(
            AssignmentAction::new(ActionType::RemoveSpecialization, &self.actor)
                .with_detail(removed.name.clone()),
        );
        Ok(removed)
    }

    // ==========================================
    // 自动分配
    // ==========================================

    /// 以当前任课集合为快照运行自动分配（结果未落地）
    pub fn run_distribution(
        &self,
        distributor: &AssignmentDistributor,
        roster: &SchoolRoster,
        target_phase: Phase,
    ) -> EngineResult<DistributionResult> {
        let existing = self.assignments.to_vec();
        let input = DistributionInput::from_roster(roster, &existing, target_phase)
            .with_base_revision(self.assignments.revision());
        distributor.distribute(&input)
    }

    /// 落地自动分配结果
    ///
    /// # 错误
    /// - 分配运行后发生过人工修改 → StaleRevision（需重新运行分配）
    #[instrument(skip(self, result), fields(actor = %self.actor, base_revision = result.base_revision))]
    pub fn apply_distribution(&mut self, result: &DistributionResult) -> EngineResult<usize> {
        let actual = self.assignments.revision();
        if result.base_revision != actual {
            return Err(EngineError::StaleRevision {
                expected: result.base_revision,
                actual,
            });
        }
        if let Some(clash) = result
            .added
            .iter()
            .find(|a| self.assignments.contains(&a.class_id, &a.subject_id))
        {
            return Err(EngineError::InvalidInput(format!(
                "分配结果与当前任课冲突: class_id={}, subject_id={}",
                clash.class_id, clash.subject_id
            )));
        }

        for assignment in &result.added {
            self.assignments.insert_new(assignment.clone())?;
        }
        self.record(
            AssignmentAction::new(ActionType::AutoDistribute, &self.actor).with_payload(json!({
                "assigned_count": result.assigned_count,
                "unassigned_count": result.unassigned_count,
            })),
        );
        tracing::info!(applied = result.added.len(), "自动分配结果已落地");
        Ok(result.added.len())
    }

    // ==========================================
    // 报表
    // ==========================================

    pub fn load_summaries(&self, roster: &SchoolRoster) -> Vec<TeacherLoadSummary> {
        let index = SubjectIndex::new(&roster.subjects);
        summarize_loads(&roster.teachers, self.assignments.iter(), &index)
    }

    pub fn class_coverage(
        &self,
        roster: &SchoolRoster,
        phase: Option<Phase>,
        options: &CurriculumOptions,
    ) -> Vec<ClassCoverage> {
        class_coverage(
            &roster.classes,
            &roster.subjects,
            &roster.grade_subjects,
            &self.assignments,
            phase,
            options,
        )
    }

    // ==========================================
    // 内部
    // ==========================================

    fn commit_assignment(
        &mut self,
        assignment: Assignment,
        overrun: Option<serde_json::Value>,
    ) -> Option<String> {
        let action = AssignmentAction::new(
            match (&overrun, self.assignments.contains(&assignment.class_id, &assignment.subject_id)) {
                (Some(_), _) => ActionType::QuotaOverrunConfirm,
                (None, true) => ActionType::Reassign,
                (None, false) => ActionType::Assign,
            },
            &self.actor,
        )
        .with_teacher(&assignment.teacher_id)
        .with_cell(&assignment.class_id, &assignment.subject_id);

        let previous_teacher_id = self.assignments.replace(assignment);
        let action = match (&previous_teacher_id, overrun) {
            (prev, Some(mut payload)) => {
                payload["previous_teacher_id"] = json!(prev);
                action.with_payload(payload)
            }
            (Some(prev), None) => action.with_detail(format!("previous_teacher_id={}", prev)),
            (None, None) => action,
        };
        self.record(action);
        previous_teacher_id
    }

    fn record(&mut self, action: AssignmentAction) {
        tracing::debug!(action_type = %action.action_type, actor = %action.actor, "记录任课操作");
        self.action_log.push(action);
    }
}

/// 校验指派引用的教师/班级/科目均在名册中
fn resolve_references<'r>(
    roster: &'r SchoolRoster,
    teacher_id: &str,
    class_id: &str,
    subject_id: &str,
) -> EngineResult<(&'r Teacher, &'r Subject)> {
    let teacher = roster
        .teacher(teacher_id)
        .ok_or_else(|| EngineError::TeacherNotFound(teacher_id.to_string()))?;
    let subject = roster
        .subject(subject_id)
        .ok_or_else(|| EngineError::SubjectNotFound(subject_id.to_string()))?;
    if roster.class(class_id).is_none() {
        return Err(EngineError::ClassNotFound(class_id.to_string()));
    }
    Ok((teacher, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subject::Subject;

    fn roster() -> SchoolRoster {
        SchoolRoster {
            specializations: vec![
                Specialization::new("3", "رياضيات"),
                Specialization::new("9", "فنية"),
            ],
            teachers: vec![
                Teacher {
                    id: "T1".to_string(),
                    name: "أحمد".to_string(),
                    specialization_id: Some("3".to_string()),
                    quota_limit: 6,
                    waiting_quota: None,
                    phone: None,
                },
                Teacher {
                    id: "T2".to_string(),
                    name: "خالد".to_string(),
                    specialization_id: Some("3".to_string()),
                    quota_limit: 24,
                    waiting_quota: Some(2),
                    phone: None,
                },
            ],
            subjects: vec![Subject {
                id: "MATH".to_string(),
                name: "رياضيات".to_string(),
                specialization_ids: vec!["3".to_string()],
                periods_per_class: 4,
                phases: vec![Phase::Elementary],
                target_grades: None,
                is_archived: false,
            }],
            classes: vec![
                ClassRoom {
                    id: "C1".to_string(),
                    phase: Phase::Elementary,
                    grade: 1,
                    section: 1,
                    name: None,
                    subject_ids: Some(vec!["MATH".to_string()]),
                },
                ClassRoom {
                    id: "C2".to_string(),
                    phase: Phase::Elementary,
                    grade: 1,
                    section: 2,
                    name: None,
                    subject_ids: Some(vec!["MATH".to_string()]),
                },
            ],
            grade_subjects: Default::default(),
        }
    }

    #[test]
    fn test_assign_same_teacher_twice_is_noop() {
        let roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");

        let first = bench.assign(&roster, "T2", "C1", "MATH").unwrap();
        assert_eq!(first, AssignDecision::Committed { previous_teacher_id: None });
        let revision = bench.revision();

        let second = bench.assign(&roster, "T2", "C1", "MATH").unwrap();
        assert_eq!(second, AssignDecision::Unchanged);
        assert_eq!(bench.assignments().len(), 1);
        assert_eq!(bench.revision(), revision);
        assert_eq!(bench.action_log().len(), 1);
    }

    #[test]
    fn test_reassign_replaces_previous_teacher() {
        let roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        bench.assign(&roster, "T1", "C1", "MATH").unwrap();

        let decision = bench.assign(&roster, "T2", "C1", "MATH").unwrap();
        assert_eq!(
            decision,
            AssignDecision::Committed { previous_teacher_id: Some("T1".to_string()) }
        );
        assert_eq!(bench.assignments().len(), 1);
        assert_eq!(bench.assignments().teacher_for("C1", "MATH"), Some("T2"));
        assert_eq!(bench.action_log()[1].action_type, ActionType::Reassign);
    }

    #[test]
    fn test_quota_overrun_requires_confirmation() {
        let roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        bench.assign(&roster, "T1", "C1", "MATH").unwrap();

        // 4 + 4 = 8 > 6
        let decision = bench.assign(&roster, "T1", "C2", "MATH").unwrap();
        let pending = match decision {
            AssignDecision::RequiresConfirmation(p) => p,
            other => panic!("应返回待确认操作, got {:?}", other),
        };
        assert!(!bench.assignments().contains("C2", "MATH"));

        let confirmed = bench.confirm(&roster, pending).unwrap();
        assert_eq!(confirmed, Confirmed::Assigned { previous_teacher_id: None });
        assert_eq!(bench.assignments().teacher_for("C2", "MATH"), Some("T1"));
        let last = bench.action_log().last().unwrap();
        assert_eq!(last.action_type, ActionType::QuotaOverrunConfirm);
        assert_eq!(last.payload_json.as_ref().unwrap()["would_be_load"], 8);
    }

    #[test]
    fn test_stale_confirmation_rejected() {
        let roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        bench.assign(&roster, "T2", "C1", "MATH").unwrap();

        let pending = bench.request_clear_all();
        bench.unassign("C1", "MATH");

        let err = bench.confirm(&roster, pending).unwrap_err();
        assert!(matches!(err, EngineError::StaleRevision { expected: 1, actual: 2 }));
    }

    #[test]
    fn test_unassign_all_for_teacher_after_confirmation() {
        let roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        bench.assign(&roster, "T2", "C1", "MATH").unwrap();
        bench.assign(&roster, "T2", "C2", "MATH").unwrap();

        let pending = bench.request_unassign_all_for_teacher("T2");
        assert!(matches!(
            pending.kind,
            PendingKind::UnassignAllForTeacher { affected: 2, .. }
        ));
        assert_eq!(bench.assignments().len(), 2);

        match bench.confirm(&roster, pending).unwrap() {
            Confirmed::Removed(removed) => assert_eq!(removed.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
        assert!(bench.assignments().is_empty());
    }

    #[test]
    fn test_unknown_references_rejected() {
        let roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        assert!(matches!(
            bench.assign(&roster, "T9", "C1", "MATH"),
            Err(EngineError::TeacherNotFound(_))
        ));
        assert!(matches!(
            bench.assign(&roster, "T1", "C9", "MATH"),
            Err(EngineError::ClassNotFound(_))
        ));
        assert!(matches!(
            bench.assign(&roster, "T1", "C1", "ART"),
            Err(EngineError::SubjectNotFound(_))
        ));
    }

    #[test]
    fn test_set_quota_flags_but_keeps_assignments() {
        let mut roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        bench.assign(&roster, "T2", "C1", "MATH").unwrap();
        bench.assign(&roster, "T2", "C2", "MATH").unwrap();

        let change = bench.set_quota(&mut roster, "T2", 5).unwrap();
        assert_eq!(change.previous_limit, 24);
        assert_eq!(change.teaching_load, 8);
        assert!(change.is_over_quota);
        assert_eq!(bench.assignments().len(), 2);
        assert_eq!(roster.teacher("T2").unwrap().quota_limit, 5);
    }

    #[test]
    fn test_remove_specialization_blocked_while_referenced() {
        let mut roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");

        let err = bench.remove_specialization(&mut roster, "3").unwrap_err();
        assert!(matches!(err, EngineError::SpecializationInUse { teacher_count: 2, .. }));

        let removed = bench.remove_specialization(&mut roster, "9").unwrap();
        assert_eq!(removed.id, "9");
        assert_eq!(roster.specializations.len(), 1);
    }

    #[test]
    fn test_delete_teacher_cascades() {
        let mut roster = roster();
        let mut bench = AssignmentWorkbench::new("admin");
        bench.assign(&roster, "T2", "C1", "MATH").unwrap();

        let deleted = bench.delete_teacher(&mut roster, "T2").unwrap();
        assert_eq!(deleted.record.id, "T2");
        assert_eq!(deleted.removed_assignments.len(), 1);
        assert!(bench.assignments().is_empty());
        assert!(roster.teacher("T2").is_none());
    }
}
