// ==========================================
// 人工任课工作台集成测试
// ==========================================
// 测试目标: 单元格唯一性、超课时确认、批量删除确认、版本校验、分配结果落地
// ==========================================


use school_assign::domain::{ActionType, Assignment, SchoolRoster};
use school_assign::engine::{
    AssignDecision, AssignmentDistributor, AssignmentWorkbench, Confirmed, CurriculumOptions,
    EngineError, PendingAction, PendingKind,
};
use school_assign::Phase;
use std::collections::HashSet;
use test_helpers::{sample_roster, TeacherBuilder};

#[test]
fn test_repeat_assign_same_teacher_keeps_list_length() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");

    bench.assign(&roster, "T-MATH", "C-1-1", "MATH").unwrap();
    let before = bench.assignments().len();
    let decision = bench.assign(&roster, "T-MATH", "C-1-1", "MATH").unwrap();

    assert_eq!(decision, AssignDecision::Unchanged);
    assert_eq!(bench.assignments().len(), before);
}

#[test]
fn test_reassigned_pair_moves_to_end() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    bench.assign(&roster, "T-MATH", "C-1-1", "ART").unwrap();
    bench.assign(&roster, "T-AR", "C-1-1", "ARABIC").unwrap();

    bench.assign(&roster, "T-ISL", "C-1-1", "ART").unwrap();

    assert_eq!(
        bench.assignments().to_vec(),
        vec![
            Assignment::new("T-AR", "C-1-1", "ARABIC"),
            Assignment::new("T-ISL", "C-1-1", "ART"),
        ]
    );
}

#[test]
fn test_uniqueness_holds_after_mixed_operations() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    let distributor = AssignmentDistributor::default();

    bench.assign(&roster, "T-ISL", "C-1-1", "ART").unwrap();
    let result = bench
        .run_distribution(&distributor, &roster, Phase::Elementary)
        .unwrap();
    bench.apply_distribution(&result).unwrap();
    bench.assign(&roster, "T-AR", "C-1-1", "ART").unwrap();
    bench.unassign("C-1-2", "MATH");
    bench.assign(&roster, "T-ISL", "C-1-2", "ART").unwrap();

    let list = bench.assignments().to_vec();
    let keys: HashSet<(String, String)> = list
        .iter()
        .map(|a| (a.class_id.clone(), a.subject_id.clone()))
        .collect();
    assert_eq!(keys.len(), list.len());
}

#[test]
fn test_overrun_recorded_only_after_confirmation() {
    school_assign::logging::init_test();
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");

    // T-ISL 上限 6: 2 + 5 = 7 > 6
    bench.assign(&roster, "T-ISL", "C-1-1", "ART").unwrap();
    let decision = bench.assign(&roster, "T-ISL", "C-1-1", "MATH").unwrap();

    let pending = match decision {
        AssignDecision::RequiresConfirmation(pending) => pending,
        other => panic!("expected confirmation, got {:?}", other),
    };
    match &pending.kind {
        PendingKind::QuotaOverrun {
            current_load,
            would_be_load,
            quota_limit,
            ..
        } => {
            assert_eq!(*current_load, 2);
            assert_eq!(*would_be_load, 7);
            assert_eq!(*quota_limit, 6);
        }
        other => panic!("unexpected pending kind {:?}", other),
    }
    assert!(!bench.assignments().contains("C-1-1", "MATH"));
    assert_eq!(bench.action_log().len(), 1);

    bench.confirm(&roster, pending).unwrap();
    assert_eq!(bench.assignments().teacher_for("C-1-1", "MATH"), Some("T-ISL"));
    assert_eq!(
        bench.action_log().last().map(|a| a.action_type),
        Some(ActionType::QuotaOverrunConfirm)
    );

    let loads = bench.load_summaries(&roster);
    let isl = loads.iter().find(|s| s.teacher_id == "T-ISL").unwrap();
    assert!(isl.is_over_quota);
    assert_eq!(isl.remaining, -1);
}

#[test]
fn test_confirm_rejected_after_intervening_edit() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    bench.assign(&roster, "T-MATH", "C-1-1", "MATH").unwrap();
    bench.assign(&roster, "T-MATH", "C-1-2", "MATH").unwrap();

    let pending = bench.request_unassign_all_for_teacher("T-MATH");
    bench.assign(&roster, "T-AR", "C-1-1", "ARABIC").unwrap();

    let err = bench.confirm(&roster, pending).unwrap_err();
    assert!(matches!(err, EngineError::StaleRevision { .. }));
    assert_eq!(bench.assignments().len(), 3);
}

#[test]
fn test_clear_all_requires_confirmation() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    bench.assign(&roster, "T-MATH", "C-1-1", "MATH").unwrap();
    bench.assign(&roster, "T-AR", "C-1-1", "ARABIC").unwrap();

    let pending = bench.request_clear_all();
    assert_eq!(pending.kind, PendingKind::ClearAll { affected: 2 });
    assert_eq!(bench.assignments().len(), 2);

    let confirmed = bench.confirm(&roster, pending).unwrap();
    assert!(matches!(confirmed, Confirmed::Removed(ref removed) if removed.len() == 2));
    assert!(bench.assignments().is_empty());
    assert_eq!(
        bench.action_log().last().map(|a| a.action_type),
        Some(ActionType::ClearAll)
    );
}

#[test]
fn test_apply_distribution_rejects_stale_result() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    let distributor = AssignmentDistributor::default();

    let result = bench
        .run_distribution(&distributor, &roster, Phase::Elementary)
        .unwrap();
    bench.assign(&roster, "T-AR", "C-1-1", "ART").unwrap();

    let err = bench.apply_distribution(&result).unwrap_err();
    assert!(matches!(err, EngineError::StaleRevision { expected: 0, actual: 1 }));
    assert_eq!(bench.assignments().len(), 1);
}

#[test]
fn test_apply_distribution_fills_coverage() {
    let roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    let distributor = AssignmentDistributor::default();

    let result = bench
        .run_distribution(&distributor, &roster, Phase::Elementary)
        .unwrap();
    let applied = bench.apply_distribution(&result).unwrap();

    assert_eq!(applied, 6);
    let coverage = bench.class_coverage(&roster, Some(Phase::Elementary), &CurriculumOptions::default());
    assert_eq!(coverage.len(), 2);
    assert!(coverage.iter().all(|c| c.progress_percent == 100));
    assert_eq!(
        bench.action_log().last().map(|a| a.action_type),
        Some(ActionType::AutoDistribute)
    );
}

#[test]
fn test_set_quota_does_not_touch_assignments() {
    let mut roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    bench.assign(&roster, "T-MATH", "C-1-1", "MATH").unwrap();
    bench.assign(&roster, "T-MATH", "C-1-2", "MATH").unwrap();
    let revision = bench.revision();

    let change = bench.set_quota(&mut roster, "T-MATH", 6).unwrap();

    assert!(change.is_over_quota);
    assert_eq!(change.teaching_load, 10);
    assert_eq!(bench.assignments().len(), 2);
    assert_eq!(bench.revision(), revision);
}

#[test]
fn test_delete_class_cascades_assignments() {
    let mut roster = sample_roster();
    let mut bench = AssignmentWorkbench::new("admin");
    bench.assign(&roster, "T-MATH", "C-1-1", "MATH").unwrap();
    bench.assign(&roster, "T-MATH", "C-1-2", "MATH").unwrap();

    let deleted = bench.delete_class(&mut roster, "C-1-2").unwrap();

    assert_eq!(deleted.record.id, "C-1-2");
    assert_eq!(deleted.removed_assignments.len(), 1);
    assert_eq!(bench.assignments().len(), 1);
    assert!(matches!(
        bench.delete_class(&mut roster, "C-1-2"),
        Err(EngineError::ClassNotFound(_))
    ));
}

#[test]
fn test_workbench_rejects_duplicate_snapshot() {
    let result = AssignmentWorkbench::with_assignments(
        "admin",
        vec![
            Assignment::new("T-MATH", "C-1-1", "MATH"),
            Assignment::new("T-ISL", "C-1-1", "MATH"),
        ],
    );
    assert!(matches!(result, Err(EngineError::DuplicateAssignment(_))));
}

fn pending_overrun(
    bench: &mut AssignmentWorkbench,
    roster: &SchoolRoster,
    class_id: &str,
) -> PendingAction {
    // T-LOW 上限 2: 0 + 5 = 5 > 2
    match bench.assign(roster, "T-LOW", class_id, "MATH").unwrap() {
        AssignDecision::RequiresConfirmation(pending) => pending,
        other => panic!("expected confirmation, got {:?}", other),
    }
}

#[test]
fn test_confirmed_overrun_rejected_after_teacher_deleted() {
    let mut roster = sample_roster();
    roster
        .teachers
        .push(TeacherBuilder::new("T-LOW").specialization("3").quota(2).build());
    let mut bench = AssignmentWorkbench::new("admin");

    let pending = pending_overrun(&mut bench, &roster, "C-1-1");
    let revision = bench.revision();
    let deleted = bench.delete_teacher(&mut roster, "T-LOW").unwrap();
    assert!(deleted.removed_assignments.is_empty());
    assert_eq!(bench.revision(), revision);

    let err = bench.confirm(&roster, pending).unwrap_err();
    assert!(matches!(err, EngineError::TeacherNotFound(ref id) if id == "T-LOW"));
    assert!(bench.assignments().is_empty());
}

#[test]
fn test_confirmed_overrun_rejected_after_class_deleted() {
    let mut roster = sample_roster();
    roster
        .teachers
        .push(TeacherBuilder::new("T-LOW").specialization("3").quota(2).build());
    let mut bench = AssignmentWorkbench::new("admin");

    let pending = pending_overrun(&mut bench, &roster, "C-1-2");
    bench.delete_class(&mut roster, "C-1-2").unwrap();

    let err = bench.confirm(&roster, pending).unwrap_err();
    assert!(matches!(err, EngineError::ClassNotFound(ref id) if id == "C-1-2"));
    assert!(!bench.assignments().contains("C-1-2", "MATH"));
    assert!(bench.assignments().is_empty());
}
