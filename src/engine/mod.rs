// ==========================================
// 教师任课分配引擎 - 引擎层
// ==========================================
// 职责: 专业解析、负载计算、自动分配、人工任课规则
// 红线: 引擎不做文件读写，只处理调用方提供的内存快照
// 红线: 预期内的未分配走返回值，不走错误
// ==========================================

pub mod curriculum;
pub mod distributor;
pub mod eligibility;
pub mod error;
pub mod load;
pub mod manual;
pub mod scoring;
pub mod specialization_resolver;

// 重导出核心引擎
pub use curriculum::{class_coverage, required_subjects, ClassCoverage, CurriculumOptions};
pub use distributor::{
    distribute, AssignmentDistributor, DistributionConfig, DistributionInput, DistributionResult,
    UnassignedReason, UnassignedSlot,
};
pub use eligibility::EligibilityFilter;
pub use error::{EngineError, EngineResult};
pub use load::{summarize_loads, teacher_load, LoadLedger, SubjectIndex, TeacherLoadSummary};
pub use manual::{
    AssignDecision, AssignmentWorkbench, Confirmed, Deleted, PendingAction, PendingKind,
    QuotaChange,
};
pub use scoring::{pick_best, ScoringWeights};
pub use specialization_resolver::{normalize, Resolution, SpecializationResolver, SynonymTable};
