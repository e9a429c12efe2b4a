// ==========================================
// 教师任课分配引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含引擎逻辑，不含文件读写
// ==========================================

pub mod action_log;
pub mod assignment;
pub mod classroom;
pub mod roster;
pub mod specialization;
pub mod subject;
pub mod teacher;
pub mod types;

// 重导出核心类型
pub use action_log::{ActionType, AssignmentAction};
pub use assignment::{Assignment, AssignmentKey, AssignmentSet, DuplicateAssignment};
pub use classroom::{ClassRoom, GradeSubjectMap};
pub use roster::{SchoolRoster, SchoolSnapshot};
pub use specialization::Specialization;
pub use subject::Subject;
pub use teacher::Teacher;
pub use types::{Phase, SpecializationMatch};
