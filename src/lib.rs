// ==========================================
// 教师任课分配引擎 - 核心库
// ==========================================
// 系统定位: 决策支持（自动分配给出建议，超课时与批量删除由人工确认）
// 输入: 学校名册的内存快照（专业/教师/科目/班级/年级科目表/任课记录）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Phase, SpecializationMatch};

// 领域实体
pub use domain::{
    ActionType, Assignment, AssignmentAction, AssignmentSet, ClassRoom, GradeSubjectMap,
    SchoolRoster, SchoolSnapshot, Specialization, Subject, Teacher,
};

// 引擎
pub use engine::{
    distribute, AssignDecision, AssignmentDistributor, AssignmentWorkbench, DistributionConfig,
    DistributionResult, EngineError, EngineResult, PendingAction, SpecializationResolver,
    SynonymTable,
};

// 导入
pub use importer::{RosterImportConfig, RosterImportReport, RosterImporter};

// 配置
pub use config::{AssignmentConfigReader, ConfigManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "教师任课分配引擎";
