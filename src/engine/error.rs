// ==========================================
// 教师任课分配引擎 - 引擎层错误类型
// ==========================================
// 分类:
// - 预期内的未分配（无合格教师 / 超课时待确认）不是错误，走返回值
// - 引用缺失（记录指向已删除的教师/科目/班级）在负载计算中按 0 吸收
// - 唯一性被绕过属于调用方编程错误，立即返回 DuplicateAssignment
// ==========================================

use crate::config::ConfigError;
use crate::domain::assignment::DuplicateAssignment;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 不变量违反 =====
    #[error(transparent)]
    DuplicateAssignment(#[from] DuplicateAssignment),

    // ===== 资源未找到 =====
    #[error("教师未找到: {0}")]
    TeacherNotFound(String),

    #[error("科目未找到: {0}")]
    SubjectNotFound(String),

    #[error("班级未找到: {0}")]
    ClassNotFound(String),

    #[error("专业未找到: {0}")]
    SpecializationNotFound(String),

    // ===== 业务规则 =====
    #[error("专业仍被引用，不可删除: specialization_id={specialization_id}, teacher_count={teacher_count}")]
    SpecializationInUse {
        specialization_id: String,
        teacher_count: usize,
    },

    // ===== 并发控制 =====
    #[error("任课集合已变更: expected_revision={expected}, actual_revision={actual}")]
    StaleRevision { expected: u64, actual: u64 },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;
