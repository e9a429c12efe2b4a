// ==========================================
// 教师任课分配引擎 - 操作日志领域模型
// ==========================================
// 红线: 任课记录的每次有效变更必须记录
// 用途: 审计追踪（谁在何时确认了超课时 / 批量删除）
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentAction {
    pub action_id: String,
    pub action_type: ActionType,
    pub action_ts: NaiveDateTime,
    pub actor: String,

    // ===== 作用对象 =====
    pub teacher_id: Option<String>,
    pub class_id: Option<String>,
    pub subject_id: Option<String>,

    // ===== 负载 =====
    pub detail: Option<String>,
    pub payload_json: Option<JsonValue>,
}

impl AssignmentAction {
    pub fn new(action_type: ActionType, actor: &str) -> Self {
        Self {
            action_id: Uuid::new_v4().to_string(),
            action_type,
            action_ts: Utc::now().naive_utc(),
            actor: actor.to_string(),
            teacher_id: None,
            class_id: None,
            subject_id: None,
            detail: None,
            payload_json: None,
        }
    }

    pub fn with_teacher(mut self, teacher_id: &str) -> Self {
        self.teacher_id = Some(teacher_id.to_string());
        self
    }

    pub fn with_cell(mut self, class_id: &str, subject_id: &str) -> Self {
        self.class_id = Some(class_id.to_string());
        self.subject_id = Some(subject_id.to_string());
        self
    }

    pub fn with_class(mut self, class_id: &str) -> Self {
        self.class_id = Some(class_id.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload_json = Some(payload);
        self
    }
}

// ==========================================
// ActionType - 操作类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Assign,               // 新建任课
    Reassign,             // 替换任课教师
    QuotaOverrunConfirm,  // 超课时人工确认后任课
    Unassign,             // 取消单个任课
    UnassignTeacher,      // 取消某教师全部任课
    ClearAll,             // 清空全部任课
    SetQuota,             // 修改课时上限
    DeleteTeacher,        // 删除教师（级联）
    DeleteClass,          // 删除班级（级联）
    RemoveSpecialization, // 删除专业
    AutoDistribute,       // 自动分配结果落地
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionType::Assign => "ASSIGN",
            ActionType::Reassign => "REASSIGN",
            ActionType::QuotaOverrunConfirm => "QUOTA_OVERRUN_CONFIRM",
            ActionType::Unassign => "UNASSIGN",
            ActionType::UnassignTeacher => "UNASSIGN_TEACHER",
            ActionType::ClearAll => "CLEAR_ALL",
            ActionType::SetQuota => "SET_QUOTA",
            ActionType::DeleteTeacher => "DELETE_TEACHER",
            ActionType::DeleteClass => "DELETE_CLASS",
            ActionType::RemoveSpecialization => "REMOVE_SPECIALIZATION",
            ActionType::AutoDistribute => "AUTO_DISTRIBUTE",
        };
        write!(f, "{}", s)
    }
}
