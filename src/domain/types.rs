// ==========================================
// 教师任课分配引擎 - 领域类型定义
// ==========================================
// 职责: 学段、专业匹配方式等基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 学段 (Phase)
// ==========================================
// 序列化格式: 阿拉伯语显示名（与年级科目表 key 一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "رياض أطفال")]
    Kindergarten, // 幼儿园
    #[serde(rename = "الابتدائية")]
    Elementary, // 小学
    #[serde(rename = "المتوسطة")]
    Middle, // 初中
    #[serde(rename = "الثانوية")]
    High, // 高中
    #[serde(rename = "أخرى")]
    Other, // 其他
}

impl Phase {
    /// 阿拉伯语显示名
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Kindergarten => "رياض أطفال",
            Phase::Elementary => "الابتدائية",
            Phase::Middle => "المتوسطة",
            Phase::High => "الثانوية",
            Phase::Other => "أخرى",
        }
    }

    /// 年级科目表的 key: "<学段>-<年级>"
    pub fn grade_key(&self, grade: u8) -> String {
        format!("{}-{}", self.label(), grade)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Phase {
    type Err = String;

    /// 同时接受阿拉伯语显示名与英文代码
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let phase = match trimmed.to_ascii_lowercase().as_str() {
            "kindergarten" | "kg" => Phase::Kindergarten,
            "elementary" | "primary" => Phase::Elementary,
            "middle" => Phase::Middle,
            "high" | "secondary" => Phase::High,
            "other" => Phase::Other,
            _ => match trimmed {
                "رياض أطفال" => Phase::Kindergarten,
                "الابتدائية" => Phase::Elementary,
                "المتوسطة" => Phase::Middle,
                "الثانوية" => Phase::High,
                "أخرى" => Phase::Other,
                _ => return Err(format!("未知学段: {}", trimmed)),
            },
        };
        Ok(phase)
    }
}

// ==========================================
// 专业匹配方式 (Specialization Match)
// ==========================================
// 顺序: Strict 优先；Fallback/Open 仅在无严格匹配时使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecializationMatch {
    Strict,   // 教师专业在科目 specialization_ids 中
    Fallback, // 教师专业属于通用兜底专业
    Open,     // 科目未限定专业
}

impl SpecializationMatch {
    pub fn is_strict(&self) -> bool {
        matches!(self, SpecializationMatch::Strict)
    }
}

impl fmt::Display for SpecializationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecializationMatch::Strict => write!(f, "STRICT"),
            SpecializationMatch::Fallback => write!(f, "FALLBACK"),
            SpecializationMatch::Open => write!(f, "OPEN"),
        }
    }
}
