// ==========================================
// 教师任课分配引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 全局 key-value（JSON 对象文件，可为空 → 全部取默认值）
// ==========================================

use crate::config::config_reader::AssignmentConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const CLASS_AFFINITY_BONUS: &str = "assignment.class_affinity_bonus";
    pub const HEADROOM_WEIGHT: &str = "assignment.headroom_weight";
    pub const FALLBACK_SPECIALIZATION_IDS: &str = "assignment.fallback_specialization_ids";
    pub const INCLUDE_ARCHIVED_SUBJECTS: &str = "assignment.include_archived_subjects";
    pub const DEFAULT_QUOTA_LIMIT: &str = "roster.default_quota_limit";
    pub const MIN_TEACHER_NAME_CHARS: &str = "roster.min_teacher_name_chars";
    pub const EXTRA_SPECIALIZATION_SYNONYMS: &str = "roster.extra_specialization_synonyms";
}

/// 默认配置文件位置: <系统配置目录>/school-assign/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("school-assign").join("config.json"))
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl ConfigManager {
    /// 空配置（所有项取默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象文件加载
    ///
    /// 非字符串值（数字/布尔/数组/对象）以 JSON 文本形式保存
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let parsed: JsonValue = serde_json::from_str(&raw)?;
        let object = parsed.as_object().ok_or_else(|| {
            ConfigError::FormatError("配置文件顶层必须是 JSON 对象".to_string())
        })?;

        let values = object
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect();

        tracing::debug!(path = %path.as_ref().display(), "配置文件已加载");
        Ok(Self::from_map(values))
    }

    pub fn from_map(values: BTreeMap<String, String>) -> Self {
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockPoisoned(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    /// 读取配置值，缺失时返回默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入/覆盖配置值
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockPoisoned(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 当前所有配置的快照（JSON，按 key 排序）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockPoisoned(e.to_string()))?;
        Ok(serde_json::to_string(&*values)?)
    }

    // ==========================================
    // 类型化解析
    // ==========================================

    fn parse_value<T>(&self, key: &str, default: &str) -> ConfigResult<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.get_config_or_default(key, default)?;
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })
    }

    /// 评分权重: 有限且非负
    fn parse_weight(&self, key: &str, default: &str) -> ConfigResult<f64> {
        let weight: f64 = self.parse_value(key, default)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: weight.to_string(),
                message: "权重必须为有限非负数".to_string(),
            });
        }
        Ok(weight)
    }
}

/// 解析ID列表: 支持 JSON 数组 `["1","7"]` 或逗号分隔 `1,7`
fn parse_id_list(key: &str, raw: &str) -> ConfigResult<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        let parsed: Vec<JsonValue> =
            serde_json::from_str(trimmed).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            })?;
        return Ok(parsed
            .into_iter()
            .map(|v| match v {
                JsonValue::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect());
    }

    Ok(trimmed
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn parse_synonyms(key: &str, raw: &str) -> ConfigResult<Vec<(String, Vec<String>)>> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
        message,
    };

    let parsed: JsonValue = serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?;
    let object = parsed
        .as_object()
        .ok_or_else(|| invalid("期望 JSON 对象: 规范名 → 同义词数组".to_string()))?;

    let mut entries = Vec::with_capacity(object.len());
    for (canonical, synonyms) in object {
        let list = synonyms
            .as_array()
            .ok_or_else(|| invalid(format!("{} 的同义词必须是数组", canonical)))?;
        let synonyms = list
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        entries.push((canonical.clone(), synonyms));
    }
    Ok(entries)
}

// ==========================================
// AssignmentConfigReader 实现
// ==========================================
impl AssignmentConfigReader for ConfigManager {
    fn get_class_affinity_bonus(&self) -> ConfigResult<f64> {
        self.parse_weight(config_keys::CLASS_AFFINITY_BONUS, "50")
    }

    fn get_headroom_weight(&self) -> ConfigResult<f64> {
        self.parse_weight(config_keys::HEADROOM_WEIGHT, "100")
    }

    fn get_fallback_specialization_ids(&self) -> ConfigResult<Vec<String>> {
        let raw = self.get_config_or_default(config_keys::FALLBACK_SPECIALIZATION_IDS, "1")?;
        parse_id_list(config_keys::FALLBACK_SPECIALIZATION_IDS, &raw)
    }

    fn get_include_archived_subjects(&self) -> ConfigResult<bool> {
        self.parse_value(config_keys::INCLUDE_ARCHIVED_SUBJECTS, "false")
    }

    fn get_default_quota_limit(&self) -> ConfigResult<u32> {
        self.parse_value(config_keys::DEFAULT_QUOTA_LIMIT, "24")
    }

    fn get_min_teacher_name_chars(&self) -> ConfigResult<usize> {
        self.parse_value(config_keys::MIN_TEACHER_NAME_CHARS, "2")
    }

    fn get_extra_specialization_synonyms(&self) -> ConfigResult<Vec<(String, Vec<String>)>> {
        match self.get_config_value(config_keys::EXTRA_SPECIALIZATION_SYNONYMS)? {
            Some(raw) if !raw.trim().is_empty() => {
                parse_synonyms(config_keys::EXTRA_SPECIALIZATION_SYNONYMS, &raw)
            }
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = ConfigManager::new();
        assert_eq!(config.get_class_affinity_bonus().unwrap(), 50.0);
        assert_eq!(config.get_headroom_weight().unwrap(), 100.0);
        assert_eq!(config.get_fallback_specialization_ids().unwrap(), vec!["1"]);
        assert!(!config.get_include_archived_subjects().unwrap());
        assert_eq!(config.get_default_quota_limit().unwrap(), 24);
        assert_eq!(config.get_min_teacher_name_chars().unwrap(), 2);
        assert!(config.get_extra_specialization_synonyms().unwrap().is_empty());
    }

    #[test]
    fn test_parse_id_list_formats() {
        assert_eq!(parse_id_list("k", "1, 7 ,").unwrap(), vec!["1", "7"]);
        assert_eq!(parse_id_list("k", r#"["1","7"]"#).unwrap(), vec!["1", "7"]);
        assert!(parse_id_list("k", "").unwrap().is_empty());
        assert!(parse_id_list("k", "[1,").is_err());
    }

    #[test]
    fn test_invalid_number_is_error() {
        let config = ConfigManager::new();
        config
            .set_config_value(config_keys::HEADROOM_WEIGHT, "heavy")
            .unwrap();
        let err = config.get_headroom_weight().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_snapshot_is_sorted_json() {
        let config = ConfigManager::new();
        config.set_config_value("b", "2").unwrap();
        config.set_config_value("a", "1").unwrap();
        assert_eq!(config.get_config_snapshot().unwrap(), r#"{"a":"1","b":"2"}"#);
    }
}
