// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================
#![allow(dead_code)]

use school_assign::config::{AssignmentConfigReader, ConfigResult};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub class_affinity_bonus: f64,
    pub headroom_weight: f64,
    pub fallback_specialization_ids: Vec<String>,
    pub include_archived_subjects: bool,
    pub default_quota_limit: u32,
    pub min_teacher_name_chars: usize,
    pub extra_synonyms: Vec<(String, Vec<String>)>,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            class_affinity_bonus: 50.0,
            headroom_weight: 100.0,
            fallback_specialization_ids: vec!["1".to_string()],
            include_archived_subjects: false,
            default_quota_limit: 24,
            min_teacher_name_chars: 2,
            extra_synonyms: Vec::new(),
        }
    }

    /// 只按剩余课时评分
    pub fn headroom_only() -> Self {
        let mut config = Self::default();
        config.class_affinity_bonus = 0.0;
        config
    }

    /// 关闭兜底专业
    pub fn without_fallback() -> Self {
        let mut config = Self::default();
        config.fallback_specialization_ids.clear();
        config
    }

    pub fn with_synonyms(canonical: &str, synonyms: &[&str]) -> Self {
        let mut config = Self::default();
        config.extra_synonyms = vec![(
            canonical.to_string(),
            synonyms.iter().map(|s| s.to_string()).collect(),
        )];
        config
    }
}

impl AssignmentConfigReader for MockConfig {
    fn get_class_affinity_bonus(&self) -> ConfigResult<f64> {
        Ok(self.class_affinity_bonus)
    }

    fn get_headroom_weight(&self) -> ConfigResult<f64> {
        Ok(self.headroom_weight)
    }

    fn get_fallback_specialization_ids(&self) -> ConfigResult<Vec<String>> {
        Ok(self.fallback_specialization_ids.clone())
    }

    fn get_include_archived_subjects(&self) -> ConfigResult<bool> {
        Ok(self.include_archived_subjects)
    }

    fn get_default_quota_limit(&self) -> ConfigResult<u32> {
        Ok(self.default_quota_limit)
    }

    fn get_min_teacher_name_chars(&self) -> ConfigResult<usize> {
        Ok(self.min_teacher_name_chars)
    }

    fn get_extra_specialization_synonyms(&self) -> ConfigResult<Vec<(String, Vec<String>)>> {
        Ok(self.extra_synonyms.clone())
    }
}
