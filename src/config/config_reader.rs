// ==========================================
// 教师任课分配引擎 - 配置读取 Trait
// ==========================================
// 职责: 定义引擎/导入所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;

// ==========================================
// AssignmentConfigReader Trait
// ==========================================
// 实现者: ConfigManager；测试中可替换为 MockConfig
pub trait AssignmentConfigReader: Send + Sync {
    // ===== 自动分配评分 =====

    /// 已在本班任课的加分
    ///
    /// # 默认值
    /// - 50.0
    fn get_class_affinity_bonus(&self) -> ConfigResult<f64>;

    /// 剩余课时比例的权重（(1 - 负载/上限) * 权重）
    ///
    /// # 默认值
    /// - 100.0
    fn get_headroom_weight(&self) -> ConfigResult<f64>;

    // ===== 资格判定 =====

    /// 通用兜底专业ID（无严格匹配时也可任教受限科目）
    ///
    /// # 默认值
    /// - ["1"]
    fn get_fallback_specialization_ids(&self) -> ConfigResult<Vec<String>>;

    /// 归档科目是否仍参与分配
    ///
    /// # 默认值
    /// - false
    fn get_include_archived_subjects(&self) -> ConfigResult<bool>;

    // ===== 名册导入 =====

    /// 导入教师的默认课时上限
    ///
    /// # 默认值
    /// - 24
    fn get_default_quota_limit(&self) -> ConfigResult<u32>;

    /// 教师姓名最少字符数（更短的行视为无效行跳过）
    ///
    /// # 默认值
    /// - 2
    fn get_min_teacher_name_chars(&self) -> ConfigResult<usize>;

    /// 附加同义词（规范专业名 → 同义写法），追加在内置词典之后
    ///
    /// # 默认值
    /// - 无
    fn get_extra_specialization_synonyms(&self) -> ConfigResult<Vec<(String, Vec<String>)>>;
}
