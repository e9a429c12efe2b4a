// ==========================================
// 教师任课分配引擎 - 配置层
// ==========================================
// 职责: 系统配置管理，支持文件加载与运行时覆写
// ==========================================

pub mod config_manager;
pub mod config_reader;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use config_reader::AssignmentConfigReader;
pub use error::{ConfigError, ConfigResult};
