// ==========================================
// 教师任课分配引擎 - 导入层
// ==========================================
// 职责: 教师名册导入，生成教师记录与新建专业
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod roster_importer;
pub mod roster_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper as FieldMapperImpl, RawTeacherRow, RosterColumns};
pub use file_parser::{CsvParser, ExcelParser, RawRow, RawTable, UniversalFileParser};
pub use roster_importer::{
    RosterImportConfig, RosterImportReport, RosterImporter, SkipReason, SkippedRow,
};

// 重导出 Trait 接口
pub use roster_importer_trait::{DataCleaner, FieldMapper, FileParser};
