// ==========================================
// 教师任课分配引擎 - 名册导入 Trait
// ==========================================
// 职责: 定义名册导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 表头识别/字段映射 → 清洗 → 专业解析 → 生成教师
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{RawTeacherRow, RosterColumns};
use crate::importer::file_parser::RawTable;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 读取首个工作表/整个 CSV 为 表头 + 数据行
    ///
    /// 完全空白的数据行在此阶段丢弃
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 根据表头识别各字段所在列
    fn detect_columns(&self, headers: &[String]) -> RosterColumns;

    /// 按识别结果取出一行的原始字段
    ///
    /// # 参数
    /// - row_number: 文件中的行号（表头为第 1 行）
    fn map_row(&self, columns: &RosterColumns, row: &[String], row_number: usize) -> RawTeacherRow;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 去首尾空白并合并内部连续空白
    fn clean_text(&self, value: &str) -> String;

    /// 空串 / 占位符 → None
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 电话号码: 阿拉伯-印度数字转 ASCII，仅保留数字与前导 +
    fn clean_phone(&self, value: Option<String>) -> Option<String>;

    /// 课时上限: 非数字或非正数 → None（由调用方取默认值）
    fn parse_quota(&self, value: Option<String>) -> Option<u32>;
}
