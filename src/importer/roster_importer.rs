// ==========================================
// 教师任课分配引擎 - 教师名册导入器
// ==========================================
// 职责: 整合导入流程，从名册文件生成教师记录
// 流程: 解析 → 表头识别 → 映射 → 清洗 → 专业解析（未命中则新建） → 生成教师
// ==========================================
// 红线: 本次导入中新建的专业对后续行立即可见（同名标签只建一次）
// 红线: 无效行跳过并记入报告，不中断导入
// ==========================================

use crate::config::{AssignmentConfigReader, ConfigResult};
use crate::domain::roster::SchoolRoster;
use crate::domain::specialization::Specialization;
use crate::domain::teacher::Teacher;
use crate::engine::specialization_resolver::{SpecializationResolver, SynonymTable};
use crate::importer::data_cleaner::DataCleaner as DataCleanerImpl;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::{RawTable, UniversalFileParser};
use crate::importer::roster_importer_trait::{DataCleaner, FieldMapper, FileParser};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// RosterImportConfig - 导入参数
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RosterImportConfig {
    pub default_quota_limit: u32,
    pub min_teacher_name_chars: usize,
    pub extra_synonyms: Vec<(String, Vec<String>)>,
}

impl Default for RosterImportConfig {
    fn default() -> Self {
        Self {
            default_quota_limit: 24,
            min_teacher_name_chars: 2,
            extra_synonyms: Vec::new(),
        }
    }
}

impl RosterImportConfig {
    pub fn from_reader<C>(reader: &C) -> ConfigResult<Self>
    where
        C: AssignmentConfigReader + ?Sized,
    {
        Ok(Self {
            default_quota_limit: reader.get_default_quota_limit()?,
            min_teacher_name_chars: reader.get_min_teacher_name_chars()?,
            extra_synonyms: reader.get_extra_specialization_synonyms()?,
        })
    }
}

// ==========================================
// 导入报告
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    NameMissing,
    NameTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: SkipReason,
    pub raw_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterImportReport {
    pub teachers: Vec<Teacher>,
    pub created_specializations: Vec<Specialization>,
    pub skipped_rows: Vec<SkippedRow>,
}

impl RosterImportReport {
    /// 合并到名册（教师追加在末尾）
    pub fn merge_into(&self, roster: &mut SchoolRoster) {
        for spec in &self.created_specializations {
            if roster.specialization(&spec.id).is_none() {
                roster.specializations.push(spec.clone());
            }
        }
        roster.teachers.extend(self.teachers.iter().cloned());
    }
}

// ==========================================
// RosterImporter - 名册导入器
// ==========================================
pub struct RosterImporter {
    config: RosterImportConfig,
    synonyms: SynonymTable,

    // 导入组件
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl RosterImporter {
    /// 以默认组件创建（内置词典 + 配置中的附加同义词）
    pub fn new(config: RosterImportConfig) -> Self {
        Self::with_components(
            config,
            Box::new(UniversalFileParser),
            Box::new(FieldMapperImpl),
            Box::new(DataCleanerImpl),
        )
    }

    pub fn with_components(
        config: RosterImportConfig,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
    ) -> Self {
        let synonyms = SynonymTable::bundled().extended_with(&config.extra_synonyms);
        Self {
            config,
            synonyms,
            file_parser,
            field_mapper,
            data_cleaner,
        }
    }

    /// 从文件导入
    ///
    /// # 参数
    /// - known: 当前已有专业（不修改；新建的专业在报告中返回）
    #[instrument(skip(self, file_path, known), fields(file_path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        known: &[Specialization],
    ) -> ImportResult<RosterImportReport> {
        let table = self.file_parser.parse_table(file_path.as_ref())?;
        Ok(self.import_table(&table, known))
    }

    /// 从已解析表格导入
    pub fn import_table(&self, table: &RawTable, known: &[Specialization]) -> RosterImportReport {
        let resolver = SpecializationResolver::new(&self.synonyms);
        let columns = self.field_mapper.detect_columns(&table.headers);
        let mut registry: Vec<Specialization> = known.to_vec();
        let mut report = RosterImportReport::default();

        for raw in &table.rows {
            let row = self
                .field_mapper
                .map_row(&columns, &raw.cells, raw.row_number);

            let name = match self.data_cleaner.normalize_null(row.name.clone()) {
                Some(name) => name,
                None => {
                    warn!(row_number = row.row_number, "姓名为空，跳过");
                    report.skipped_rows.push(SkippedRow {
                        row_number: row.row_number,
                        reason: SkipReason::NameMissing,
                        raw_name: None,
                    });
                    continue;
                }
            };
            if name.chars().count() < self.config.min_teacher_name_chars {
                warn!(row_number = row.row_number, name = %name, "姓名过短，跳过");
                report.skipped_rows.push(SkippedRow {
                    row_number: row.row_number,
                    reason: SkipReason::NameTooShort,
                    raw_name: Some(name),
                });
                continue;
            }

            let label = self
                .data_cleaner
                .normalize_null(row.specialization_label.clone());
            let specialization_id =
                match label.and_then(|l| resolver.resolve_or_create(&l, &mut registry)) {
                    Some(resolution) => {
                        if resolution.created {
                            if let Some(created) = registry.last() {
                                report.created_specializations.push(created.clone());
                            }
                        }
                        Some(resolution.specialization_id)
                    }
                    None => None,
                };

            report.teachers.push(Teacher {
                id: format!("t-{}", Uuid::new_v4().simple()),
                name,
                specialization_id,
                quota_limit: self
                    .data_cleaner
                    .parse_quota(row.quota.clone())
                    .unwrap_or(self.config.default_quota_limit),
                waiting_quota: None,
                phone: self.data_cleaner.clean_phone(row.phone.clone()),
            });
        }

        info!(
            imported = report.teachers.len(),
            created_specializations = report.created_specializations.len(),
            skipped = report.skipped_rows.len(),
            "名册导入完成"
        );
        report
    }
}

impl Default for RosterImporter {
    fn default() -> Self {
        Self::new(RosterImportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::file_parser::RawRow;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(idx, cells)| RawRow {
                    row_number: idx + 2,
                    cells: cells.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_import_resolves_and_creates_specializations() {
        let known = vec![Specialization::new("3", "الرياضيات")];
        let table = table(
            &["الاسم", "التخصص", "الجوال"],
            &[
                &["أحمد سالم", "رياضيات", "0500000001"],
                &["فهد ناصر", "فيزياء", ""],
                &["ماجد خالد", "الفيزياء", "0500000003"],
            ],
        );

        let report = RosterImporter::default().import_table(&table, &known);
        assert_eq!(report.teachers.len(), 3);
        assert_eq!(report.teachers[0].specialization_id.as_deref(), Some("3"));
        assert_eq!(report.created_specializations.len(), 1);
        assert_eq!(report.created_specializations[0].name, "فيزياء");
        assert_eq!(
            report.teachers[1].specialization_id,
            report.teachers[2].specialization_id
        );
        assert_eq!(report.teachers[1].phone, None);
        assert_eq!(report.teachers[0].quota_limit, 24);
    }

    #[test]
    fn test_import_skips_short_names() {
        let table = table(&["name", "spec"], &[&["A", "Math"], &["", "Math"], &["Ali", ""]]);

        let report = RosterImporter::default().import_table(&table, &[]);
        assert_eq!(report.teachers.len(), 1);
        assert_eq!(report.teachers[0].specialization_id, None);
        assert_eq!(report.skipped_rows.len(), 2);
        assert_eq!(report.skipped_rows[0].reason, SkipReason::NameTooShort);
        assert_eq!(report.skipped_rows[1].reason, SkipReason::NameMissing);
        assert_eq!(report.skipped_rows[1].row_number, 3);
    }

    #[test]
    fn test_quota_column_and_default() {
        let config = RosterImportConfig {
            default_quota_limit: 18,
            ..RosterImportConfig::default()
        };
        let table = table(&["الاسم", "نصاب الحصص"], &[&["سعد", "20"], &["نايف", "غير محدد"]]);

        let report = RosterImporter::new(config).import_table(&table, &[]);
        assert_eq!(report.teachers[0].quota_limit, 20);
        assert_eq!(report.teachers[1].quota_limit, 18);
    }

    #[test]
    fn test_merge_into_roster() {
        let table = table(&["الاسم", "التخصص"], &[&["وليد", "كيمياء"]]);
        let report = RosterImporter::default().import_table(&table, &[]);

        let mut roster = SchoolRoster::default();
        report.merge_into(&mut roster);
        assert_eq!(roster.teachers.len(), 1);
        assert_eq!(roster.specializations.len(), 1);
        assert_eq!(roster.teachers_with_specialization(&roster.specializations[0].id), 1);
    }
}
