// ==========================================
// 教师任课分配引擎 - 字段映射器实现
// ==========================================
// 职责: 表头识别（子串匹配）+ 按列取出原始字段
// 规则: 表头转小写后按关键词子串匹配；同一字段多列命中时取最后一列
// 规则: 未识别到姓名列时使用第 0 列
// ==========================================

use crate::importer::roster_importer_trait::FieldMapper as FieldMapperTrait;

const NAME_NEEDLES: &[&str] = &["اسم", "معلم", "name"];
const SPECIALIZATION_NEEDLES: &[&str] = &["تخصص", "spec", "مادة"];
const PHONE_NEEDLES: &[&str] = &["جوال", "هاتف", "رقم", "phone", "mobile"];
const QUOTA_NEEDLES: &[&str] = &["نصاب", "quota"];

/// 各字段所在列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterColumns {
    pub name: usize,
    pub specialization: Option<usize>,
    pub phone: Option<usize>,
    pub quota: Option<usize>,
}

/// 一行的原始字段（未清洗）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTeacherRow {
    pub row_number: usize,
    pub name: Option<String>,
    pub specialization_label: Option<String>,
    pub phone: Option<String>,
    pub quota: Option<String>,
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn detect_columns(&self, headers: &[String]) -> RosterColumns {
        let mut columns = RosterColumns {
            name: 0,
            specialization: None,
            phone: None,
            quota: None,
        };
        let mut name = None;

        for (idx, header) in headers.iter().enumerate() {
            let lowered = header.to_lowercase();
            if lowered.is_empty() {
                continue;
            }
            let hit = |needles: &[&str]| needles.iter().any(|n| lowered.contains(n));

            if hit(NAME_NEEDLES) {
                name = Some(idx);
            }
            if hit(SPECIALIZATION_NEEDLES) {
                columns.specialization = Some(idx);
            }
            if hit(PHONE_NEEDLES) {
                columns.phone = Some(idx);
            }
            if hit(QUOTA_NEEDLES) {
                columns.quota = Some(idx);
            }
        }

        columns.name = name.unwrap_or(0);
        columns
    }

    fn map_row(&self, columns: &RosterColumns, row: &[String], row_number: usize) -> RawTeacherRow {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).cloned();
        RawTeacherRow {
            row_number,
            name: cell(Some(columns.name)),
            specialization_label: cell(columns.specialization),
            phone: cell(columns.phone),
            quota: cell(columns.quota),
        }
    }
}
