// ==========================================
// 教师任课分配引擎 - 数据清洗器实现
// ==========================================
// 职责: TRIM / 空白合并 / NULL 标准化 / 电话与课时规范化
// ==========================================

use crate::importer::roster_importer_trait::DataCleaner as DataCleanerTrait;

const NULL_MARKERS: &[&str] = &["-", "--", "null", "none", "n/a", "na"];

pub struct DataCleaner;

impl DataCleaner {
    /// 阿拉伯-印度数字 / 波斯数字 → ASCII
    fn ascii_digits(value: &str) -> String {
        value
            .chars()
            .map(|c| match c {
                '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
                '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
                _ => c,
            })
            .collect()
    }
}

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: &str) -> String {
        value.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let cleaned = self.clean_text(&v);
            if cleaned.is_empty() || NULL_MARKERS.contains(&cleaned.to_lowercase().as_str()) {
                None
            } else {
                Some(cleaned)
            }
        })
    }

    fn clean_phone(&self, value: Option<String>) -> Option<String> {
        self.normalize_null(value).and_then(|v| {
            let ascii = Self::ascii_digits(&v);
            let mut phone = String::with_capacity(ascii.len());
            for (idx, c) in ascii.chars().filter(|c| !c.is_whitespace()).enumerate() {
                if c.is_ascii_digit() || (idx == 0 && c == '+') {
                    phone.push(c);
                }
            }
            if phone.chars().any(|c| c.is_ascii_digit()) {
                Some(phone)
            } else {
                None
            }
        })
    }

    fn parse_quota(&self, value: Option<String>) -> Option<u32> {
        let raw = self.normalize_null(value)?;
        let parsed: f64 = Self::ascii_digits(&raw).parse().ok()?;
        if parsed.is_finite() && parsed >= 1.0 && parsed <= u32::MAX as f64 {
            Some(parsed.round() as u32)
        } else {
            None
        }
    }
}
