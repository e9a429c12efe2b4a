// ==========================================
// 教师任课分配引擎 - 专业名称解析器
// ==========================================
// 职责: 将自由文本的职称/专业写法归一为规范专业ID
// 输入: 原始标签 + 同义词词典 + 已有专业列表
// 输出: 已有专业ID / None（由调用方按原始写法新建专业）
// 红线: 解析只读词典；只有 resolve_or_create 会追加调用方的专业列表
// 红线: 幂等 —— 同一标签连续解析两次得到同一ID
// ==========================================

use crate::domain::specialization::Specialization;
use std::sync::OnceLock;

const DEFINITE_ARTICLE: &str = "ال";

/// 内置同义词词典: 规范专业名 → 常见写法
///
/// 词典条目按顺序匹配。
const BUNDLED_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "دين",
        &[
            "قران",
            "قرءان",
            "اسلاميه",
            "دراسات اسلاميه",
            "تربيه اسلاميه",
            "تفسير",
            "توحيد",
            "فقه",
            "حديث",
            "ثقافه اسلاميه",
        ],
    ),
    (
        "عربي",
        &["لغه عربيه", "لغتي", "لغتي الخالده", "نحو", "ادب", "بلاغه"],
    ),
    ("رياضيات", &["حساب", "رياضيات عامه", "math"]),
    ("علوم", &["العلوم", "ساينس", "science"]),
    ("انجليزي", &["لغه انجليزيه", "انجلش", "english"]),
    (
        "الاجتماعيات",
        &["دراسات اجتماعيه", "تاريخ", "جغرافيا", "مواطنه"],
    ),
    (
        "الحاسب",
        &["حاسب الي", "تقنيه معلومات", "رقميه", "مهارات رقميه", "it"],
    ),
    ("البدنية", &["رياضه", "تربيه بدنيه", "لياقه", "العاب"]),
    ("الفنية", &["رسم", "تربيه فنيه", "اشغال", "فنون"]),
    (
        "مهارات حياتية",
        &["اسريه", "تربيه اسريه", "مهارات حياتيه واسريه"],
    ),
];

/// 生成比较键
///
/// 去首尾空白、合并连续空白、统一 alif 变体 (أ إ آ → ا)、
/// ta marbuta → ha (ة → ه)、alif maksura → ya (ى → ي)、
/// 去掉开头的定冠词 "ال" 及第一个空格后的 "ال"、ASCII 小写。
/// 仅含定冠词的标签归一化为空串。
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| match c {
            'أ' | 'إ' | 'آ' => 'ا',
            'ة' => 'ه',
            'ى' => 'ي',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    let collapsed = mapped.split_whitespace().collect::<Vec<_>>().join(" ");
    let head = collapsed.strip_prefix(DEFINITE_ARTICLE).unwrap_or(&collapsed);

    let spaced_article = format!(" {}", DEFINITE_ARTICLE);
    let stripped = match head.find(&spaced_article) {
        Some(pos) => format!("{} {}", &head[..pos], &head[pos + spaced_article.len()..]),
        None => head.to_string(),
    };
    stripped.trim().to_string()
}

// ==========================================
// SynonymTable - 同义词词典（不可变）
// ==========================================
#[derive(Debug, Clone)]
pub struct SynonymEntry {
    canonical: String,
    canonical_key: String,
    synonym_keys: Vec<String>,
}

impl SynonymEntry {
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn canonical_key(&self) -> &str {
        &self.canonical_key
    }

    /// 比较键是否命中该条目（规范名本身或任一同义词）
    fn matches(&self, key: &str) -> bool {
        self.canonical_key == key || self.synonym_keys.iter().any(|s| s == key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    pub fn new<I, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<S>)>,
        C: Into<String>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (canonical, synonyms) in entries {
            table.push(canonical.into(), synonyms.iter().map(|s| s.as_ref()));
        }
        table
    }

    /// 内置词典（进程内只构建一次）
    pub fn bundled() -> &'static SynonymTable {
        static BUNDLED: OnceLock<SynonymTable> = OnceLock::new();
        BUNDLED.get_or_init(|| {
            let mut table = SynonymTable::default();
            for (canonical, synonyms) in BUNDLED_SYNONYMS {
                table.push(canonical.to_string(), synonyms.iter().copied());
            }
            table
        })
    }

    /// 在当前词典之后追加条目，返回新词典
    pub fn extended_with(&self, extra: &[(String, Vec<String>)]) -> SynonymTable {
        let mut table = self.clone();
        for (canonical, synonyms) in extra {
            table.push(canonical.clone(), synonyms.iter().map(String::as_str));
        }
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    fn push<'s>(&mut self, canonical: String, synonyms: impl Iterator<Item = &'s str>) {
        let canonical_key = normalize(&canonical);
        let synonym_keys = synonyms
            .map(normalize)
            .filter(|k| !k.is_empty())
            .collect();
        self.entries.push(SynonymEntry {
            canonical,
            canonical_key,
            synonym_keys,
        });
    }
}

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub specialization_id: String,
    pub created: bool, // true: 未命中，已按原始写法新建
}

// ==========================================
// SpecializationResolver
// ==========================================
pub struct SpecializationResolver<'a> {
    synonyms: &'a SynonymTable,
}

impl<'a> SpecializationResolver<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self { synonyms }
    }

    /// 解析原始标签
    ///
    /// 顺序:
    /// 1) 命中词典条目（规范名或同义词）且该规范专业已存在 → 其ID
    /// 2) 与已有专业名称比较键完全一致 → 其ID
    /// 3) None
    pub fn resolve(&self, raw_label: &str, known: &[Specialization]) -> Option<String> {
        let key = normalize(raw_label);
        if key.is_empty() {
            return None;
        }

        for entry in self.synonyms.entries.iter().filter(|e| e.matches(&key)) {
            if let Some(found) = known
                .iter()
                .find(|s| normalize(&s.name) == entry.canonical_key)
            {
                return Some(found.id.clone());
            }
        }

        known
            .iter()
            .find(|s| normalize(&s.name) == key)
            .map(|s| s.id.clone())
    }

    /// 解析，未命中时在 registry 中新建专业（名称保留去首尾空白后的原始写法）
    ///
    /// 空白标签返回 None，不新建。
    pub fn resolve_or_create(
        &self,
        raw_label: &str,
        registry: &mut Vec<Specialization>,
    ) -> Option<Resolution> {
        let label = raw_label.trim();
        if normalize(label).is_empty() {
            return None;
        }

        if let Some(id) = self.resolve(label, registry) {
            return Some(Resolution {
                specialization_id: id,
                created: false,
            });
        }

        let created = Specialization::with_generated_id(label);
        tracing::debug!(specialization_id = %created.id, name = %created.name, "新建专业");
        let id = created.id.clone();
        registry.push(created);
        Some(Resolution {
            specialization_id: id,
            created: true,
        })
    }
}
