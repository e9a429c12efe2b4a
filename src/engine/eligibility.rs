// ==========================================
// 教师任课分配引擎 - 任教资格判定
// ==========================================
// 规则:
// 1) 严格匹配: 教师专业在科目 specialization_ids 中
// 2) 兜底匹配: 教师专业属于通用兜底专业，或科目未限定专业
// 3) 只要存在严格匹配，候选集收窄为严格匹配者
// 课时校验不在此处，由分配器结合运行中负载完成
// ==========================================

use crate::domain::subject::Subject;
use crate::domain::teacher::Teacher;
use crate::domain::types::SpecializationMatch;

#[derive(Debug, Clone, Default)]
pub struct EligibilityFilter {
    fallback_specialization_ids: Vec<String>,
}

impl EligibilityFilter {
    pub fn new(fallback_specialization_ids: Vec<String>) -> Self {
        Self {
            fallback_specialization_ids,
        }
    }

    /// 判定单个教师对科目的匹配方式；None 表示无资格
    pub fn classify(&self, subject: &Subject, teacher: &Teacher) -> Option<SpecializationMatch> {
        let specialization = teacher.specialization_id.as_deref();

        if let Some(spec) = specialization {
            if subject.lists_specialization(spec) {
                return Some(SpecializationMatch::Strict);
            }
        }
        if subject.is_open() {
            return Some(SpecializationMatch::Open);
        }
        match specialization {
            Some(spec) if self.fallback_specialization_ids.iter().any(|id| id == spec) => {
                Some(SpecializationMatch::Fallback)
            }
            _ => None,
        }
    }

    /// 有资格任教该科目的教师（保持输入顺序）
    pub fn qualified<'t>(&self, subject: &Subject, teachers: &'t [Teacher]) -> Vec<&'t Teacher> {
        let matched: Vec<(&'t Teacher, SpecializationMatch)> = teachers
            .iter()
            .filter_map(|t| self.classify(subject, t).map(|m| (t, m)))
            .collect();

        let has_strict = matched.iter().any(|(_, m)| m.is_strict());
        matched
            .into_iter()
            .filter(|(_, m)| !has_strict || m.is_strict())
            .map(|(t, _)| t)
            .collect()
    }
}
