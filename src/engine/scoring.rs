// ==========================================
// 教师任课分配引擎 - 候选教师评分
// ==========================================
// 评分 = 本班已任课加分 + (1 - 当前负载/上限) * 剩余比例权重
// 选择: 最高分胜出；同分取输入顺序靠前者
// 两项权重为经验值，可配置
// ==========================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLASS_AFFINITY_BONUS: f64 = 50.0;
pub const DEFAULT_HEADROOM_WEIGHT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub class_affinity_bonus: f64,
    pub headroom_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            class_affinity_bonus: DEFAULT_CLASS_AFFINITY_BONUS,
            headroom_weight: DEFAULT_HEADROOM_WEIGHT,
        }
    }
}

impl ScoringWeights {
    /// 计算候选分数
    ///
    /// 上限为 0 时剩余比例项记 0
    pub fn score(&self, teaches_class: bool, running_load: u32, quota_limit: u32) -> f64 {
        let affinity = if teaches_class {
            self.class_affinity_bonus
        } else {
            0.0
        };
        let headroom = if quota_limit == 0 {
            0.0
        } else {
            (1.0 - running_load as f64 / quota_limit as f64) * self.headroom_weight
        };
        affinity + headroom
    }
}

/// 选出最高分候选的下标；只有严格更高才替换，保证同分时先到先得
pub fn pick_best<T>(scored: &[(T, f64)]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, (_, score)) in scored.iter().enumerate() {
        match best {
            Some((_, best_score)) if *score <= best_score => {}
            _ => best = Some((idx, *score)),
        }
    }
    best.map(|(idx, _)| idx)
}
