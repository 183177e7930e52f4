// 有意な変化の分類

use crate::core::{Classification, JoinedTable};

/// 1行の変化の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    Slower,
    Faster,
    Insignificant,
}

impl Significance {
    /// `speedup_rel` と閾値から分類する。未定義の値は常に `Insignificant`
    pub fn of(speedup_rel: Option<f64>, threshold: f64) -> Self {
        match speedup_rel {
            Some(s) if s < -threshold => Self::Slower,
            Some(s) if s > threshold => Self::Faster,
            _ => Self::Insignificant,
        }
    }
}

/// 結合順を保ったまま SLOWER / FASTER に振り分ける
pub fn classify(table: &JoinedTable, threshold: f64) -> Classification {
    let mut slower = Vec::new();
    let mut faster = Vec::new();

    for row in &table.rows {
        match Significance::of(row.speedup_rel, threshold) {
            Significance::Slower => slower.push(row.clone()),
            Significance::Faster => faster.push(row.clone()),
            Significance::Insignificant => {}
        }
    }

    Classification {
        threshold,
        slower,
        faster,
    }
}
