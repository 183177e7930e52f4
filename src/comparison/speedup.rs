// 相対速度変化の算出

use crate::core::JoinedTable;

/// `(mean_ref - mean_res) / mean_ref` を計算する
///
/// 正なら結果側が速く、負なら遅い。どちらかの値が欠けている場合、
/// 参照側が 0 の場合、計算結果が有限でない場合は `None`。
pub fn relative_speedup(mean_ref: Option<f64>, mean_res: Option<f64>) -> Option<f64> {
    let (mean_ref, mean_res) = (mean_ref?, mean_res?);
    if mean_ref == 0.0 {
        return None;
    }
    let speedup = (mean_ref - mean_res) / mean_ref;
    speedup.is_finite().then_some(speedup)
}

/// 結合済みテーブルの全行に `speedup_rel` を設定する
pub fn derive_speedups(table: &mut JoinedTable) {
    for row in &mut table.rows {
        row.speedup_rel = relative_speedup(row.mean_ref, row.mean_res);
    }
}
