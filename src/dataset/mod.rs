// データセット読み込み層
// 区切りテキストから `Dataset` を構築する

pub mod csv_loader;

pub use csv_loader::CsvDatasetLoader;

/// ベンチマーク名の列
pub const NAME_COLUMN: &str = "Name";

/// 平均実行時間の列
pub const MEAN_COLUMN: &str = "Mean";

/// 欠損値として扱うセル表記
const MISSING_VALUES: &[&str] = &["", "NaN", "nan", "NA", "N/A", "null"];

/// セルが欠損値かどうかを判定（前後の空白は除去済みであること）
pub fn is_missing_value(cell: &str) -> bool {
    MISSING_VALUES.contains(&cell)
}
