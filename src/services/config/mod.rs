// 比較処理の設定管理
// 閾値・区切り文字・出力形式

pub mod implementations;

// 公開API
pub use implementations::{DefaultCompareConfig, DEFAULT_DELIMITER, SIGNIFICANT};
