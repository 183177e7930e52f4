// 進捗監視機能
// 読み込み・結合・分類の各段階を標準エラー出力へ報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
