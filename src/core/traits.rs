// 比較パイプラインのトレイト定義
// 差し替え可能な抽象化インターフェースを定義

use super::error::{CompareResult, DatasetSide};
use super::types::{Dataset, OutputFormat};
use mockall::automock;
use std::path::Path;

/// データセット読み込みの抽象化トレイト
#[automock]
pub trait DatasetLoader {
    /// パスからデータセットを読み込む
    fn load(&self, path: &Path, side: DatasetSide) -> CompareResult<Dataset>;
}

// DatasetLoader for Box<dyn DatasetLoader>
impl DatasetLoader for Box<dyn DatasetLoader> {
    fn load(&self, path: &Path, side: DatasetSide) -> CompareResult<Dataset> {
        self.as_ref().load(path, side)
    }
}

/// 比較処理の設定を抽象化するトレイト
#[automock]
pub trait CompareConfig {
    /// 有意とみなす相対変化量の閾値
    fn significance_threshold(&self) -> f64;

    /// 入力ファイルの区切り文字
    fn delimiter(&self) -> u8;

    /// レポートの出力形式
    fn output_format(&self) -> OutputFormat;
}

/// 進捗報告の抽象化トレイト
///
/// レポート本体は標準出力、診断情報はこのトレイト経由で出力する
#[automock]
pub trait ProgressReporter {
    /// データセット読み込み完了時の報告
    fn report_loaded(&self, side: DatasetSide, source: &str, records: usize);

    /// 結合完了時の報告
    fn report_joined(&self, rows: usize, matched: usize);

    /// 分類完了時の報告
    fn report_classified(&self, slower: usize, faster: usize);
}

// ProgressReporter for Box<dyn ProgressReporter>
impl ProgressReporter for Box<dyn ProgressReporter> {
    fn report_loaded(&self, side: DatasetSide, source: &str, records: usize) {
        self.as_ref().report_loaded(side, source, records)
    }

    fn report_joined(&self, rows: usize, matched: usize) {
        self.as_ref().report_joined(rows, matched)
    }

    fn report_classified(&self, slower: usize, faster: usize) {
        self.as_ref().report_classified(slower, faster)
    }
}
