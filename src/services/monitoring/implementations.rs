// 進捗監視の具象実装

use crate::core::{DatasetSide, ProgressReporter};

/// 標準エラー出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter;

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report_loaded(&self, side: DatasetSide, source: &str, records: usize) {
        eprintln!("loaded {records} {side} benchmarks from {source}");
    }

    fn report_joined(&self, rows: usize, matched: usize) {
        eprintln!("joined {rows} benchmarks ({matched} present in both runs)");
    }

    fn report_classified(&self, slower: usize, faster: usize) {
        eprintln!("significant changes: {slower} slower, {faster} faster");
    }
}

/// 何もしない進捗報告実装（デフォルト・テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NoOpProgressReporter {
    fn report_loaded(&self, _side: DatasetSide, _source: &str, _records: usize) {
        // 何もしない
    }

    fn report_joined(&self, _rows: usize, _matched: usize) {
        // 何もしない
    }

    fn report_classified(&self, _slower: usize, _faster: usize) {
        // 何もしない
    }
}
