pub mod cli;
pub mod comparison;
pub mod core;
pub mod dataset;
pub mod report;
pub mod services;

use crate::comparison::Comparator;
use crate::core::{CompareResult, ComparisonReport, Dataset};
use crate::dataset::CsvDatasetLoader;
use crate::services::{DefaultCompareConfig, NoOpProgressReporter};
use std::path::Path;

/// デフォルト設定（CSV・閾値 0.2・診断出力なし）で2つのファイルを比較する
pub fn compare_files(reference: &Path, result: &Path) -> CompareResult<ComparisonReport> {
    let comparator = Comparator::new(
        CsvDatasetLoader::new(),
        DefaultCompareConfig::default(),
        NoOpProgressReporter::new(),
    );
    comparator.compare_files(reference, result)
}

/// 読み込み済みのデータセットをデフォルト設定で比較する
pub fn compare_datasets(
    reference: &Dataset,
    result: &Dataset,
) -> CompareResult<ComparisonReport> {
    let comparator = Comparator::new(
        CsvDatasetLoader::new(),
        DefaultCompareConfig::default(),
        NoOpProgressReporter::new(),
    );
    comparator.compare_datasets(reference, result)
}
