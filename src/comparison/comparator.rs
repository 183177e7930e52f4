use super::{classify::classify, join::outer_join, speedup::derive_speedups};
use crate::core::{
    CompareConfig, CompareResult, ComparisonReport, Dataset, DatasetLoader, DatasetSide,
    ProgressReporter,
};
use std::path::Path;

/// 比較パイプライン本体
///
/// 読み込み → 結合 → 速度変化算出 → 分類 を1回の呼び出しで実行する。
/// 依存関係はコンストラクタで注入する。
pub struct Comparator<L, C, R>
where
    L: DatasetLoader,
    C: CompareConfig,
    R: ProgressReporter,
{
    loader: L,
    config: C,
    reporter: R,
}

impl<L, C, R> Comparator<L, C, R>
where
    L: DatasetLoader,
    C: CompareConfig,
    R: ProgressReporter,
{
    pub fn new(loader: L, config: C, reporter: R) -> Self {
        Self {
            loader,
            config,
            reporter,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 2つのファイルを読み込んで比較する
    pub fn compare_files(
        &self,
        reference_path: &Path,
        result_path: &Path,
    ) -> CompareResult<ComparisonReport> {
        let reference = self.load(reference_path, DatasetSide::Reference)?;
        let result = self.load(result_path, DatasetSide::Result)?;
        self.compare_datasets(&reference, &result)
    }

    /// 読み込み済みのデータセットを比較する
    pub fn compare_datasets(
        &self,
        reference: &Dataset,
        result: &Dataset,
    ) -> CompareResult<ComparisonReport> {
        let mut table = outer_join(reference, result)?;
        derive_speedups(&mut table);
        self.reporter
            .report_joined(table.rows.len(), table.matched_count());

        let classification = classify(&table, self.config.significance_threshold());
        self.reporter.report_classified(
            classification.slower.len(),
            classification.faster.len(),
        );

        Ok(ComparisonReport {
            table,
            classification,
        })
    }

    fn load(&self, path: &Path, side: DatasetSide) -> CompareResult<Dataset> {
        let dataset = self.loader.load(path, side)?;
        self.reporter.report_loaded(side, &dataset.source, dataset.len());
        Ok(dataset)
    }
}
