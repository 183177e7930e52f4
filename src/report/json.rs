// JSON 形式のレポート出力

use crate::core::{CompareResult, ComparisonReport, JoinedRecord, JoinedTable};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    name: &'a str,
    mean_ref: Option<f64>,
    mean_res: Option<f64>,
    speedup_rel: Option<f64>,
    /// 結合で引き継いだ追加列（サフィックス付与済み）
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    columns: BTreeMap<&'a str, Option<&'a str>>,
}

impl<'a> JsonRow<'a> {
    fn new(table: &'a JoinedTable, row: &'a JoinedRecord) -> Self {
        let columns = table
            .extra_columns
            .iter()
            .zip(&row.extra)
            .map(|(column, value)| (column.as_str(), value.as_deref()))
            .collect();
        Self {
            name: &row.name,
            mean_ref: row.mean_ref,
            mean_res: row.mean_res,
            speedup_rel: row.speedup_rel,
            columns,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    threshold: f64,
    slower: Vec<JsonRow<'a>>,
    faster: Vec<JsonRow<'a>>,
}

fn json_rows<'a>(table: &'a JoinedTable, records: &'a [JoinedRecord]) -> Vec<JsonRow<'a>> {
    records.iter().map(|row| JsonRow::new(table, row)).collect()
}

/// SLOWER / FASTER を JSON オブジェクトとして出力する
pub fn render_json(report: &ComparisonReport) -> CompareResult<String> {
    let document = JsonReport {
        threshold: report.classification.threshold,
        slower: json_rows(&report.table, &report.classification.slower),
        faster: json_rows(&report.table, &report.classification.faster),
    };

    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}
