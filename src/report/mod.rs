// レポート出力層
// 比較結果を出力形式に応じた文字列へ変換する

pub mod json;
pub mod table;

pub use json::render_json;
pub use table::{format_number, render_rows, render_text, REPORT_COLUMNS};

use crate::core::{CompareResult, ComparisonReport, OutputFormat};

/// 出力形式に応じてレポート全体を描画する
///
/// 途中で失敗した場合に部分的な出力が残らないよう、全体を文字列として返す。
pub fn render(report: &ComparisonReport, format: OutputFormat) -> CompareResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}
