// プレーンテキストのテーブル出力

use crate::core::{ComparisonReport, JoinedRecord};

/// 出力する列
pub const REPORT_COLUMNS: [&str; 4] = ["Name", "Mean_ref", "Mean_res", "Speedup_rel"];

/// 指数表記に切り替える絶対値の範囲（この範囲外かつ 0 以外は指数表記）
const FIXED_RANGE: std::ops::Range<f64> = 1e-4..1e16;

/// 数値を整形する
///
/// 通常は最大6桁の小数（末尾の0は除去、小数点以下は最低1桁）。
/// 0 以外で `FIXED_RANGE` を外れる値は `2.1e-08` のような指数表記にする。
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "NaN".to_string();
    };
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value != 0.0 && !FIXED_RANGE.contains(&value.abs()) {
        return format_scientific(value);
    }

    let text = trim_fraction(format!("{value:.6}"));
    if text == "-0.0" {
        return "0.0".to_string();
    }
    text
}

fn format_scientific(value: f64) -> String {
    let text = format!("{value:.6e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}e{sign}{:02}",
        trim_fraction(mantissa.to_string()),
        exponent.unsigned_abs()
    )
}

fn trim_fraction(mut text: String) -> String {
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    text
}

fn row_cells(row: &JoinedRecord) -> [String; 4] {
    [
        row.name.clone(),
        format_number(row.mean_ref),
        format_number(row.mean_res),
        format_number(row.speedup_rel),
    ]
}

/// 行のリストを右寄せのテーブルに整形する（行番号なし）
///
/// 行がない場合はヘッダー行のみを出力する。
pub fn render_rows(rows: &[JoinedRecord]) -> String {
    let cells: Vec<[String; 4]> = rows.iter().map(row_cells).collect();

    let mut widths = REPORT_COLUMNS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &REPORT_COLUMNS.map(str::to_string), &widths);
    for row in &cells {
        out.push('\n');
        write_line(&mut out, row, &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{cell:>width$}"));
    }
}

/// SLOWER / FASTER の2ブロックを空行で区切って出力する
pub fn render_text(report: &ComparisonReport) -> String {
    let classification = &report.classification;
    format!(
        "SLOWER\n{}\n\nFASTER\n{}\n",
        render_rows(&classification.slower),
        render_rows(&classification.faster)
    )
}
