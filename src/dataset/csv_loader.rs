use crate::core::{BenchmarkRecord, CompareError, CompareResult, Dataset, DatasetLoader, DatasetSide};
use crate::services::DEFAULT_DELIMITER;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

use super::{is_missing_value, MEAN_COLUMN, NAME_COLUMN};

/// 区切りテキスト（CSV）のデータセットローダー実装
#[derive(Clone, Debug)]
pub struct CsvDatasetLoader {
    delimiter: u8,
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvDatasetLoader {
    /// カンマ区切りのローダーを作成
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// 区切り文字を指定してローダーを作成
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    fn builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            // ヘッダーは自前で検証する
            .has_headers(false)
            // 列数の不一致は行番号付きで報告する
            .flexible(true);
        builder
    }

    /// 任意のリーダーからデータセットを読み込む
    pub fn load_from_reader<R: Read>(&self, reader: R, source: &str) -> CompareResult<Dataset> {
        let csv_reader = self.builder().from_reader(reader);
        read_dataset(csv_reader, source)
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load(&self, path: &Path, _side: DatasetSide) -> CompareResult<Dataset> {
        let source = path.display().to_string();
        // ファイルハンドルはリーダーが所有し、どの経路でも drop 時に閉じられる
        let csv_reader = self
            .builder()
            .from_path(path)
            .map_err(|e| map_csv_error(&source, e))?;
        read_dataset(csv_reader, &source)
    }
}

/// ヘッダー行から必要な列の位置を解決した結果
struct HeaderLayout {
    width: usize,
    name_index: usize,
    mean_index: usize,
    /// (列位置, 列名)
    extra: Vec<(usize, String)>,
}

impl HeaderLayout {
    fn resolve(header: &StringRecord, source: &str) -> CompareResult<Self> {
        let names: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CompareError::parse(
                    source,
                    format!("duplicate column '{name}' in header"),
                ));
            }
        }

        let find = |column: &str| {
            names.iter().position(|n| n == column).ok_or_else(|| {
                CompareError::parse(source, format!("missing required column '{column}'"))
            })
        };
        let name_index = find(NAME_COLUMN)?;
        let mean_index = find(MEAN_COLUMN)?;

        let extra = names
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_index && *i != mean_index)
            .map(|(i, n)| (i, n.clone()))
            .collect();

        Ok(Self {
            width: names.len(),
            name_index,
            mean_index,
            extra,
        })
    }
}

fn read_dataset<R: Read>(mut csv_reader: csv::Reader<R>, source: &str) -> CompareResult<Dataset> {
    let mut record = StringRecord::new();

    let has_header = csv_reader
        .read_record(&mut record)
        .map_err(|e| map_csv_error(source, e))?;
    if !has_header {
        return Err(CompareError::parse(source, "input is empty (missing header row)"));
    }
    let layout = HeaderLayout::resolve(&record, source)?;

    let mut dataset = Dataset::new(source);
    dataset.extra_columns = layout.extra.iter().map(|(_, n)| n.clone()).collect();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                dataset.records.push(parse_row(&record, &layout, line, source)?);
            }
            Err(e) => return Err(map_csv_error(source, e)),
        }
    }

    Ok(dataset)
}

fn parse_row(
    record: &StringRecord,
    layout: &HeaderLayout,
    line: u64,
    source: &str,
) -> CompareResult<BenchmarkRecord> {
    if record.len() != layout.width {
        return Err(CompareError::parse(
            source,
            format!(
                "line {line}: expected {} fields, found {}",
                layout.width,
                record.len()
            ),
        ));
    }

    let name = record.get(layout.name_index).unwrap_or_default();
    if name.trim().is_empty() {
        return Err(CompareError::parse(
            source,
            format!("line {line}: empty '{NAME_COLUMN}' value"),
        ));
    }

    let raw_mean = record.get(layout.mean_index).unwrap_or_default().trim();
    let mean = if is_missing_value(raw_mean) {
        None
    } else {
        let value = raw_mean.parse::<f64>().map_err(|_| {
            CompareError::parse(
                source,
                format!("line {line}: '{MEAN_COLUMN}' value '{raw_mean}' is not a number"),
            )
        })?;
        Some(value)
    };

    let extra = layout
        .extra
        .iter()
        .map(|(i, _)| {
            record
                .get(*i)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
        .collect();

    Ok(BenchmarkRecord::new(name, mean).with_extra(extra))
}

fn map_csv_error(source: &str, err: csv::Error) -> CompareError {
    let reason = err.to_string();
    match err.kind() {
        csv::ErrorKind::Io(e) => CompareError::parse(source, format!("cannot read file: {e}")),
        _ => CompareError::parse(source, format!("malformed input: {reason}")),
    }
}
