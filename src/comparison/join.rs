// 名前をキーにした一対一の外部結合

use crate::core::{CompareError, CompareResult, Dataset, DatasetSide, JoinedRecord, JoinedTable};
use std::collections::{HashMap, HashSet};

/// 名前 → 行位置のマップを構築し、同時に一意性を検証する
fn index_by_name(dataset: &Dataset, side: DatasetSide) -> CompareResult<HashMap<&str, usize>> {
    let mut index = HashMap::with_capacity(dataset.len());
    for (i, record) in dataset.records.iter().enumerate() {
        if index.insert(record.name.as_str(), i).is_some() {
            return Err(CompareError::duplicate_name(&record.name, side));
        }
    }
    Ok(index)
}

/// 両側に存在する列名へサフィックスを付けた列名一覧を返す
fn disambiguate_columns(own: &[String], other: &[String], side: DatasetSide) -> Vec<String> {
    let other: HashSet<&str> = other.iter().map(String::as_str).collect();
    own.iter()
        .map(|column| {
            if other.contains(column.as_str()) {
                format!("{column}{}", side.suffix())
            } else {
                column.clone()
            }
        })
        .collect()
}

/// 参照データセットと結果データセットを `Name` で外部結合する
///
/// 行順は参照側の順序、その後に結果側にのみ存在する行を結果側の順序で追加する。
/// `speedup_rel` はここでは設定しない。
pub fn outer_join(reference: &Dataset, result: &Dataset) -> CompareResult<JoinedTable> {
    let ref_index = index_by_name(reference, DatasetSide::Reference)?;
    let res_index = index_by_name(result, DatasetSide::Result)?;

    let ref_columns = disambiguate_columns(
        &reference.extra_columns,
        &result.extra_columns,
        DatasetSide::Reference,
    );
    let res_columns = disambiguate_columns(
        &result.extra_columns,
        &reference.extra_columns,
        DatasetSide::Result,
    );
    let ref_width = ref_columns.len();
    let res_width = res_columns.len();

    let mut rows = Vec::with_capacity(reference.len() + result.len());

    for ref_record in &reference.records {
        let res_record = res_index
            .get(ref_record.name.as_str())
            .map(|&i| &result.records[i]);

        let mut extra = padded(&ref_record.extra, ref_width);
        match res_record {
            Some(res) => extra.extend(padded(&res.extra, res_width)),
            None => extra.resize(ref_width + res_width, None),
        }

        rows.push(JoinedRecord {
            name: ref_record.name.clone(),
            mean_ref: ref_record.mean,
            mean_res: res_record.and_then(|r| r.mean),
            speedup_rel: None,
            extra,
        });
    }

    for res_record in result
        .records
        .iter()
        .filter(|r| !ref_index.contains_key(r.name.as_str()))
    {
        let mut extra = vec![None; ref_width];
        extra.extend(padded(&res_record.extra, res_width));

        rows.push(JoinedRecord {
            name: res_record.name.clone(),
            mean_ref: None,
            mean_res: res_record.mean,
            speedup_rel: None,
            extra,
        });
    }

    let mut extra_columns = ref_columns;
    extra_columns.extend(res_columns);

    Ok(JoinedTable {
        extra_columns,
        rows,
    })
}

fn padded(values: &[Option<String>], width: usize) -> Vec<Option<String>> {
    let mut values = values.to_vec();
    values.resize(width, None);
    values
}
