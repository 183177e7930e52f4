// 比較処理に関連するデータ型定義

/// データセット中の1ベンチマーク
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub name: String,
    /// 平均実行時間（空セルは None）
    pub mean: Option<f64>,
    /// `Name`・`Mean` 以外の列。`Dataset::extra_columns` と同じ並び
    pub extra: Vec<Option<String>>,
}

impl BenchmarkRecord {
    pub fn new(name: impl Into<String>, mean: Option<f64>) -> Self {
        Self {
            name: name.into(),
            mean,
            extra: Vec::new(),
        }
    }

    pub fn with_extra(mut self, extra: Vec<Option<String>>) -> Self {
        self.extra = extra;
        self
    }
}

/// 区切りテキストから読み込んだベンチマークの並び
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    /// 読み込み元（通常はファイルパス）
    pub source: String,
    pub extra_columns: Vec<String>,
    pub records: Vec<BenchmarkRecord>,
}

impl Dataset {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// 名前と平均値のペアから追加列なしのデータセットを作成
    pub fn from_means<'a>(
        source: impl Into<String>,
        means: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Self {
        Self {
            source: source.into(),
            extra_columns: Vec::new(),
            records: means
                .into_iter()
                .map(|(name, mean)| BenchmarkRecord::new(name, Some(mean)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 外部結合の1行
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub name: String,
    pub mean_ref: Option<f64>,
    pub mean_res: Option<f64>,
    pub speedup_rel: Option<f64>,
    pub extra: Vec<Option<String>>,
}

impl JoinedRecord {
    /// 両側に存在したかどうか
    pub fn is_matched(&self) -> bool {
        self.mean_ref.is_some() && self.mean_res.is_some()
    }
}

/// 結合結果のテーブル
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinedTable {
    /// サフィックス付与済みの追加列名
    pub extra_columns: Vec<String>,
    pub rows: Vec<JoinedRecord>,
}

impl JoinedTable {
    pub fn matched_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_matched()).count()
    }
}

/// 有意差のあった行の分類結果
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub threshold: f64,
    pub slower: Vec<JoinedRecord>,
    pub faster: Vec<JoinedRecord>,
}

/// レポートの出力形式
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 整形済みテキストテーブル
    #[default]
    Text,
    /// JSON
    Json,
}

/// 比較全体の結果
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub table: JoinedTable,
    pub classification: Classification,
}
