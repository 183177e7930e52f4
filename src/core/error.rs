// Custom error types for benchmark comparison
// ベンチマーク比較専用のカスタムエラー型定義

use thiserror::Error;

/// 比較パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("usage error: {message}")]
    UsageError { message: String },

    #[error("parse error: {path} - {reason}")]
    ParseError { path: String, reason: String },

    #[error("join error: duplicate benchmark name '{name}' in {side} dataset")]
    JoinError { name: String, side: DatasetSide },

    #[error("configuration error: {field} - {reason}")]
    ConfigurationError { field: String, reason: String },

    #[error("render error: {source}")]
    RenderError {
        #[source]
        source: serde_json::Error,
    },
}

/// どちら側のデータセットかを示す
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSide {
    Reference,
    Result,
}

impl DatasetSide {
    /// 列名の衝突を解消するためのサフィックス
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Reference => "_ref",
            Self::Result => "_res",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Result => "result",
        }
    }
}

impl std::fmt::Display for DatasetSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CompareError {
    /// 使用方法エラーの作成
    pub fn usage(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    /// パースエラーの作成
    pub fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// 結合エラーの作成（名前の重複）
    pub fn duplicate_name(name: impl Into<String>, side: DatasetSide) -> Self {
        Self::JoinError {
            name: name.into(),
            side,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// プロセスの終了コードを取得
    ///
    /// 引数・設定の誤りは 2、入力データの問題は 1
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError { .. } | Self::ConfigurationError { .. } => 2,
            Self::ParseError { .. } | Self::JoinError { .. } | Self::RenderError { .. } => 1,
        }
    }

    /// エラー解決のための提案
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ParseError { .. } => {
                Some("check that the file exists and has 'Name' and 'Mean' columns")
            }
            Self::JoinError { .. } => Some("benchmark names must be unique within each input file"),
            Self::UsageError { .. }
            | Self::ConfigurationError { .. }
            | Self::RenderError { .. } => None,
        }
    }
}

/// 比較処理の結果型
pub type CompareResult<T> = std::result::Result<T, CompareError>;

impl From<serde_json::Error> for CompareError {
    fn from(error: serde_json::Error) -> Self {
        CompareError::RenderError { source: error }
    }
}
