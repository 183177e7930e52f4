// 設定管理の具象実装

use crate::core::{CompareConfig, CompareError, CompareResult, OutputFormat};

/// 有意差とみなす相対変化量のデフォルト値
pub const SIGNIFICANT: f64 = 0.2;

/// 入力ファイルのデフォルト区切り文字
pub const DEFAULT_DELIMITER: u8 = b',';

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultCompareConfig {
    threshold: f64,
    delimiter: u8,
    format: OutputFormat,
}

impl DefaultCompareConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// 設定値の妥当性を検証
    pub fn validate(&self) -> CompareResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(CompareError::configuration(
                "threshold",
                format!("must be a finite, non-negative number (got {})", self.threshold),
            ));
        }
        if !self.delimiter.is_ascii() || self.delimiter == b'"' || self.delimiter == b'\n' {
            return Err(CompareError::configuration(
                "delimiter",
                format!("unsupported delimiter byte 0x{:02x}", self.delimiter),
            ));
        }
        Ok(())
    }
}

impl Default for DefaultCompareConfig {
    fn default() -> Self {
        Self {
            threshold: SIGNIFICANT,
            delimiter: DEFAULT_DELIMITER,
            format: OutputFormat::Text,
        }
    }
}

impl CompareConfig for DefaultCompareConfig {
    fn significance_threshold(&self) -> f64 {
        self.threshold
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
