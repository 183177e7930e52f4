use crate::core::{CompareError, CompareResult, OutputFormat};
use crate::services::{DefaultCompareConfig, SIGNIFICANT};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compare")]
#[command(about = "Compare two benchmark result tables and report significant slowdowns and speedups")]
#[command(version)]
pub struct Cli {
    /// Reference results (delimited text with `Name` and `Mean` columns)
    pub reference_file: PathBuf,

    /// Candidate results to compare against the reference
    pub results_file: PathBuf,

    /// Minimum relative change in mean time to report
    #[arg(short, long, default_value_t = SIGNIFICANT)]
    pub threshold: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Field delimiter of the input files
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Print loading and matching diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 引数から比較設定を構築し、検証する
    pub fn config(&self) -> CompareResult<DefaultCompareConfig> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                CompareError::configuration(
                    "delimiter",
                    format!("'{}' is not a single ASCII character", self.delimiter),
                )
            })?;

        let config = DefaultCompareConfig::default()
            .with_threshold(self.threshold)
            .with_delimiter(delimiter)
            .with_output_format(self.format);
        config.validate()?;
        Ok(config)
    }
}

/// コマンドライン引数を解析する
///
/// `--help` / `--version` は clap の既定動作どおり出力して終了する。
/// それ以外の解析失敗は `UsageError` として返す。
pub fn parse_args<I, T>(args: I) -> CompareResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => CompareError::usage(err.render().to_string()),
    })
}
