// src/args.rs
use crate::options::{OutputFormat, ReportKind};
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sales_summary", version, about = "SRI 売上データ (区切りファイル) の集計ツール")]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 対象ファイル
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub file: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// 区切り文字 (1文字, または tab)
    #[arg(long, short = 'd', default_value = "|", value_parser = parsers::parse_delimiter, help_heading = "入力")]
    pub delimiter: u8,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// レポート (複数可, 例: totals,exports)
    #[arg(long, value_enum, value_delimiter = ',', default_value = "all", help_heading = "出力")]
    pub report: Vec<ReportKind>,

    /// 売上合計を照会する県 (--report region で必須)
    #[arg(long, help_heading = "出力")]
    pub region: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 詳細ログ (debug)
    #[arg(long, short = 'v', conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: bool,

    /// エラーのみ表示
    #[arg(long, short = 'q', help_heading = "動作")]
    pub quiet: bool,
}
