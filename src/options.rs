use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
    Md,
}

/// 出力するレポート
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Total sales per region
    Totals,
    /// Total sales of the region given by --region
    Region,
    /// Exports per month
    Exports,
    /// Region with the largest imports
    MaxImports,
    /// Zero-rate sales share per region
    ZeroRate,
    /// Every report above (region only when --region is set)
    All,
}

impl ReportKind {
    pub const ALL: [Self; 5] = [Self::Totals, Self::Region, Self::Exports, Self::MaxImports, Self::ZeroRate];
}
