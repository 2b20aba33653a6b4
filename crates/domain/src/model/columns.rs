//! Column names of the SRI sales extract.

/// 県 (province) column.
pub const REGION: &str = "PROVINCIA";
pub const TOTAL_SALES: &str = "TOTAL_VENTAS";
pub const EXPORTS: &str = "EXPORTACIONES";
pub const IMPORTS: &str = "IMPORTACIONES";
pub const ZERO_RATE_NET_SALES: &str = "VENTAS_NETAS_TARIFA_0";
/// Passthrough column; kept as raw text in [`crate::SalesRecord::extra`].
pub const MONTH: &str = "MES";

/// Columns whose values are cleaned into non-negative amounts.
pub const DESIGNATED_NUMERIC: [&str; 4] = [TOTAL_SALES, EXPORTS, IMPORTS, ZERO_RATE_NET_SALES];
