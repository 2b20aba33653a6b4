//! テストフィクスチャ管理

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Header of the canonical mock extract.
pub const MOCK_HEADER: &str = "PROVINCIA|TOTAL_VENTAS|EXPORTACIONES|IMPORTACIONES|MES";

/// Six rows covering a negative export and a non-numeric total.
pub const MOCK_ROWS: [&str; 6] = [
    "PICHINCHA|1000.00|500.00|100.00|01",
    "GUAYAS|2000.00|1000.00|500.00|02",
    "PICHINCHA|500.00|200.00|50.00|01",
    "GUAYAS|100.00|-10.00|800.00|02",
    "AZUAY|3000.00|0.00|1000.00|03",
    "IMBABURA|NO_NUM|0.00|0.00|04",
];

/// Temporary directory holding sales files; removed on drop.
#[allow(dead_code)]
pub struct SalesFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl SalesFixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Writes `lines` joined by newlines and returns the path.
    pub fn write(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Writes the canonical mock extract.
    pub fn mock(&self) -> PathBuf {
        let mut lines = vec![MOCK_HEADER];
        lines.extend(MOCK_ROWS);
        self.write("mock_sri_ventas.csv", &lines)
    }

    pub fn missing(&self) -> PathBuf {
        self.dir.path().join("does_not_exist.csv")
    }
}
