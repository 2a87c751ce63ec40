use csv::Writer;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::error::AppError;

/// Records collected for one batch, written as a single CSV file.
#[derive(Debug, Clone)]
pub struct RecordTable<T> {
    records: Vec<T>,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Serialize> RecordTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = T>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Writes the table with a header row, creating parent directories.
    ///
    /// Returns `false` without touching the filesystem when the table is
    /// empty.
    pub async fn write_csv(&self, path: &Path) -> Result<bool, AppError> {
        if self.records.is_empty() {
            info!("No records to write for {}", path.display());
            return Ok(false);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut writer = Writer::from_writer(Vec::new());
        for record in &self.records {
            writer.serialize(record)?;
        }
        let contents = writer.into_inner().map_err(|e| e.into_error())?;
        fs::write(path, contents).await?;

        debug!("Wrote {} rows to {}", self.records.len(), path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Row {
        game_id: i64,
        #[serde(rename = "batting_AB")]
        at_bats: Option<i64>,
        player: Option<String>,
    }

    #[tokio::test]
    async fn test_write_csv_with_missing_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("rows.csv");

        let mut table = RecordTable::new();
        table.push(Row {
            game_id: 1,
            at_bats: Some(4),
            player: Some("Sample".to_string()),
        });
        table.extend([Row {
            game_id: 2,
            at_bats: None,
            player: None,
        }]);
        assert_eq!(table.len(), 2);

        assert!(table.write_csv(&path).await.unwrap());
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "game_id,batting_AB,player\n1,4,Sample\n2,,\n");
    }

    #[tokio::test]
    async fn test_empty_table_is_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let table: RecordTable<Row> = RecordTable::new();

        assert!(table.is_empty());
        assert!(!table.write_csv(&path).await.unwrap());
        assert!(!path.exists());
    }
}
