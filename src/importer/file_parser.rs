// ==========================================
// Shopfront - CSV file parser
// ==========================================
// Stage 0 of the import pipeline: raw text -> header-keyed rows.
// Values are trimmed; fully blank rows are skipped.
// ==========================================

use crate::importer::catalog_importer_trait::FileParser;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_str(&self, contents: &str) -> ImportResult<Vec<HashMap<String, String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows; the validator reports gaps
            .from_reader(contents.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // Skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }

    fn parse_path(&self, path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let contents = std::fs::read_to_string(path)?;
        self.parse_str(&contents)
    }
}
