// ==========================================
// Shopfront - catalog import traits
// ==========================================
// Interfaces only, no implementations. The pipeline is
// parse (untyped rows) -> validate (schema pass) -> map (typed records);
// the orchestrating importer is all-or-nothing per batch.
// ==========================================

use crate::domain::product::{ImportBatch, Product, RawProductRecord};
use crate::importer::error::ImportResult;
use crate::importer::row_validator::FieldViolation;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// Columns that must be present and non-blank in every data row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "name", "description", "price"];

/// Optional columns; empty or absent means "not set".
pub const OPTIONAL_COLUMNS: [&str; 3] = ["category", "imageUrl", "featured"];

// ==========================================
// CatalogImporter trait
// ==========================================
// Main import entry point. Implementer: CatalogImporterImpl.
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// Parse and validate raw CSV text (header row required).
    ///
    /// # Returns
    /// - Ok(ImportBatch): one `Product` per non-blank data row, row order
    ///   preserved
    /// - Err: parse failure, or the first schema violation (the whole batch
    ///   is rejected; no partial import)
    fn parse_contents(&self, contents: &str) -> ImportResult<ImportBatch>;

    /// Read a `.csv` file asynchronously and delegate to `parse_contents`.
    ///
    /// The file read is the only suspension point of an import action.
    async fn import_from_path(&self, path: &Path) -> ImportResult<ImportBatch>;
}

// ==========================================
// FileParser trait
// ==========================================
// Stage 0: tokenize the upload into header-keyed string rows.
pub trait FileParser: Send + Sync {
    /// Parse CSV text into raw rows (`column name -> trimmed value`).
    /// Fully blank rows are skipped.
    fn parse_str(&self, contents: &str) -> ImportResult<Vec<HashMap<String, String>>>;

    /// Open and parse a `.csv` file (synchronous convenience entry).
    fn parse_path(&self, path: &Path) -> ImportResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// RecordMapper trait
// ==========================================
// Stage 1: pull known columns out of a raw row; stage 2: coerce a
// validated record into a typed `Product`.
pub trait RecordMapper: Send + Sync {
    /// Map one raw row to the untyped intermediate record (infallible;
    /// missing columns stay `None` for the validator to report).
    fn map_row(&self, row: HashMap<String, String>, row_number: usize) -> RawProductRecord;

    /// Coerce a record that passed validation into a `Product`.
    fn finalize(&self, record: RawProductRecord) -> ImportResult<Product>;
}

// ==========================================
// RowValidator trait
// ==========================================
// Schema pass over the whole batch; one violation per failing check.
pub trait RowValidator: Send + Sync {
    fn validate(&self, records: &[RawProductRecord]) -> Vec<FieldViolation>;
}
