// ==========================================
// Shopfront - catalog importer implementation
// ==========================================
// Orchestrates the pipeline: parse -> validate -> map.
// All-or-nothing: the first violation rejects the whole batch; every
// violation is logged so the operator can fix the file in one pass.
// ==========================================

use crate::domain::product::{ImportBatch, ImportSummary, Product, RawProductRecord};
use crate::importer::catalog_importer_trait::{
    CatalogImporter, FileParser, RecordMapper, RowValidator,
};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::CsvParser;
use crate::importer::record_mapper::RecordMapper as RecordMapperImpl;
use crate::importer::row_validator::RowValidator as RowValidatorImpl;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

pub struct CatalogImporterImpl {
    file_parser: Box<dyn FileParser>,
    record_mapper: Box<dyn RecordMapper>,
    row_validator: Box<dyn RowValidator>,
}

impl CatalogImporterImpl {
    pub fn new(
        file_parser: Box<dyn FileParser>,
        record_mapper: Box<dyn RecordMapper>,
        row_validator: Box<dyn RowValidator>,
    ) -> Self {
        Self {
            file_parser,
            record_mapper,
            row_validator,
        }
    }

    fn build_batch(&self, rows: Vec<std::collections::HashMap<String, String>>) -> ImportResult<ImportBatch> {
        let total_rows = rows.len();

        // Stage 1: column extraction (1-based data row numbers)
        let records: Vec<RawProductRecord> = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| self.record_mapper.map_row(row, idx + 1))
            .collect();

        // Stage 2: schema pass, batch-atomic
        let mut violations = self.row_validator.validate(&records);
        if !violations.is_empty() {
            for v in &violations {
                warn!(
                    row = v.row_number,
                    field = %v.field,
                    kind = ?v.kind,
                    "import rejected: schema violation"
                );
            }
            // Carry the first violation; the rest are in the log.
            return Err(violations.remove(0).into_error());
        }

        // Stage 3: type coercion into catalog records
        let mut products: Vec<Product> = Vec::with_capacity(records.len());
        for record in records {
            products.push(self.record_mapper.finalize(record)?);
        }

        // Duplicate ids within one batch are legal (last occurrence wins at
        // merge time) but usually a file mistake, so surface them in the log.
        let mut seen: HashSet<&str> = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                warn!(id = %product.id, "duplicate id within import batch; last row wins");
            }
        }

        let batch = ImportBatch {
            batch_id: Uuid::new_v4().to_string(),
            imported_at: Utc::now(),
            summary: ImportSummary {
                total_rows,
                imported: products.len(),
            },
            products,
        };

        info!(
            batch_id = %batch.batch_id,
            imported = batch.summary.imported,
            "import batch parsed and validated"
        );
        Ok(batch)
    }
}

impl Default for CatalogImporterImpl {
    fn default() -> Self {
        Self::new(
            Box::new(CsvParser),
            Box::new(RecordMapperImpl),
            Box::new(RowValidatorImpl),
        )
    }
}

#[async_trait]
impl CatalogImporter for CatalogImporterImpl {
    fn parse_contents(&self, contents: &str) -> ImportResult<ImportBatch> {
        let rows = self.file_parser.parse_str(contents)?;
        self.build_batch(rows)
    }

    async fn import_from_path(&self, path: &Path) -> ImportResult<ImportBatch> {
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

        let contents = tokio::fs::read_to_string(path).await?;
        self.parse_contents(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn importer() -> CatalogImporterImpl {
        CatalogImporterImpl::default()
    }

    const VALID_CSV: &str = "\
id,name,description,price,category,imageUrl,featured
ULT-250,Ultimate Package,All templates + priority support,250,Bundle,,true
TPL-PRO,Pro Template Pack,Advanced layered template,79,Templates,,
TPL-DELUXE,Deluxe Template Pack,Premium multi-layer template,129,Templates,,false
";

    #[test]
    fn test_parse_contents_valid_preserves_row_order() {
        let batch = importer().parse_contents(VALID_CSV).unwrap();

        assert_eq!(batch.summary.total_rows, 3);
        assert_eq!(batch.summary.imported, 3);
        let ids: Vec<&str> = batch.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ULT-250", "TPL-PRO", "TPL-DELUXE"]);
        assert!(batch.products[0].featured);
        assert!(!batch.products[1].featured);
    }

    #[test]
    fn test_parse_contents_missing_required_rejects_batch() {
        let csv = "id,name,description,price\nA,Alpha,,10\n";
        let err = importer().parse_contents(csv).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingOrEmptyField { row: 1, ref field } if field == "description"
        ));
    }

    #[test]
    fn test_parse_contents_whitespace_only_required_rejects_batch() {
        let csv = "id,name,description,price\nA,   ,x,10\n";
        let err = importer().parse_contents(csv).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingOrEmptyField { ref field, .. } if field == "name"
        ));
    }

    #[test]
    fn test_parse_contents_invalid_price_rejects_batch() {
        let csv = "id,name,description,price\nA,Alpha,x,ten\n";
        let err = importer().parse_contents(csv).unwrap_err();
        assert!(matches!(err, ImportError::InvalidPrice { row: 1, .. }));
    }

    #[test]
    fn test_parse_contents_empty_input_yields_empty_batch() {
        let batch = importer().parse_contents("id,name,description,price\n").unwrap();
        assert_eq!(batch.summary.total_rows, 0);
        assert!(batch.products.is_empty());
    }

    #[tokio::test]
    async fn test_import_from_path_not_found() {
        let err = importer()
            .import_from_path(Path::new("missing.csv"))
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_import_from_path_wrong_extension() {
        let temp = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        let err = importer().import_from_path(temp.path()).await.unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }
}
