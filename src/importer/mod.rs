// ==========================================
// Shopfront - import layer
// ==========================================
// Turns an uploaded CSV file into validated catalog records.
// Pipeline: file_parser (untyped rows) -> row_validator (schema pass)
// -> record_mapper (typed records). Batch-atomic: any violation rejects
// the whole upload and the catalog stays unchanged.
// ==========================================

// Module declarations
pub mod catalog_importer_impl;
pub mod catalog_importer_trait;
pub mod error;
pub mod file_parser;
pub mod record_mapper;
pub mod row_validator;
pub mod template;

// Re-export core types
pub use catalog_importer_impl::CatalogImporterImpl;
pub use error::{ImportError, ImportResult};
pub use file_parser::CsvParser;
pub use record_mapper::RecordMapper as RecordMapperImpl;
pub use row_validator::{FieldViolation, RowValidator as RowValidatorImpl, ViolationKind};
pub use template::{template_csv, write_template, TEMPLATE_COLUMNS, TEMPLATE_FILE_NAME};

// Re-export trait interfaces
pub use catalog_importer_trait::{
    CatalogImporter, FileParser, RecordMapper, RowValidator, OPTIONAL_COLUMNS, REQUIRED_COLUMNS,
};
