// ==========================================
// Shopfront - row validator
// ==========================================
// Schema pass over the whole batch. Required columns must be present and
// non-blank in every row; prices must be non-negative numbers. Any
// violation rejects the entire batch (no partial import).
// ==========================================

use crate::domain::product::RawProductRecord;
use crate::importer::catalog_importer_trait::RowValidator as RowValidatorTrait;
use crate::importer::error::ImportError;
use crate::importer::record_mapper::parse_price;

/// Why a row failed the schema pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    MissingOrEmpty,
    InvalidPrice,
}

/// One failing check on one row.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub row_number: usize,
    pub field: String,
    pub value: Option<String>,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn into_error(self) -> ImportError {
        match self.kind {
            ViolationKind::MissingOrEmpty => ImportError::MissingOrEmptyField {
                row: self.row_number,
                field: self.field,
            },
            ViolationKind::InvalidPrice => ImportError::InvalidPrice {
                row: self.row_number,
                value: self.value.unwrap_or_default(),
            },
        }
    }
}

pub struct RowValidator;

impl RowValidatorTrait for RowValidator {
    fn validate(&self, records: &[RawProductRecord]) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for record in records {
            let row = record.row_number;

            check_required(&mut violations, row, "id", &record.id);
            check_required(&mut violations, row, "name", &record.name);
            check_required(&mut violations, row, "description", &record.description);
            check_required(&mut violations, row, "price", &record.price);

            // Only type-check a price that is actually present; absence is
            // already reported above.
            if let Some(price) = &record.price {
                if parse_price(price).is_none() {
                    violations.push(FieldViolation {
                        row_number: row,
                        field: "price".to_string(),
                        value: Some(price.clone()),
                        kind: ViolationKind::InvalidPrice,
                    });
                }
            }
        }

        violations
    }
}

fn check_required(
    violations: &mut Vec<FieldViolation>,
    row: usize,
    field: &str,
    value: &Option<String>,
) {
    // Mapper already trims and drops blank values to None.
    if value.is_none() {
        violations.push(FieldViolation {
            row_number: row,
            field: field.to_string(),
            value: None,
            kind: ViolationKind::MissingOrEmpty,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record(row_number: usize) -> RawProductRecord {
        RawProductRecord {
            id: Some("A".to_string()),
            name: Some("Alpha".to_string()),
            description: Some("desc".to_string()),
            price: Some("10".to_string()),
            category: None,
            image_url: None,
            featured: None,
            row_number,
        }
    }

    #[test]
    fn test_valid_batch_has_no_violations() {
        let validator = RowValidator;
        let records = vec![valid_record(1), valid_record(2)];
        assert!(validator.validate(&records).is_empty());
    }

    #[test]
    fn test_missing_description_reported() {
        let validator = RowValidator;
        let mut record = valid_record(1);
        record.description = None;

        let violations = validator.validate(&[record]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "description");
        assert_eq!(violations[0].kind, ViolationKind::MissingOrEmpty);
    }

    #[test]
    fn test_one_bad_row_flagged_among_valid_rows() {
        let validator = RowValidator;
        let mut bad = valid_record(2);
        bad.id = None;

        let violations = validator.validate(&[valid_record(1), bad, valid_record(3)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].row_number, 2);
    }

    #[test]
    fn test_non_numeric_price_reported() {
        let validator = RowValidator;
        let mut record = valid_record(1);
        record.price = Some("ten".to_string());

        let violations = validator.validate(&[record]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::InvalidPrice);
    }

    #[test]
    fn test_negative_price_reported() {
        let validator = RowValidator;
        let mut record = valid_record(1);
        record.price = Some("-3".to_string());

        let violations = validator.validate(&[record]);
        assert_eq!(violations[0].kind, ViolationKind::InvalidPrice);
    }

    #[test]
    fn test_violation_into_error() {
        let violation = FieldViolation {
            row_number: 4,
            field: "name".to_string(),
            value: None,
            kind: ViolationKind::MissingOrEmpty,
        };
        match violation.into_error() {
            ImportError::MissingOrEmptyField { row, field } => {
                assert_eq!(row, 4);
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
