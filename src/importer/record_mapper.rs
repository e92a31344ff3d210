// ==========================================
// Shopfront - record mapper
// ==========================================
// Stage 1: raw row -> RawProductRecord (column extraction, aliases).
// Stage 2: validated RawProductRecord -> Product (type coercion).
// ==========================================

use crate::domain::product::{Product, RawProductRecord};
use crate::importer::catalog_importer_trait::RecordMapper as RecordMapperTrait;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

pub struct RecordMapper;

impl RecordMapperTrait for RecordMapper {
    fn map_row(&self, row: HashMap<String, String>, row_number: usize) -> RawProductRecord {
        RawProductRecord {
            id: self.get_string(&row, "id"),
            name: self.get_string(&row, "name"),
            description: self.get_string(&row, "description"),
            price: self.get_string(&row, "price"),
            category: self.get_string(&row, "category"),
            image_url: self.get_string(&row, "imageUrl"),
            featured: self.get_string(&row, "featured"),
            row_number,
        }
    }

    fn finalize(&self, record: RawProductRecord) -> ImportResult<Product> {
        let row = record.row_number;

        let id = self.require(record.id, "id", row)?;
        let name = self.require(record.name, "name", row)?;
        let description = self.require(record.description, "description", row)?;
        let price_raw = self.require(record.price, "price", row)?;

        let price_usd = parse_price(&price_raw).ok_or(ImportError::InvalidPrice {
            row,
            value: price_raw,
        })?;

        Ok(Product {
            id,
            name,
            description,
            price_usd,
            category: record.category,
            image_url: record.image_url,
            featured: is_featured(record.featured.as_deref()),
        })
    }
}

impl RecordMapper {
    /// Extract a trimmed, non-empty string column. Supports column-name
    /// aliases (snake_case variants some exports use).
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        let aliases: Vec<&str> = match key {
            "imageUrl" => vec!["imageUrl", "image_url"],
            _ => vec![key],
        };

        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    fn require(&self, value: Option<String>, field: &str, row: usize) -> ImportResult<String> {
        value.ok_or_else(|| ImportError::MissingOrEmptyField {
            row,
            field: field.to_string(),
        })
    }
}

/// Coerce a price string to a non-negative finite f64, or `None`.
pub fn parse_price(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

/// `featured` is true only for the literal token "true", case-insensitive.
/// Anything else (including absent) is false.
pub fn is_featured(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(price: &str, featured: Option<&str>) -> RawProductRecord {
        RawProductRecord {
            id: Some("A".to_string()),
            name: Some("Alpha".to_string()),
            description: Some("desc".to_string()),
            price: Some(price.to_string()),
            category: None,
            image_url: None,
            featured: featured.map(|s| s.to_string()),
            row_number: 1,
        }
    }

    #[test]
    fn test_map_row_empty_optionals_become_none() {
        let mapper = RecordMapper;
        let mut row = HashMap::new();
        row.insert("id".to_string(), "A".to_string());
        row.insert("category".to_string(), "   ".to_string());
        row.insert("imageUrl".to_string(), "".to_string());

        let record = mapper.map_row(row, 1);
        assert_eq!(record.id, Some("A".to_string()));
        assert_eq!(record.category, None);
        assert_eq!(record.image_url, None);
    }

    #[test]
    fn test_map_row_image_url_alias() {
        let mapper = RecordMapper;
        let mut row = HashMap::new();
        row.insert("image_url".to_string(), "https://x/img.png".to_string());

        let record = mapper.map_row(row, 1);
        assert_eq!(record.image_url, Some("https://x/img.png".to_string()));
    }

    #[test]
    fn test_featured_only_for_literal_true() {
        assert!(is_featured(Some("true")));
        assert!(is_featured(Some("TRUE")));
        assert!(is_featured(Some("True ")));
        assert!(!is_featured(Some("1")));
        assert!(!is_featured(Some("yes")));
        assert!(!is_featured(Some("")));
        assert!(!is_featured(None));
    }

    #[test]
    fn test_parse_price_rejects_non_numeric_and_negative() {
        assert_eq!(parse_price("250"), Some(250.0));
        assert_eq!(parse_price(" 79.5 "), Some(79.5));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_finalize_valid_record() {
        let mapper = RecordMapper;
        let product = mapper.finalize(raw("250", Some("TRUE"))).unwrap();

        assert_eq!(product.id, "A");
        assert_eq!(product.price_usd, 250.0);
        assert!(product.featured);
    }

    #[test]
    fn test_finalize_invalid_price() {
        let mapper = RecordMapper;
        let result = mapper.finalize(raw("ten dollars", None));
        assert!(matches!(result, Err(ImportError::InvalidPrice { row: 1, .. })));
    }
}
