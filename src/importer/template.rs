// ==========================================
// Shopfront - CSV template generation
// ==========================================
// Produces the downloadable `products-template.csv` asset. The header must
// match the importer's required/optional column set exactly.
// ==========================================

use crate::importer::error::ImportResult;
use std::path::Path;

/// Canonical template columns, required first.
pub const TEMPLATE_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "description",
    "price",
    "category",
    "imageUrl",
    "featured",
];

/// Default filename of the static template asset.
pub const TEMPLATE_FILE_NAME: &str = "products-template.csv";

/// Render the template: header row plus one example row.
pub fn template_csv() -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // Writing the header and a record cannot fail on an in-memory buffer.
    let _ = writer.write_record(TEMPLATE_COLUMNS);
    let _ = writer.write_record([
        "ULT-250",
        "Ultimate Package",
        "All templates + priority support",
        "250",
        "Bundle",
        "",
        "true",
    ]);
    let bytes = writer.into_inner().unwrap_or_default();
    String::from_utf8(bytes).unwrap_or_default()
}

/// Write the template asset to `dir/products-template.csv`, returning the
/// written path as a string.
pub fn write_template(dir: &Path) -> ImportResult<String> {
    let path = dir.join(TEMPLATE_FILE_NAME);
    std::fs::write(&path, template_csv())?;
    Ok(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::catalog_importer_impl::CatalogImporterImpl;
    use crate::importer::catalog_importer_trait::{
        CatalogImporter, OPTIONAL_COLUMNS, REQUIRED_COLUMNS,
    };

    #[test]
    fn test_template_header_matches_column_set() {
        let expected: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .chain(OPTIONAL_COLUMNS.iter())
            .copied()
            .collect();
        assert_eq!(TEMPLATE_COLUMNS.to_vec(), expected);

        let csv = template_csv();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "id,name,description,price,category,imageUrl,featured");
    }

    #[test]
    fn test_template_round_trips_through_importer() {
        let batch = CatalogImporterImpl::default()
            .parse_contents(&template_csv())
            .unwrap();

        assert_eq!(batch.summary.imported, 1);
        let product = &batch.products[0];
        assert_eq!(product.id, "ULT-250");
        assert_eq!(product.price_usd, 250.0);
        assert_eq!(product.image_url, None);
        assert!(product.featured);
    }

    #[test]
    fn test_write_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(dir.path()).unwrap();
        assert!(path.ends_with(TEMPLATE_FILE_NAME));
        assert!(std::fs::read_to_string(path).unwrap().starts_with("id,name"));
    }
}
