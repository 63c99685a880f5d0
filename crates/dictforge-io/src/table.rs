use std::io::Read;
use std::path::Path;

use dictforge_core::{ConvertError, RawRow, Result};

/// Read a headed CSV table into rows keyed by column name
pub fn read_table<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let rows = csv_reader
        .deserialize::<RawRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ConvertError::Table(e.to_string()))?;

    tracing::info!("Read {} rows from table", rows.len());
    Ok(rows)
}

pub fn read_table_file(path: &Path) -> Result<Vec<RawRow>> {
    tracing::info!("Reading table: {}", path.display());
    let file = std::fs::File::open(path)?;
    read_table(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keyed_by_header() {
        let data = "entry_type,cantodict_id,chinese,variants\n\
                    compound,5,例子,\"[\"\"例仔\"\"]\"\n\
                    sentence,12,\"好,好\",\n";
        let rows = read_table(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["chinese"], "例子");
        assert_eq!(rows[0]["variants"], r#"["例仔"]"#);
        assert_eq!(rows[1]["chinese"], "好,好");
        assert_eq!(rows[1]["variants"], "");
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let data = "a,b\n1,2,3\n";
        assert!(matches!(
            read_table(data.as_bytes()),
            Err(ConvertError::Table(_))
        ));
    }
}
