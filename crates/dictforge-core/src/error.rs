/// Errors raised while turning a source table into a dictionary archive.
///
/// Every variant is fatal for the run. Unresolved cross-references are not
/// errors; see [`crate::reference::ReferenceObserver`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Malformed value in row {row}, column `{column}`: {source}")]
    MalformedField {
        row: usize,
        column: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected shape in row {row}, column `{column}`: expected {expected}")]
    UnexpectedShape {
        row: usize,
        column: String,
        expected: &'static str,
    },

    #[error("Missing column `{column}` in row {row}")]
    MissingColumn { row: usize, column: String },

    #[error("Not supported yet: {0}")]
    Unsupported(&'static str),

    #[error("Table error: {0}")]
    Table(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
