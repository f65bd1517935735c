/// Errors that can occur while writing reports
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the delimited text writer
    #[error("CSV writer error: {0}")]
    CsvError(#[from] csv::Error),
}
