use std::fmt;

/// Statistics from a report writing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    /// Number of groups passed to `add_group`
    pub groups_processed: usize,
    /// Rows written to the group report
    pub group_rows_written: usize,
    /// Rows written to the peak report
    pub peak_rows_written: usize,
}

impl fmt::Display for ReportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} groups ({} group rows, {} peak rows)",
            self.groups_processed, self.group_rows_written, self.peak_rows_written
        )
    }
}
