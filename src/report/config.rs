use serde::{Deserialize, Serialize};

use crate::model::QuantType;

/// Configuration for the report writer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Peak measure written to the per-sample columns of the group report
    pub quant_type: QuantType,

    /// Write a second group report header line with each sample's set name
    pub include_set_names: bool,
}

impl ReportConfig {
    /// Use the given peak measure for per-sample columns
    pub fn with_quant_type(mut self, quant_type: QuantType) -> Self {
        self.quant_type = quant_type;
        self
    }

    /// Enable or disable the set-name header line
    pub fn with_set_names(mut self, include_set_names: bool) -> Self {
        self.include_set_names = include_set_names;
        self
    }
}
