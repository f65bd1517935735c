use serde::{Deserialize, Serialize};

/// One acquired sample (a single LC-MS run)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Sample name, used as the per-sample column header
    pub name: String,

    /// Sample set (group) name, written to the optional set-name header row
    #[serde(default)]
    pub set_name: String,

    /// Acquisition polarity: positive for positive mode, negative otherwise
    #[serde(default)]
    pub polarity: i8,

    /// Caller-defined position of the sample in report columns
    #[serde(default)]
    pub sample_order: i32,

    /// Sample was part of a 13C tracing experiment
    #[serde(default)]
    pub c13_labeled: bool,

    /// Sample was part of a 15N tracing experiment
    #[serde(default)]
    pub n15_labeled: bool,

    /// Sample was part of a 34S tracing experiment
    #[serde(default)]
    pub s34_labeled: bool,

    /// Sample was part of a deuterium tracing experiment
    #[serde(default)]
    pub d2_labeled: bool,
}

impl Sample {
    /// Create a new sample with the given name and polarity
    pub fn new(name: &str, polarity: i8) -> Self {
        Self {
            name: name.to_string(),
            polarity,
            ..Default::default()
        }
    }

    /// Set the sample set name
    pub fn with_set_name(mut self, set_name: &str) -> Self {
        self.set_name = set_name.to_string();
        self
    }

    /// Set the column order of this sample
    pub fn with_order(mut self, sample_order: i32) -> Self {
        self.sample_order = sample_order;
        self
    }

    /// Whether the sample was acquired in positive ion mode
    pub fn is_positive(&self) -> bool {
        self.polarity > 0
    }
}

/// Sort samples by their caller-defined order.
///
/// The sort is stable, so samples sharing an order keep their input order.
pub fn sort_samples(samples: &mut [Sample]) {
    samples.sort_by_key(|s| s.sample_order);
}
