use serde::{Deserialize, Serialize};

/// A chromatographic peak detected in one sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peak {
    /// Name of the sample the peak was detected in
    pub sample: Option<String>,

    /// m/z at the peak apex
    pub peak_mz: f32,
    /// Median m/z across the peak
    pub median_mz: f32,
    /// Base m/z
    pub base_mz: f32,

    /// Apex retention time
    pub rt: f32,
    /// Retention time at the left boundary
    pub rtmin: f32,
    /// Retention time at the right boundary
    pub rtmax: f32,

    /// Peak quality score (0-1)
    pub quality: f32,

    /// Apex intensity
    pub peak_intensity: f32,
    /// Raw integrated area
    pub peak_area: f32,
    /// Area of the top of the peak
    pub peak_area_top: f32,
    /// Baseline corrected area
    pub peak_area_corrected: f32,

    /// Number of observations above noise
    pub no_noise_obs: u32,
    /// Signal to baseline ratio
    pub signal_baseline_ratio: f32,

    /// Peak was found in a blank sample
    pub from_blank_sample: bool,
}

impl Peak {
    /// Create a peak in the named sample
    pub fn new(sample: &str) -> Self {
        Self {
            sample: Some(sample.to_string()),
            ..Default::default()
        }
    }
}
