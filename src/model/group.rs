use serde::{Deserialize, Serialize};

use super::{Compound, Peak, Sample};

/// Peak measure used to fill the per-sample columns of the group report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantType {
    /// Area of the top of the peak
    #[default]
    AreaTop,
    /// Baseline corrected area
    Area,
    /// Apex intensity
    Height,
    /// Raw integrated area
    AreaNotCorrected,
    /// Apex retention time
    RetentionTime,
    /// Peak quality score
    Quality,
    /// Signal to baseline ratio
    SnRatio,
}

impl QuantType {
    /// Read this measure from a peak
    pub fn value_of(&self, peak: &Peak) -> f32 {
        match self {
            QuantType::AreaTop => peak.peak_area_top,
            QuantType::Area => peak.peak_area_corrected,
            QuantType::Height => peak.peak_intensity,
            QuantType::AreaNotCorrected => peak.peak_area,
            QuantType::RetentionTime => peak.rt,
            QuantType::Quality => peak.quality,
            QuantType::SnRatio => peak.signal_baseline_ratio,
        }
    }
}

/// A group of peaks believed to be the same species across samples.
///
/// Children are isotopologue variants of this group. A child's parent is the
/// group whose `children` owns it; top-level groups have no parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakGroup {
    /// Single character label assigned by the curator
    pub label: Option<char>,

    /// Identifier shared by a family of related rows
    pub meta_group_id: i32,

    /// Number of peaks passing the quality cutoff
    pub good_peak_count: u32,

    /// Mean m/z over member peaks
    pub mean_mz: f32,
    /// Mean retention time over member peaks
    pub mean_rt: f32,
    /// Best member peak quality
    pub max_quality: f32,

    /// Deviation from the compound's expected retention time
    pub expected_rt_diff: f32,

    /// SRM transition identifier, prefixed to the tag in the note column
    pub srm_id: String,
    /// Free-text tag; for isotope children this is the isotope name
    pub tag_string: String,

    /// Matched compound, if any
    pub compound: Option<Compound>,

    /// Member peaks, at most one per sample
    pub peaks: Vec<Peak>,

    /// Isotopologue child groups
    pub children: Vec<PeakGroup>,
}

impl PeakGroup {
    /// Create an empty group at the given m/z and retention time
    pub fn new(mean_mz: f32, mean_rt: f32) -> Self {
        Self {
            mean_mz,
            mean_rt,
            ..Default::default()
        }
    }

    /// Number of child groups
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Text of the note column: SRM id followed by the tag
    pub fn note(&self) -> String {
        format!("{}{}", self.srm_id, self.tag_string)
    }

    /// Per-sample values of `quant_type`, aligned to `samples`.
    ///
    /// Each entry is the largest value among this group's peaks from that
    /// sample, or 0 when the sample has no (positive) peak.
    pub fn ordered_intensity_vector(&self, samples: &[Sample], quant_type: QuantType) -> Vec<f32> {
        let mut values = vec![0.0f32; samples.len()];

        for peak in &self.peaks {
            let Some(sample_name) = peak.sample.as_deref() else {
                continue;
            };
            if let Some(pos) = samples.iter().position(|s| s.name == sample_name) {
                let y = quant_type.value_of(peak);
                if values[pos] < y {
                    values[pos] = y;
                }
            }
        }

        values
    }
}
