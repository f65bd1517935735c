//! Column names of the group and peak reports

/// Curator label
pub const LABEL: &str = "label";
/// Shared id of a parent group and its isotope rows
pub const META_GROUP_ID: &str = "metaGroupId";
/// Sequential row id; also the correlation key of the peak report
pub const GROUP_ID: &str = "groupId";
/// Number of good peaks in the group
pub const GOOD_PEAK_COUNT: &str = "goodPeakCount";
/// Mean m/z of the group
pub const MED_MZ: &str = "medMz";
/// Mean retention time of the group
pub const MED_RT: &str = "medRt";
/// Best peak quality of the group
pub const MAX_QUALITY: &str = "maxQuality";
/// SRM id and tag
pub const NOTE: &str = "note";
/// Compound name
pub const COMPOUND: &str = "compound";
/// Compound identifier
pub const COMPOUND_ID: &str = "compoundId";
/// Retention time deviation from the compound
pub const EXPECTED_RT_DIFF: &str = "expectedRtDiff";
/// Mass error against the compound in ppm
pub const PPM_DIFF: &str = "ppmDiff";
/// Mean m/z of the parent group
pub const PARENT: &str = "parent";

/// Fixed leading columns of the group report; one column per sample follows
pub const GROUP_REPORT_COLUMNS: [&str; 13] = [
    LABEL,
    META_GROUP_ID,
    GROUP_ID,
    GOOD_PEAK_COUNT,
    MED_MZ,
    MED_RT,
    MAX_QUALITY,
    NOTE,
    COMPOUND,
    COMPOUND_ID,
    EXPECTED_RT_DIFF,
    PPM_DIFF,
    PARENT,
];

/// Number of padding delimiters written before the set names.
///
/// Each set name is also preceded by its own delimiter, so the first set name
/// lines up under the first sample column.
pub const SET_NAME_PADDING: usize = 12;

/// Columns of the peak report
pub const PEAK_REPORT_COLUMNS: [&str; 18] = [
    GROUP_ID,
    COMPOUND,
    COMPOUND_ID,
    "sample",
    "peakMz",
    "medianMz",
    "baseMz",
    "rt",
    "rtmin",
    "rtmax",
    "quality",
    "peakIntensity",
    "peakArea",
    "peakAreaTop",
    "peakAreaCorrected",
    "noNoiseObs",
    "signalBaseLineRatio",
    "fromBlankSample",
];
