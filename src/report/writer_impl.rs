use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error, info, warn};

use super::columns::{GROUP_REPORT_COLUMNS, PEAK_REPORT_COLUMNS, SET_NAME_PADDING};
use super::traversal::walk_preorder;
use super::{Dialect, ReportConfig, ReportError, ReportStats};
use crate::isotopes::{
    ionization_mode, select_isotope_children, IsotopeCalculator, LabelingFamily,
    LabelingIsotopeCalculator,
};
use crate::model::{sort_samples, PeakGroup, Sample};

/// Mass error of an observed m/z against a theoretical mass, in ppm
pub fn ppm_distance(theoretical: f64, observed: f64) -> f64 {
    (observed - theoretical).abs() / theoretical * 1e6
}

/// One open report file together with its dialect
struct ReportStream {
    writer: csv::Writer<Box<dyn Write>>,
    dialect: Dialect,
}

impl ReportStream {
    fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path)?;
        Ok(Self::new(Box::new(BufWriter::new(file)), Dialect::from_path(path)))
    }

    fn new(sink: Box<dyn Write>, dialect: Dialect) -> Self {
        // Fields arrive already sanitized, so the writer must not quote again
        let writer = csv::WriterBuilder::new()
            .delimiter(dialect.delimiter_byte())
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);

        Self { writer, dialect }
    }

    fn write_row<I, T>(&mut self, fields: I) -> Result<(), ReportError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(fields)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writer for the group and peak reports of a peak grouping run.
///
/// The group report has one row per emitted peak group with a column per
/// sample; the peak report has one row per raw peak. Both are delimited text
/// files whose dialect is chosen from their own file name.
///
/// A report that cannot be opened is logged and stays disabled; the other
/// report keeps working.
///
/// # Example
///
/// ```rust,no_run
/// use peakreport::model::{PeakGroup, Sample};
/// use peakreport::report::ReportWriter;
///
/// let samples = vec![Sample::new("blank", 1), Sample::new("treated", 1)];
/// let mut reports = ReportWriter::new(samples);
/// reports.open_group_report("groups.csv");
/// reports.open_peak_report("peaks.tsv");
///
/// let mut group = PeakGroup::new(181.0707, 5.2);
/// reports.add_group(&mut group)?;
///
/// let stats = reports.close()?;
/// println!("{}", stats);
/// # Ok::<(), peakreport::report::ReportError>(())
/// ```
pub struct ReportWriter {
    samples: Vec<Sample>,
    config: ReportConfig,
    isotope_calculator: Box<dyn IsotopeCalculator>,
    group_report: Option<ReportStream>,
    peak_report: Option<ReportStream>,
    group_row_id: usize,
    stats: ReportStats,
}

impl ReportWriter {
    /// Create a writer for the given samples with the default configuration
    pub fn new(samples: Vec<Sample>) -> Self {
        Self::with_config(samples, ReportConfig::default())
    }

    /// Create a writer for the given samples.
    ///
    /// Samples are sorted once by their sample order; that order is the
    /// column order of every per-sample field.
    pub fn with_config(mut samples: Vec<Sample>, config: ReportConfig) -> Self {
        sort_samples(&mut samples);
        Self {
            samples,
            config,
            isotope_calculator: Box::new(LabelingIsotopeCalculator::new()),
            group_report: None,
            peak_report: None,
            group_row_id: 0,
            stats: ReportStats::default(),
        }
    }

    /// Replace the isotope engine used to select isotope children
    pub fn with_isotope_calculator<C: IsotopeCalculator + 'static>(mut self, calculator: C) -> Self {
        self.isotope_calculator = Box::new(calculator);
        self
    }

    /// Samples in column order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Active configuration
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Ionization mode derived from the first sample
    pub fn ionization_mode(&self) -> i32 {
        ionization_mode(&self.samples)
    }

    /// Id of the last group row written (0 before the first)
    pub fn group_row_id(&self) -> usize {
        self.group_row_id
    }

    /// Statistics so far
    pub fn stats(&self) -> &ReportStats {
        &self.stats
    }

    /// Whether the group report is accepting rows
    pub fn is_group_report_open(&self) -> bool {
        self.group_report.is_some()
    }

    /// Whether the peak report is accepting rows
    pub fn is_peak_report_open(&self) -> bool {
        self.peak_report.is_some()
    }

    /// Open the group report at `path` and write its header
    pub fn open_group_report<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        if self.samples.is_empty() {
            warn!("No samples configured, group report {} not opened", path.display());
            return;
        }

        match ReportStream::create(path).and_then(|stream| self.start_group_report(stream)) {
            Ok(()) => info!("Writing group report to {}", path.display()),
            Err(e) => error!("Can't write to {}: {}", path.display(), e),
        }
    }

    /// Open the peak report at `path` and write its header
    pub fn open_peak_report<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        if self.samples.is_empty() {
            warn!("No samples configured, peak report {} not opened", path.display());
            return;
        }

        match ReportStream::create(path).and_then(|stream| self.start_peak_report(stream)) {
            Ok(()) => info!("Writing peak report to {}", path.display()),
            Err(e) => error!("Can't write to {}: {}", path.display(), e),
        }
    }

    /// Open the group report on any writer
    pub fn open_group_report_writer<W: Write + 'static>(&mut self, sink: W, dialect: Dialect) {
        if self.samples.is_empty() {
            warn!("No samples configured, group report not opened");
            return;
        }
        if let Err(e) = self.start_group_report(ReportStream::new(Box::new(sink), dialect)) {
            error!("Can't write group report header: {}", e);
        }
    }

    /// Open the peak report on any writer
    pub fn open_peak_report_writer<W: Write + 'static>(&mut self, sink: W, dialect: Dialect) {
        if self.samples.is_empty() {
            warn!("No samples configured, peak report not opened");
            return;
        }
        if let Err(e) = self.start_peak_report(ReportStream::new(Box::new(sink), dialect)) {
            error!("Can't write peak report header: {}", e);
        }
    }

    fn start_group_report(&mut self, mut stream: ReportStream) -> Result<(), ReportError> {
        let dialect = stream.dialect;
        let sample_names = self.samples.iter().map(|s| dialect.sanitize(&s.name));
        let header: Vec<String> = GROUP_REPORT_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(sample_names)
            .collect();
        stream.write_row(&header)?;

        if self.config.include_set_names {
            let set_names = self.samples.iter().map(|s| dialect.sanitize(&s.set_name));
            let row: Vec<String> = std::iter::repeat(String::new())
                .take(SET_NAME_PADDING + 1)
                .chain(set_names)
                .collect();
            stream.write_row(&row)?;
        }
        stream.flush()?;

        self.group_report = Some(stream);
        Ok(())
    }

    fn start_peak_report(&mut self, mut stream: ReportStream) -> Result<(), ReportError> {
        stream.write_row(PEAK_REPORT_COLUMNS)?;
        stream.flush()?;
        self.peak_report = Some(stream);
        Ok(())
    }

    /// Write a detected group to both reports.
    ///
    /// Every raw peak of `group` goes to the peak report, tagged with the
    /// current group row id. The group report then receives either the group
    /// itself (no compound or no children), or its first child as the
    /// unlabeled form followed by the isotope children selected for the
    /// labeling experiments of the first sample. Selected isotope children take
    /// the group's `meta_group_id`.
    pub fn add_group(&mut self, group: &mut PeakGroup) -> Result<(), ReportError> {
        self.stats.groups_processed += 1;
        self.write_peak_rows(group, self.group_row_id)?;

        if self.group_report.is_none() {
            return Ok(());
        }

        if group.compound.is_none() || group.children.is_empty() {
            return self.write_group_row(group, None);
        }

        let parent_mz = Some(group.mean_mz);
        self.write_group_tree(&mut group.children[0], parent_mz)?;

        let meta_group_id = group.meta_group_id;
        for index in self.select_isotopes(group) {
            let child = &mut group.children[index];
            child.meta_group_id = meta_group_id;
            self.write_group_tree(child, parent_mz)?;
        }

        Ok(())
    }

    fn select_isotopes(&self, group: &PeakGroup) -> Vec<usize> {
        let (Some(compound), Some(first_sample)) = (group.compound.as_ref(), self.samples.first()) else {
            return Vec::new();
        };
        if !LabelingFamily::ALL.iter().any(|f| f.enabled_for(first_sample)) {
            return Vec::new();
        }

        match self
            .isotope_calculator
            .compute_isotopes(&compound.formula, self.ionization_mode())
        {
            Ok(isotopes) => select_isotope_children(group, &isotopes, first_sample),
            Err(e) => {
                warn!("Skipping isotopes of {}: {}", compound.name, e);
                Vec::new()
            }
        }
    }

    /// Write `entry` and its whole subtree to the group report, pre-order.
    ///
    /// Children inherit their parent's `meta_group_id` as they are written.
    pub fn write_group_tree(
        &mut self,
        entry: &mut PeakGroup,
        parent_mz: Option<f32>,
    ) -> Result<(), ReportError> {
        walk_preorder(entry, parent_mz, |group, parent_mz| {
            self.write_group_row(group, parent_mz)
        })
    }

    fn write_group_row(&mut self, group: &PeakGroup, parent_mz: Option<f32>) -> Result<(), ReportError> {
        let Some(dialect) = self.group_report.as_ref().map(|s| s.dialect) else {
            return Ok(());
        };

        self.group_row_id += 1;

        let mut compound_name = String::new();
        let mut compound_id = String::new();
        let mut expected_rt_diff = 0.0f32;
        let mut ppm_diff = 0.0f64;
        if let Some(compound) = &group.compound {
            compound_name = dialect.sanitize(&compound.name);
            compound_id = dialect.sanitize(&compound.id);
            expected_rt_diff = group.expected_rt_diff;
            ppm_diff = ppm_distance(compound.mass, f64::from(group.mean_mz));
        }

        let mut row = vec![
            group.label.map(String::from).unwrap_or_default(),
            group.meta_group_id.to_string(),
            self.group_row_id.to_string(),
            group.good_peak_count.to_string(),
            group.mean_mz.to_string(),
            group.mean_rt.to_string(),
            group.max_quality.to_string(),
            dialect.sanitize(&group.note()),
            compound_name,
            compound_id,
            expected_rt_diff.to_string(),
            ppm_diff.to_string(),
            parent_mz.unwrap_or(group.mean_mz).to_string(),
        ];
        row.extend(
            group
                .ordered_intensity_vector(&self.samples, self.config.quant_type)
                .iter()
                .map(|y| y.to_string()),
        );

        if let Some(stream) = self.group_report.as_mut() {
            stream.write_row(&row)?;
        }
        self.stats.group_rows_written += 1;
        Ok(())
    }

    /// Write one peak report row per raw peak of `group`.
    ///
    /// `group_row_id` is written as the correlation key with the group report.
    /// The sample column is blank for peaks whose sample is not configured.
    pub fn write_peak_rows(&mut self, group: &PeakGroup, group_row_id: usize) -> Result<(), ReportError> {
        let Some(stream) = self.peak_report.as_mut() else {
            return Ok(());
        };
        let dialect = stream.dialect;

        let (compound_name, compound_id) = match &group.compound {
            Some(compound) => (dialect.sanitize(&compound.name), dialect.sanitize(&compound.id)),
            None => (String::new(), String::new()),
        };
        let group_row_id = group_row_id.to_string();

        for peak in &group.peaks {
            let sample_name = peak
                .sample
                .as_deref()
                .filter(|name| self.samples.iter().any(|s| s.name == *name))
                .map(|name| dialect.sanitize(name))
                .unwrap_or_default();

            // Exactly one field per header column; no trailing delimiter
            // after fromBlankSample.
            let row = [
                group_row_id.clone(),
                compound_name.clone(),
                compound_id.clone(),
                sample_name,
                peak.peak_mz.to_string(),
                peak.median_mz.to_string(),
                peak.base_mz.to_string(),
                peak.rt.to_string(),
                peak.rtmin.to_string(),
                peak.rtmax.to_string(),
                peak.quality.to_string(),
                peak.peak_intensity.to_string(),
                peak.peak_area.to_string(),
                peak.peak_area_top.to_string(),
                peak.peak_area_corrected.to_string(),
                peak.no_noise_obs.to_string(),
                peak.signal_baseline_ratio.to_string(),
                u8::from(peak.from_blank_sample).to_string(),
            ];
            stream.write_row(&row)?;
            self.stats.peak_rows_written += 1;
        }

        debug!("Wrote {} peak rows for group row {}", group.peaks.len(), group_row_id);
        Ok(())
    }

    /// Flush and close both reports.
    ///
    /// Safe to call more than once; later calls only return the statistics.
    pub fn close(&mut self) -> Result<ReportStats, ReportError> {
        if let Some(mut stream) = self.group_report.take() {
            stream.flush()?;
        }
        if let Some(mut stream) = self.peak_report.take() {
            stream.flush()?;
        }
        Ok(self.stats.clone())
    }
}

impl Drop for ReportWriter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close reports: {}", e);
        }
    }
}
