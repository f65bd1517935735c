//! Integration tests for peakreport
//!
//! These tests write both reports to disk and read them back.

use peakreport::model::{Compound, Peak, PeakGroup, QuantType, Sample};
use peakreport::report::{ReportConfig, ReportWriter};
use std::fs;
use tempfile::tempdir;

fn tracer_samples() -> Vec<Sample> {
    let mut unlabeled = Sample::new("liver, unlabeled", 1).with_order(2).with_set_name("control");
    unlabeled.c13_labeled = false;

    let mut labeled = Sample::new("liver_13C", 1).with_order(1).with_set_name("tracer");
    labeled.c13_labeled = true;

    vec![unlabeled, labeled]
}

fn glucose_group() -> PeakGroup {
    let isotopologue = |mz: f32, tag: &str, area: f32| PeakGroup {
        tag_string: tag.to_string(),
        peaks: vec![Peak {
            peak_area_top: area,
            ..Peak::new("liver_13C")
        }],
        ..PeakGroup::new(mz, 5.1)
    };

    PeakGroup {
        meta_group_id: 12,
        compound: Some(Compound::new("glucose", "HMDB0000122", 180.0634, "C6H12O6")),
        peaks: vec![
            Peak {
                peak_mz: 181.0707,
                peak_area_top: 5000.0,
                ..Peak::new("liver_13C")
            },
            Peak {
                peak_mz: 181.0708,
                peak_area_top: 9000.0,
                ..Peak::new("liver, unlabeled")
            },
        ],
        children: vec![
            isotopologue(181.0707, "C12 PARENT", 5000.0),
            isotopologue(182.0740, "C13-label-1", 800.0),
            isotopologue(187.0908, "C13-label-6", 1200.0),
            isotopologue(182.0770, "D2-label-1", 30.0),
        ],
        ..PeakGroup::new(181.0707, 5.1)
    }
}

/// Test the complete write-read cycle with isotope tracing
#[test]
fn test_tracer_reports() {
    let dir = tempdir().unwrap();
    let group_path = dir.path().join("groups.csv");
    let peak_path = dir.path().join("peaks.tsv");

    let mut writer = ReportWriter::with_config(tracer_samples(), ReportConfig::default().with_set_names(true));
    writer.open_group_report(&group_path);
    writer.open_peak_report(&peak_path);

    let mut glucose = glucose_group();
    let mut unknown = PeakGroup::new(301.5, 7.0);
    unknown.peaks.push(Peak::new("liver, unlabeled"));

    writer.add_group(&mut glucose).unwrap();
    writer.add_group(&mut unknown).unwrap();
    let stats = writer.close().unwrap();

    // base form + first C13 isotopologue; D2 was not traced
    assert_eq!(stats.group_rows_written, 3);
    assert_eq!(stats.peak_rows_written, 3);

    let groups = fs::read_to_string(&group_path).unwrap();
    let lines: Vec<&str> = groups.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with(",parent,liver_13C,\"liver, unlabeled\""));
    assert_eq!(lines[1], format!("{}tracer,control", ",".repeat(13)));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&group_path)
        .unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[14], "liver, unlabeled");

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).skip(1).collect();
    assert_eq!(records.len(), 3);

    let notes: Vec<&str> = records.iter().map(|r| &r[7]).collect();
    assert_eq!(notes, vec!["C12 PARENT", "C13-label-1", ""]);

    let group_ids: Vec<&str> = records.iter().map(|r| &r[2]).collect();
    assert_eq!(group_ids, vec!["1", "2", "3"]);

    // isotope row joins the parent's family
    assert_eq!(&records[1][1], "12");
    assert_eq!(&records[1][8], "glucose");
    assert_eq!(&records[1][13], "800");
    assert_eq!(&records[1][14], "0");
    assert_eq!(glucose.children[1].meta_group_id, 12);
    assert_eq!(glucose.children[2].meta_group_id, 0);

    let peaks = fs::read_to_string(&peak_path).unwrap();
    let peak_rows: Vec<Vec<&str>> = peaks.lines().map(|l| l.split('\t').collect()).collect();
    assert_eq!(peak_rows.len(), 4);
    assert_eq!(peak_rows[0][0], "groupId");
    assert_eq!(peak_rows[0].len(), 18);
    assert_eq!(peak_rows[1][..4], ["0", "glucose", "HMDB0000122", "liver_13C"]);
    assert_eq!(peak_rows[2][3], "liver, unlabeled");
    assert_eq!(peak_rows[3][..4], ["2", "", "", "liver, unlabeled"]);
}

/// Both reports default to tab separated output
#[test]
fn test_tab_dialect() {
    let dir = tempdir().unwrap();
    let group_path = dir.path().join("groups.txt");

    let mut writer = ReportWriter::with_config(
        vec![Sample::new("a,b", 1)],
        ReportConfig::default().with_quant_type(QuantType::Height),
    );
    writer.open_group_report(&group_path);

    let mut group = PeakGroup::new(100.0, 1.0);
    group.peaks.push(Peak {
        peak_intensity: 250.0,
        ..Peak::new("a,b")
    });
    writer.add_group(&mut group).unwrap();
    writer.close().unwrap();

    let content = fs::read_to_string(&group_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("label\tmetaGroupId\tgroupId\t"));
    assert!(lines[0].ends_with("\tparent\ta,b"));
    assert!(lines[1].ends_with("\t100\t250"));
    assert!(content.ends_with('\n'));
}

/// Dropping the writer flushes both reports
#[test]
fn test_drop_flushes() {
    let dir = tempdir().unwrap();
    let group_path = dir.path().join("groups.csv");

    {
        let mut writer = ReportWriter::new(vec![Sample::new("s1", -1)]);
        writer.open_group_report(&group_path);
        writer.add_group(&mut PeakGroup::new(150.0, 2.0)).unwrap();
    }

    let content = fs::read_to_string(&group_path).unwrap();
    assert_eq!(content.lines().count(), 2);
}
