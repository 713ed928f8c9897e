use tokdup_format::{write_clusters_csv_to, write_report, write_report_to, write_summary_to};
use tokdup_settings::{OutputSettings, ReportFormat, SummaryFormat};
use tokdup_types::{
    ClusterMember, ClusterParams, ClusterReceipt, ClusterRecord, ClusterStats, MemberScore,
    MetricMode, ScanStats, ScanStatus, ToolInfo,
};

fn empty_receipt() -> ClusterReceipt {
    ClusterReceipt {
        schema_version: tokdup_types::SCHEMA_VERSION,
        generated_at_ms: 0,
        tool: ToolInfo::current(),
        mode: "cluster".into(),
        status: ScanStatus::Complete,
        warnings: vec!["stdin: line 3 with id `x` has no tokens; skipped".into()],
        inputs: vec![],
        params: ClusterParams {
            mode: MetricMode::Cosine,
            threshold_0: 0.9,
            threshold_1: 0.8,
            min_tokens: 20,
            size_tolerance_pct: 5.0,
        },
        clusters: vec![],
        singletons: vec![],
        stats: ClusterStats::default(),
        scan: ScanStats::default(),
    }
}

#[test]
fn given_output_path_when_report_is_written_then_file_holds_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let settings = OutputSettings {
        format: ReportFormat::Json,
        output: Some(path.clone()),
        ..Default::default()
    };

    write_report(&empty_receipt(), &settings).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["tool"]["name"], "tokdup");
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn given_unwritable_path_when_report_is_written_then_error_names_it() {
    let dir = tempfile::tempdir().unwrap();
    let settings = OutputSettings {
        output: Some(dir.path().join("missing").join("report.txt")),
        ..Default::default()
    };
    let err = write_report(&empty_receipt(), &settings).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to create"));
}

#[test]
fn given_no_clusters_when_text_is_rendered_then_listing_is_empty() {
    let mut buf = Vec::new();
    write_report_to(&mut buf, &empty_receipt(), &OutputSettings::default()).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn given_no_inputs_when_csv_summary_is_written_then_identifier_is_stdin() {
    let mut buf = Vec::new();
    write_summary_to(&mut buf, &empty_receipt(), SummaryFormat::Csv).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("stdin,0,0,0,0,0,0,0.0,0.0%"));
}

// ── Helpers ──

fn one_cluster(mode: MetricMode, scores: Vec<MemberScore>) -> ClusterReceipt {
    let mut receipt = empty_receipt();
    receipt.params.mode = mode;
    receipt.clusters = vec![ClusterRecord {
        index: 0,
        anchor: "a".into(),
        anchor_tokens: 40,
        members: scores
            .into_iter()
            .enumerate()
            .map(|(i, score)| ClusterMember {
                id: format!("m{i}"),
                tokens: 40,
                score,
            })
            .collect(),
    }];
    receipt
}

fn member_rows(receipt: &ClusterReceipt) -> Vec<String> {
    let mut buf = Vec::new();
    write_clusters_csv_to(&mut buf, receipt, false).unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .filter(|l| l.contains(",member,"))
        .map(str::to_string)
        .collect()
}

#[test]
fn given_cosine_cluster_when_csv_is_written_then_second_score_is_empty() {
    let receipt = one_cluster(MetricMode::Cosine, vec![MemberScore::Cosine { cosine: 0.9521 }]);
    assert_eq!(member_rows(&receipt), ["1,member,m0,40,0.9521,"]);
}

#[test]
fn given_lcs_cluster_when_csv_is_written_then_columns_hold_common_and_ratio() {
    let receipt = one_cluster(
        MetricMode::Lcs,
        vec![MemberScore::Lcs {
            common: 38,
            ratio: 0.95,
        }],
    );
    assert_eq!(member_rows(&receipt), ["1,member,m0,40,38,0.95"]);
}

#[test]
fn given_jaccard_cluster_when_csv_is_written_then_columns_hold_set_and_multiset() {
    let receipt = one_cluster(
        MetricMode::Jaccard,
        vec![MemberScore::Jaccard {
            set: 0.92,
            multiset: 0.85,
        }],
    );
    assert_eq!(member_rows(&receipt), ["1,member,m0,40,0.92,0.85"]);
}
