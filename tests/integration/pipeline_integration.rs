use photo_pii::{
    analyze, analyze_batch, AnalyzerConfig, Category, LabelledResponse, Pipeline, ReportFormat,
    ReportGenerator, RiskLevel, Severity,
};

use crate::fixtures::{self, Entry, TagBlock};

#[test]
fn test_untagged_image_is_minimal() {
    let response = analyze(&fixtures::plain_jpeg(64, 48));
    let report = response.report().expect("plain JPEG must analyze");

    assert!(report.findings.is_empty());
    assert!(report.exif_data.is_empty());
    assert_eq!(report.risk_assessment.score, 0);
    assert_eq!(report.risk_assessment.level, RiskLevel::Minimal);
    assert_eq!(report.risk_assessment.summary, "No privacy risks detected");
    assert_eq!(report.metadata_summary.size, (64, 48));
    assert_eq!(report.metadata_summary.format, "JPEG");
}

#[test]
fn test_gps_serial_and_email_is_critical() {
    let data = fixtures::jpeg_with_tags(&fixtures::privacy_heavy_tags());
    let response = Pipeline::default().analyze(&data);
    let report = response.report().unwrap();

    let by_category = |category: Category| {
        report
            .findings
            .iter()
            .filter(|f| f.category == category)
            .collect::<Vec<_>>()
    };

    let location = by_category(Category::Location);
    assert_eq!(location.len(), 1);
    assert_eq!(location[0].risk, Severity::Critical);
    assert_eq!(location[0].data, "Latitude: 40.446111, Longitude: -79.982222");

    let device = by_category(Category::Device);
    assert_eq!(device.len(), 1);
    assert_eq!(device[0].risk, Severity::High);

    let personal = by_category(Category::Personal);
    assert_eq!(personal.len(), 1);
    assert_eq!(personal[0].risk, Severity::High);
    assert!(personal[0].concern.ends_with("Detected: email"));

    assert!(report.risk_assessment.score >= 24);
    assert_eq!(report.risk_assessment.level, RiskLevel::Critical);
    assert_eq!(report.risk_assessment.total_findings, report.findings.len());
}

#[test]
fn test_findings_follow_analyzer_order() {
    let data = fixtures::jpeg_with_tags(&fixtures::privacy_heavy_tags());
    let report = Pipeline::default().try_analyze(&data).unwrap();
    let types: Vec<&str> = report.findings.iter().map(|f| f.finding_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["GPS Coordinates", "Timestamp Information", "Device Information", "User Content"]
    );
}

#[test]
fn test_corrupt_bytes_give_error_report() {
    let response = analyze(b"\x00\x01\x02 garbage that no decoder accepts");
    assert!(response.is_error());
    let message = response.error().unwrap();
    assert!(message.contains("Failed to extract metadata"), "{}", message);

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["error"].is_string());
}

#[test]
fn test_long_comment_is_truncated() {
    let comment = "a".repeat(150);
    let tags = TagBlock::new().exif(Entry::user_comment(&comment));
    let report = Pipeline::default()
        .try_analyze(&fixtures::jpeg_with_tags(&tags))
        .unwrap();

    let finding = report
        .findings
        .iter()
        .find(|f| f.finding_type == "User Content")
        .unwrap();
    assert_eq!(finding.data, format!("User comments: {}...", "a".repeat(100)));
}

#[test]
fn test_configured_truncation() {
    let config = AnalyzerConfig {
        max_text_length: 10,
        ..AnalyzerConfig::default()
    };
    let tags = TagBlock::new().primary(Entry::ascii(0x010e, "A long walk along the river"));
    let report = Pipeline::new(config)
        .unwrap()
        .try_analyze(&fixtures::jpeg_with_tags(&tags))
        .unwrap();
    assert_eq!(report.findings[0].data, "Image description: A long wal...");
    assert_eq!(report.findings[0].risk, Severity::Medium);
}

#[test]
fn test_png_text_feeds_content_and_network() {
    let data = fixtures::png_with_text(&[("Creator", "Jane Doe"), ("Comment", "uploaded from home wifi")]);
    let report = analyze(&data).report().cloned().unwrap();

    let types: Vec<&str> = report.findings.iter().map(|f| f.finding_type.as_str()).collect();
    assert_eq!(types, vec!["User Content", "Network Information"]);
    assert_eq!(report.findings[1].data, "Comment: uploaded from home wifi...");
    assert_eq!(report.risk_assessment.score, 14);
    assert_eq!(report.risk_assessment.level, RiskLevel::High);
}

#[test]
fn test_jpeg_comment_segment_is_scanned() {
    let data = fixtures::jpeg_with_comment("router password on the back");
    let report = analyze(&data).report().cloned().unwrap();
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].category, Category::Network);
}

#[test]
fn test_gps_timestamps_and_altitude() {
    let tags = TagBlock::new()
        .gps(Entry::rationals(0x0006, &[(2125, 10)]))
        .gps(Entry::rationals(0x0007, &[(14, 1), (30, 1), (5, 1)]))
        .gps(Entry::ascii(0x001d, "2024:05:01"));
    let report = Pipeline::default()
        .try_analyze(&fixtures::jpeg_with_tags(&tags))
        .unwrap();

    let types: Vec<&str> = report.findings.iter().map(|f| f.finding_type.as_str()).collect();
    assert_eq!(types, vec!["GPS Altitude", "GPS Timestamp", "GPS Timestamp"]);
    assert_eq!(report.findings[0].data, "Altitude: 212.5");
    // 4 + 7 + 7
    assert_eq!(report.risk_assessment.score, 18);
    assert_eq!(
        report.risk_assessment.summary,
        "Found 2 high risk items, 1 medium risk item"
    );
}

#[test]
fn test_malformed_coordinates_do_not_abort() {
    let tags = TagBlock::new()
        .gps(Entry::ascii(0x0001, "N"))
        .gps(Entry::rationals(0x0002, &[(40, 1), (26, 1)]))
        .gps(Entry::ascii(0x0003, "E"))
        .gps(Entry::rationals(0x0004, &[(2, 1), (10, 1), (0, 1)]))
        .primary(Entry::ascii(0x010f, "Nikon"));
    let report = Pipeline::default()
        .try_analyze(&fixtures::jpeg_with_tags(&tags))
        .unwrap();

    assert!(report.findings.iter().all(|f| f.finding_type != "GPS Coordinates"));
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].risk, Severity::Low);
    assert_eq!(report.risk_assessment.level, RiskLevel::Low);
}

#[test]
fn test_batch_and_rendering() {
    let items = vec![
        ("clean.jpg".to_string(), fixtures::plain_jpeg(8, 8)),
        ("broken.jpg".to_string(), b"nope".to_vec()),
        (
            "tagged.jpg".to_string(),
            fixtures::jpeg_with_tags(&fixtures::privacy_heavy_tags()),
        ),
    ];
    let results = analyze_batch(items);
    assert_eq!(results.len(), 3);
    assert!(!results[0].response.is_error());
    assert!(results[1].response.is_error());
    assert_eq!(
        results[2].response.report().unwrap().risk_assessment.level,
        RiskLevel::Critical
    );

    let labelled: Vec<LabelledResponse> = results
        .into_iter()
        .map(|item| LabelledResponse::new(item.path_or_id, item.response))
        .collect();

    let json = ReportGenerator::render(&labelled, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["source"], "clean.jpg");
    assert_eq!(value[0]["risk_assessment"]["level"], "MINIMAL");
    assert!(value[1]["error"].is_string());
    assert_eq!(value[2]["findings"][0]["risk"], "CRITICAL");

    let text = ReportGenerator::render(&labelled, ReportFormat::PlainText).unwrap();
    assert!(text.contains("Map: https://www.openstreetmap.org/?mlat=40.446111&mlon=-79.982222"));

    let md = ReportGenerator::render(&labelled, ReportFormat::Markdown).unwrap();
    assert!(md.contains("## broken.jpg"));
    assert!(md.contains("| CRITICAL | GPS Coordinates | Location |"));
}
