use subrecon::model::Finding;
use subrecon::output::{write_csv, write_json, write_txt};

fn sample_finding() -> Finding {
    Finding {
        domain: "admin.example.com".to_string(),
        ip: "203.0.113.9".to_string(),
        status: "LIVE".to_string(),
        rtype: "A".to_string(),
        cname: String::new(),
        provider: "-".to_string(),
        http_status: 200,
        waf: String::new(),
        title: "Admin Portal".to_string(),
        content_length: 1200,
        location: String::new(),
        score: 6,
        risk_reasons: vec!["Auth/Admin".to_string()],
        is_takeover: false,
        takeover_service: String::new(),
    }
}

#[test]
fn json_output_round_trips_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("findings.json");
    write_json(&path, &[sample_finding()]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Finding> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].domain, "admin.example.com");
    assert_eq!(parsed[0].score, 6);
}

#[test]
fn csv_output_joins_risk_reasons_with_comma_space() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("findings.csv");
    write_csv(&path, &[sample_finding()]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("Domain,IP,Status"));
    let row = lines.next().unwrap();
    assert!(row.contains("admin.example.com"));
    assert!(row.contains("Auth/Admin"));
}

#[test]
fn txt_output_is_one_domain_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("findings.txt");
    write_txt(&path, &[sample_finding(), sample_finding()]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.lines().all(|l| l == "admin.example.com"));
}
