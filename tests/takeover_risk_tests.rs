use subrecon::analysis::{check_takeover, score};

#[test]
fn dangling_s3_bucket_is_flagged_as_a_takeover() {
    let cname = "assets.s3.amazonaws.com";
    let body = "<html>The specified bucket does not exist</html>";

    let service = check_takeover(cname, body);
    assert_eq!(service, Some("AWS S3"));

    let (points, reasons) = score("assets.example.com", 404, false, service);
    assert!(points >= 10, "takeover must dominate the score, got {points}");
    assert!(reasons.iter().any(|r| r.contains("AWS S3")));
}

#[test]
fn cname_match_without_body_fingerprint_is_not_a_takeover() {
    assert_eq!(check_takeover("assets.s3.amazonaws.com", "<html>Welcome</html>"), None);
}

#[test]
fn body_fingerprint_without_cname_match_is_not_a_takeover() {
    assert_eq!(check_takeover("google.com", "The specified bucket does not exist"), None);
}
