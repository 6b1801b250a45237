use once_cell::sync::Lazy;
use regex::Regex;

struct TakeoverSignature {
    service: &'static str,
    cname_patterns: &'static [&'static str],
    body_patterns: &'static [&'static str],
}

static SIGNATURES: &[TakeoverSignature] = &[
    TakeoverSignature { service: "AWS S3", cname_patterns: &["s3.amazonaws.com", "s3-website"], body_patterns: &["The specified bucket does not exist"] },
    TakeoverSignature { service: "GitHub Pages", cname_patterns: &["github.io"], body_patterns: &["There isn't a GitHub Pages site here", "For root URLs (like http://example.com/) you must provide an index.html file"] },
    TakeoverSignature { service: "Heroku", cname_patterns: &["herokuapp.com"], body_patterns: &["Heroku | No such app", "<title>No such app</title>"] },
    TakeoverSignature { service: "Microsoft Azure", cname_patterns: &["azurewebsites.net", "cloudapp.net", "core.windows.net"], body_patterns: &["404 Web Site not found"] },
    TakeoverSignature { service: "Bitbucket", cname_patterns: &["bitbucket.io"], body_patterns: &["Repository not found"] },
    TakeoverSignature { service: "Shopify", cname_patterns: &["myshopify.com"], body_patterns: &["Sorry, this shop is currently unavailable"] },
    TakeoverSignature { service: "Zendesk", cname_patterns: &["zendesk.com"], body_patterns: &["Help Center Closed"] },
    TakeoverSignature { service: "Fastly", cname_patterns: &["fastly.net"], body_patterns: &["Fastly error: unknown domain"] },
    TakeoverSignature { service: "Pantheon", cname_patterns: &["pantheonsite.io"], body_patterns: &["The gods are wise, but do not know of the site which you seek"] },
    TakeoverSignature { service: "Tumblr", cname_patterns: &["domains.tumblr.com"], body_patterns: &["Whatever you were looking for doesn't currently exist at this address"] },
    TakeoverSignature { service: "WordPress", cname_patterns: &["wordpress.com"], body_patterns: &["Do you want to register *.wordpress.com?"] },
];

static BODY_REGEXES: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    SIGNATURES
        .iter()
        .map(|sig| sig.body_patterns.iter().map(|p| Regex::new(p).unwrap()).collect())
        .collect()
});

/// Returns the takeover service name iff the CNAME substring-matches one of
/// its known patterns AND the response body matches one of its fingerprints.
pub fn check_takeover(cname: &str, body: &str) -> Option<&'static str> {
    if cname.is_empty() {
        return None;
    }
    let cname = cname.to_lowercase();

    for (i, sig) in SIGNATURES.iter().enumerate() {
        let cname_match = sig.cname_patterns.iter().any(|p| cname.contains(p));
        if !cname_match {
            continue;
        }
        if body.is_empty() {
            continue;
        }
        if BODY_REGEXES[i].iter().any(|re| re.is_match(body)) {
            return Some(sig.service);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_s3_takeover() {
        let cname = "sub.s3.amazonaws.com";
        let body = "The specified bucket does not exist";
        assert_eq!(check_takeover(cname, body), Some("AWS S3"));
    }

    #[test]
    fn requires_both_cname_and_body_match() {
        assert_eq!(check_takeover("sub.s3.amazonaws.com", "<html>hello</html>"), None);
        assert_eq!(check_takeover("google.com", "The specified bucket does not exist"), None);
    }

    #[test]
    fn no_cname_is_never_a_takeover() {
        assert_eq!(check_takeover("", "<html>"), None);
    }
}
