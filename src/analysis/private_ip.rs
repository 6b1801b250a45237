use std::net::IpAddr;

/// RFC 1918 + loopback + link-local ranges, matched against `ip_str`. Returns
/// false for `"-"`/empty (unresolved) and for any address that fails to parse.
pub fn is_private_ip(ip_str: &str) -> bool {
    if ip_str.is_empty() || ip_str == "-" {
        return false;
    }
    let Ok(ip) = ip_str.parse::<IpAddr>() else {
        return false;
    };
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_private_ranges() {
        for ip in ["192.168.1.5", "10.0.0.1", "172.16.0.5", "127.0.0.1", "169.254.1.1"] {
            assert!(is_private_ip(ip), "{ip} should be private");
        }
    }

    #[test]
    fn classifies_public_ranges() {
        for ip in ["8.8.8.8", "1.1.1.1"] {
            assert!(!is_private_ip(ip), "{ip} should be public");
        }
    }

    #[test]
    fn unresolved_marker_is_not_private() {
        assert!(!is_private_ip("-"));
        assert!(!is_private_ip(""));
    }
}
