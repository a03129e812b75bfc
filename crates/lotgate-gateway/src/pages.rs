//! Minimal server-rendered pages.
//!
//! A handful of small inline-HTML pages: home, the two forms, and the
//! parking status view. Notices arrive as a `notice` query parameter on
//! redirects and render in the page shell.

use lotgate_verify::Verification;

/// Percent-encode a notice for use in a redirect query string.
///
/// Covers the characters notices actually contain; not a general URL
/// encoder.
pub fn encode_notice(notice: &str) -> String {
    let mut out = String::with_capacity(notice.len());
    for b in notice.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Escape text interpolated into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn shell(title: &str, body: &str, notice: Option<&str>) -> String {
    let notice_html = notice
        .map(|n| format!(r#"<p class="notice">{}</p>"#, escape(n)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title} - Lotgate</title></head>
<body>
<h1>{title}</h1>
{notice_html}
{body}
</body>
</html>
"#
    )
}

/// Home page: current matched identity plus navigation.
pub fn index(verification: &Verification, notice: Option<&str>) -> String {
    let status = match &verification.identity {
        Some(identity) => format!("<p>Currently matched: <b>{}</b></p>", escape(&identity.name)),
        None => "<p>No user currently matched.</p>".to_string(),
    };
    let body = format!(
        r#"{status}
<ul>
<li><a href="/verify_user">Verify user</a></li>
<li><a href="/add_user">Add user</a></li>
<li><a href="/parking_status">Parking status</a></li>
</ul>"#
    );
    shell("Parking Gateway", &body, notice)
}

/// Manual tag verification form.
pub fn verify_user(notice: Option<&str>) -> String {
    let body = r#"<form method="post" action="/verify_user_action">
<label>RFID tag: <input type="text" name="rfid_tag"></label>
<button type="submit">Verify</button>
</form>
<p><a href="/scan_rfid_arduino">Scan via remote reader</a></p>"#;
    shell("Verify User", body, notice)
}

/// User registration form.
pub fn add_user(notice: Option<&str>) -> String {
    let body = r#"<form method="post" action="/add_user_action">
<label>RFID tag: <input type="text" name="rfid_tag"></label>
<label>Name: <input type="text" name="name"></label>
<button type="submit">Add</button>
</form>"#;
    shell("Add User", body, notice)
}

/// Post-verification status page with the gate control.
pub fn parking_status(verification: &Verification, notice: Option<&str>) -> String {
    let status = match &verification.identity {
        Some(identity) => format!("<p>Welcome, <b>{}</b>!</p>", escape(&identity.name)),
        None => "<p>No verified user.</p>".to_string(),
    };
    let body = format!(
        r#"{status}
<form method="post" action="/open_gate"><button type="submit">Open gate</button></form>
<p><a href="/">Home</a></p>"#
    );
    shell("Parking Status", &body, notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotgate_core::Identity;

    #[test]
    fn test_encode_notice() {
        assert_eq!(encode_notice("User added!"), "User+added%21");
        assert_eq!(encode_notice("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_index_shows_matched_identity() {
        let verification = Verification {
            verified: true,
            identity: Some(Identity::new("Alice")),
        };
        let html = index(&verification, None);
        assert!(html.contains("Alice"));
    }

    #[test]
    fn test_notice_is_escaped() {
        let verification = Verification {
            verified: false,
            identity: None,
        };
        let html = index(&verification, Some("<script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
