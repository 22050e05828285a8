//! Small helpers for building HTML by hand

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode a query-string component
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// `path` followed by the given query parameters, skipping absent ones
pub fn href(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.map(|value| format!("{}={}", key, encode_component(value))))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// An external link that opens in a new tab
pub fn external_link(url: &str, class: &str, label: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        class,
        escape(url),
        escape(label)
    )
}

/// Wrap a JSON-LD document in a script tag. `</` is escaped so text in the
/// document cannot close the tag.
pub fn json_ld(value: &serde_json::Value) -> String {
    let json = value.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>", json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("Kalender Hari Libur"), "Kalender Hari Libur");
    }

    #[test]
    fn test_href_skips_absent_params() {
        assert_eq!(href("/id/applications", &[]), "/id/applications");
        assert_eq!(
            href("/id/applications", &[("view", Some("list")), ("category", None)]),
            "/id/applications?view=list"
        );
        assert_eq!(
            href("/en/applications", &[("search", Some("data & budget"))]),
            "/en/applications?search=data+%26+budget"
        );
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let value = serde_json::json!({ "name": "</script><script>alert(1)" });
        let script = json_ld(&value);
        assert_eq!(script.matches("</script>").count(), 1);
    }
}
