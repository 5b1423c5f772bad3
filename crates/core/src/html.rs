//! Minimal HTML escaping for user-submitted text.
//!
//! Feedback content is free text that gets embedded into email markup,
//! so the HTML metacharacters must be neutralized first.

/// Escape `&`, `<`, `>`, `"` and `'` for safe embedding in HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("it's"), "it&#x27;s");
    }

    #[test]
    fn unicode_is_preserved() {
        assert_eq!(escape("c'est cass\u{e9} \u{1F6A8}"), "c&#x27;est cass\u{e9} \u{1F6A8}");
    }
}
