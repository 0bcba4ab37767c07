// src/report/scanner.rs
// =============================================================================
// This module finds http:// and https:// URLs inside free text.
//
// Descriptions in a LibGuides export are HTML, and often HTML that has been
// encoded twice, so a link can show up as any of:
//
//   <a href="https://example.edu">         (plain markup)
//   &lt;a href=&quot;https://example.edu&quot;&gt;   (escaped markup)
//   Visit https://example.edu today.       (bare text)
//
// We don't parse the HTML. We look for the URL pattern, then trim whatever
// markup or punctuation got caught on the end.
//
// Rust concepts:
// - LazyLock: Compile the regex once, the first time it is used
// - Iterators: find_iter walks the matches left to right
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

// A scheme, then everything up to whitespace or a character that ends an
// attribute value or a markup tag
const HTTP_LINK_PATTERN: &str = r#"(?i)https?://[^\s"'<>()`]+"#;

static HTTP_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HTTP_LINK_PATTERN).expect("Failed to compile HTTP link regex"));

// Escaped forms of the characters the pattern already stops at, encoded any
// number of times (&quot;, &amp;quot;, &amp;amp;quot;, ...). A bare &amp;
// is not listed: it separates query string parameters.
const ESCAPED_TERMINATOR_PATTERN: &str = r"(?i)&(?:amp;)*(?:quot|lt|gt|apos|#34|#39|#x22|#x27);";

static ESCAPED_TERMINATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ESCAPED_TERMINATOR_PATTERN).expect("Failed to compile escaped terminator regex")
});

// Sentence punctuation trimmed off a link that ends a word
const TRAILING_PUNCTUATION: &[char] = &['.', ','];

// Extracts every http/https URL from a block of text
//
// Parameters:
//   text: free text, possibly containing (escaped) HTML
//
// Returns: the URLs in the order they appear; the count is links.len()
//
// Every occurrence is returned, duplicates and a bare "http://" included.
//
// Example:
//   "see http://a.edu and http://b.edu" -> ["http://a.edu", "http://b.edu"]
pub fn extract_http_links(text: &str) -> Vec<String> {
    HTTP_LINK_RE
        .find_iter(text)
        .map(|m| {
            let ends_word = text[m.end()..].chars().next().map_or(true, char::is_whitespace);
            clean_match(m.as_str(), ends_word)
        })
        .collect()
}

// Cuts a raw regex match at the first escaped terminator
//
// Parameters:
//   raw: the regex match
//   ends_word: the match is followed by whitespace or the end of the text
//
// A trailing "." or "," is only trimmed when the link ends a word, as in
// "Visit https://example.edu." at the end of a sentence.
fn clean_match(raw: &str, ends_word: bool) -> String {
    match ESCAPED_TERMINATOR_RE.find(raw) {
        Some(entity) => raw[..entity.start()].to_string(),
        None if ends_word => raw.trim_end_matches(TRAILING_PUNCTUATION).to_string(),
        None => raw.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why LazyLock?
//    - Compiling a regex is slow compared to running it
//    - A static LazyLock compiles it once, on first use, and shares it
//    - The expect() can only fire if the pattern constant itself is broken
//
// 2. Why map and not filter_map?
//    - Every match is one link, even a malformed one like "http://"
//    - Dropping matches would change the "i of n" numbering in the report
//
// 3. Why slice with raw[..entity.start()] and text[m.end()..]?
//    - Both positions come from a regex match, so they always fall on a
//      character boundary and the slice can't panic
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links() {
        let links = extract_http_links("No links here, just <b>bold</b> text.");
        assert!(links.is_empty());
        assert_eq!(links.len(), 0);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_http_links("").is_empty());
    }

    #[test]
    fn test_bare_links_in_order() {
        let links = extract_http_links("see http://a.edu and http://b.edu");
        assert_eq!(links, vec!["http://a.edu", "http://b.edu"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let links = extract_http_links("https://a.edu https://a.edu");
        assert_eq!(links, vec!["https://a.edu", "https://a.edu"]);
    }

    #[test]
    fn test_anchor_markup() {
        let html = r#"<p>Try <a href="https://www.jstor.org/">JSTOR</a> (full text).</p>"#;
        let links = extract_http_links(html);
        assert_eq!(links, vec!["https://www.jstor.org/"]);
    }

    #[test]
    fn test_escaped_markup() {
        let html = "&lt;a href=&quot;https://example.edu/db&quot;&gt;DB&lt;/a&gt;";
        let links = extract_http_links(html);
        assert_eq!(links, vec!["https://example.edu/db"]);
    }

    #[test]
    fn test_double_encoded_markup() {
        let html = "&amp;lt;a href=&amp;quot;https://x.edu/db&amp;quot;&amp;gt;DB&amp;lt;/a&amp;gt; next";
        let links = extract_http_links(html);
        assert_eq!(links, vec!["https://x.edu/db"]);
    }

    #[test]
    fn test_numeric_entity_markup() {
        assert_eq!(extract_http_links("href=&#x22;https://x.edu/h&#x22;&gt;"), vec!["https://x.edu/h"]);
        assert_eq!(extract_http_links("href=&#39;https://x.edu/s&#39; "), vec!["https://x.edu/s"]);
        assert_eq!(extract_http_links("&LT;https://x.edu/u&GT;"), vec!["https://x.edu/u"]);
    }

    #[test]
    fn test_ampersand_entity_is_kept() {
        let html = r#"<a href="https://example.edu/search?q=rust&amp;page=2">next</a>"#;
        let links = extract_http_links(html);
        assert_eq!(links, vec!["https://example.edu/search?q=rust&amp;page=2"]);
    }

    #[test]
    fn test_parenthesis_ends_link() {
        let links = extract_http_links("(see https://example.edu/guide)");
        assert_eq!(links, vec!["https://example.edu/guide"]);
    }

    #[test]
    fn test_trailing_period_trimmed() {
        let links = extract_http_links("Visit https://example.edu.");
        assert_eq!(links, vec!["https://example.edu"]);
    }

    #[test]
    fn test_trailing_comma_before_space_trimmed() {
        let links = extract_http_links("https://c.edu, https://d.edu");
        assert_eq!(links, vec!["https://c.edu", "https://d.edu"]);
    }

    #[test]
    fn test_other_trailing_characters_kept() {
        let links = extract_http_links("https://x.edu/search? https://x.edu/a;b! https://x.edu/v1:");
        assert_eq!(links, vec!["https://x.edu/search?", "https://x.edu/a;b!", "https://x.edu/v1:"]);
    }

    #[test]
    fn test_period_inside_attribute_kept() {
        let links = extract_http_links(r#"<a href="https://x.edu/dir.">dir</a>"#);
        assert_eq!(links, vec!["https://x.edu/dir."]);
    }

    #[test]
    fn test_scheme_only_is_counted() {
        let links = extract_http_links("&lt;a href=&quot;http://&quot;&gt; http://x.edu");
        assert_eq!(links, vec!["http://", "http://x.edu"]);
    }

    #[test]
    fn test_every_bare_scheme_is_an_entry() {
        let links = extract_http_links("http:// and https://");
        assert_eq!(links, vec!["http://", "https://"]);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_uppercase_scheme() {
        let links = extract_http_links("HTTPS://EXAMPLE.EDU/A");
        assert_eq!(links, vec!["HTTPS://EXAMPLE.EDU/A"]);
    }

    #[test]
    fn test_ignores_other_schemes() {
        let links = extract_http_links(r#"<a href="mailto:x@example.edu">mail</a> ftp://files.example.edu"#);
        assert!(links.is_empty());
    }
}
