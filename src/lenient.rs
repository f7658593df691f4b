//! Permissive JSON pre-pass: blank out `//` / `/* */` comments and trailing
//! commas so the strict `serde_json` parser accepts the text.
//!
//! Every removed byte is replaced by a space (newlines are kept), so line and
//! column numbers in parser errors still point into the original text.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Strings are matched first so comment markers inside them are left alone.
static COMMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)"(?:[^"\\]|\\.)*"|//[^\n]*|/\*.*?\*/"#).expect("comment pattern")
});

/// A comma only counts as trailing when a value ends right before it (a
/// string, a literal or number, or a closing bracket). `[,]`, `{,}` and `1,,}`
/// are left for the parser to reject.
static TRAILING_COMMAS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"("(?:[^"\\]|\\.)*"|[\w\]}])(\s*),(\s*[}\]])|"(?:[^"\\]|\\.)*""#)
        .expect("trailing comma pattern")
});

pub fn strip(text: &str) -> String {
    let without_comments = COMMENTS.replace_all(text, |caps: &Captures| {
        let m = &caps[0];
        if m.starts_with('"') { m.to_string() } else { blank(m) }
    });
    // a match consumes its closing bracket, so `[[1,],]` needs a second pass
    let mut text = without_comments.into_owned();
    loop {
        let next = TRAILING_COMMAS
            .replace_all(&text, |caps: &Captures| match (caps.get(1), caps.get(2), caps.get(3)) {
                (Some(value), Some(gap), Some(close)) => {
                    format!("{}{} {}", value.as_str(), gap.as_str(), close.as_str())
                }
                _ => caps[0].to_string(),
            })
            .into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

fn blank(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' | '\r' => out.push(c),
            _ => out.extend(std::iter::repeat_n(' ', c.len_utf8())),
        }
    }
    out
}
