use super::{DialectRenderer, INDENT};
use crate::ir::Member;

/// `Name = TypedDict('Name', { 'member': type, ... })`
///
/// Keys are string literals here, so members that are not Python
/// identifiers still come out as valid code.
pub struct FunctionalTypedDict;

impl DialectRenderer for FunctionalTypedDict {
    fn typing_imports(&self) -> &'static [&'static str] { &["TypedDict"] }

    fn render(&self, name: &str, members: &[Member]) -> Vec<String> {
        let head = format!("{name} = TypedDict({}, {{", py_str(name));
        if members.is_empty() {
            return vec![format!("{head}}})")];
        }
        let mut lines = vec![head];
        let last = members.len() - 1;
        for (i, m) in members.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            lines.push(format!("{INDENT}{}: {}{sep}", py_str(&m.name), m.ty));
        }
        lines.push("})".to_string());
        lines
    }
}

/// Single-quoted Python string literal.
fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
