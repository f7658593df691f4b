//! Python source generation: one renderer per output dialect, plus document
//! assembly (import header, optional number alias, declarations).
pub mod class;
pub mod functional;

use crate::ir::{ANY, Declaration, Member, NUMBER_ALIAS};
use crate::options::OutputDialect;

pub const INDENT: &str = "    ";

/// Plugin trait for rendering one declaration in a given Python dialect.
pub trait DialectRenderer: Sync {
    /// Full import lines the dialect needs (e.g. `from pydantic import BaseModel`).
    fn module_imports(&self) -> &'static [&'static str] { &[] }

    /// Names the dialect needs from `typing`.
    fn typing_imports(&self) -> &'static [&'static str] { &[] }

    /// Lines of one declaration, without line endings.
    fn render(&self, name: &str, members: &[Member]) -> Vec<String>;
}

pub fn renderer_for(dialect: OutputDialect) -> &'static dyn DialectRenderer {
    match dialect {
        OutputDialect::TypedDict => &class::TypedDictClass,
        OutputDialect::TypedDictFunctional => &functional::FunctionalTypedDict,
        OutputDialect::Dataclass => &class::Dataclass,
        OutputDialect::Pydantic => &class::PydanticModel,
    }
}

/// Join rendered lines into a declaration body. Every line, the last one
/// included, is terminated by `nl`.
pub fn body_text(lines: &[String], nl: &str) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push_str(nl);
    }
    out
}

/// Flags collected while walking the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usage {
    pub any: bool,
    pub number_alias: bool,
}

pub fn assemble<'a>(
    renderer: &dyn DialectRenderer,
    usage: Usage,
    declarations: impl IntoIterator<Item = &'a Declaration>,
    nl: &str,
) -> String {
    let mut lines: Vec<String> = renderer.module_imports().iter().map(|s| s.to_string()).collect();

    let mut typing: Vec<&str> = Vec::new();
    if usage.any {
        typing.push(ANY);
    }
    typing.extend(renderer.typing_imports());
    if !typing.is_empty() {
        lines.push(format!("from typing import {}", typing.join(", ")));
    }

    if !lines.is_empty() {
        lines.extend([String::new(), String::new()]);
    }

    if usage.number_alias {
        lines.push(format!("type {NUMBER_ALIAS} = int | float"));
        lines.push(String::new());
    }

    lines.extend(declarations.into_iter().map(|d| d.body.clone()));
    lines.join(nl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Fingerprint, TypeRef};

    fn decl(name: &str, renderer: &dyn DialectRenderer, nl: &str) -> Declaration {
        let members = vec![Member { name: "id".into(), ty: TypeRef::Str }];
        let body = body_text(&renderer.render(name, &members), nl);
        Declaration { name: name.into(), fingerprint: Fingerprint::default(), members, body }
    }

    #[test]
    fn header_merges_any_with_typed_dict() {
        let r = renderer_for(OutputDialect::TypedDict);
        let out = assemble(r, Usage { any: true, number_alias: false }, &[decl("A", r, "\n")], "\n");
        assert_eq!(out, "from typing import Any, TypedDict\n\n\nclass A(TypedDict):\n    id: str\n");
    }

    #[test]
    fn dataclass_header_puts_module_import_first() {
        let r = renderer_for(OutputDialect::Dataclass);
        let out = assemble(r, Usage { any: true, number_alias: false }, &[decl("A", r, "\n")], "\n");
        assert!(out.starts_with("from dataclasses import dataclass\nfrom typing import Any\n\n\n@dataclass\n"), "{out}");
    }

    #[test]
    fn pydantic_without_any_has_no_typing_import() {
        let r = renderer_for(OutputDialect::Pydantic);
        let out = assemble(r, Usage::default(), &[decl("A", r, "\n")], "\n");
        assert_eq!(out, "from pydantic import BaseModel\n\n\nclass A(BaseModel):\n    id: str\n");
    }

    #[test]
    fn alias_follows_imports() {
        let r = renderer_for(OutputDialect::TypedDict);
        let out = assemble(r, Usage { any: false, number_alias: true }, &[decl("A", r, "\n")], "\n");
        assert!(out.starts_with("from typing import TypedDict\n\n\ntype Number = int | float\n\nclass A"), "{out}");
    }

    #[test]
    fn declarations_are_concatenated_with_one_blank_line() {
        let r = renderer_for(OutputDialect::TypedDict);
        let out = assemble(r, Usage::default(), &[decl("A", r, "\r\n"), decl("B", r, "\r\n")], "\r\n");
        assert_eq!(out, "from typing import TypedDict\r\n\r\n\r\nclass A(TypedDict):\r\n    id: str\r\n\r\nclass B(TypedDict):\r\n    id: str\r\n");
        assert!(!out.replace("\r\n", "").contains('\n'), "{out:?}");
    }
}
