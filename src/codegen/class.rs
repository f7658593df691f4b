use super::{DialectRenderer, INDENT};
use crate::ir::Member;

/// `class Name(TypedDict):`
pub struct TypedDictClass;

/// `@dataclass` + `class Name:`
pub struct Dataclass;

/// `class Name(BaseModel):`
pub struct PydanticModel;

impl DialectRenderer for TypedDictClass {
    fn typing_imports(&self) -> &'static [&'static str] { &["TypedDict"] }

    fn render(&self, name: &str, members: &[Member]) -> Vec<String> {
        class_lines(vec![format!("class {name}(TypedDict):")], members)
    }
}

impl DialectRenderer for Dataclass {
    fn module_imports(&self) -> &'static [&'static str] { &["from dataclasses import dataclass"] }

    fn render(&self, name: &str, members: &[Member]) -> Vec<String> {
        class_lines(vec!["@dataclass".to_string(), format!("class {name}:")], members)
    }
}

impl DialectRenderer for PydanticModel {
    fn module_imports(&self) -> &'static [&'static str] { &["from pydantic import BaseModel"] }

    fn render(&self, name: &str, members: &[Member]) -> Vec<String> {
        class_lines(vec![format!("class {name}(BaseModel):")], members)
    }
}

fn class_lines(mut lines: Vec<String>, members: &[Member]) -> Vec<String> {
    if members.is_empty() {
        // a class body cannot be empty
        lines.push(format!("{INDENT}pass"));
    }
    for m in members {
        lines.push(format!("{INDENT}{}: {}", m.name, m.ty));
    }
    lines
}
