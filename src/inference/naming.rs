use std::collections::HashSet;

use crate::case::to_pascal_case;
use crate::ir::NUMBER_ALIAS;

pub const ROOT_NAME_BASE: &str = "JsonRootElement";

/// Root declaration name: `JsonRootElement`, or `JsonRootElement{n}` (n ≥ 2)
/// for the first candidate that does not occur anywhere in the raw input.
pub fn root_name(source: &str) -> String {
    let mut name = ROOT_NAME_BASE.to_string();
    let mut index = 1;
    while source.contains(&name) {
        index += 1;
        name = format!("{ROOT_NAME_BASE}{index}");
    }
    name
}

/// Names handed out during one conversion.
#[derive(Debug, Default)]
pub struct NameTable {
    taken: HashSet<String>,
    reserve_number_alias: bool,
}

impl NameTable {
    pub fn new(reserve_number_alias: bool) -> Self {
        Self { taken: HashSet::new(), reserve_number_alias }
    }

    fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name) || (self.reserve_number_alias && name == NUMBER_ALIAS)
    }

    /// PascalCase `candidate`, then append 2, 3, ... until the name is free.
    pub fn claim(&mut self, candidate: &str) -> String {
        let base = to_pascal_case(candidate);
        let mut name = base.clone();
        let mut index = 1;
        while self.is_taken(&name) {
            index += 1;
            name = format!("{base}{index}");
        }
        self.taken.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_name_avoids_raw_text() {
        assert_eq!(root_name(r#"{"a": 1}"#), "JsonRootElement");
        assert_eq!(root_name(r#"{"a": "JsonRootElement"}"#), "JsonRootElement2");
        assert_eq!(
            root_name(r#"{"JsonRootElement": {"x": "JsonRootElement2"}}"#),
            "JsonRootElement3"
        );
        // case sensitive, like the scan itself
        assert_eq!(root_name(r#"{"jsonRootElement": 1}"#), "JsonRootElement");
    }

    #[test]
    fn suffixes_count_up_from_two() {
        let mut names = NameTable::new(false);
        assert_eq!(names.claim("address"), "Address");
        assert_eq!(names.claim("Address"), "Address2");
        assert_eq!(names.claim("ADDRESS"), "Address3");
    }

    #[test]
    fn number_alias_is_reserved_only_when_used() {
        let mut names = NameTable::new(true);
        assert_eq!(names.claim("number"), "Number2");
        assert_eq!(names.claim("number"), "Number3");

        let mut names = NameTable::new(false);
        assert_eq!(names.claim("number"), "Number");
    }

    #[test]
    fn literal_suffix_does_not_collide() {
        let mut names = NameTable::new(false);
        assert_eq!(names.claim("item2"), "Item2");
        assert_eq!(names.claim("item"), "Item");
        assert_eq!(names.claim("item"), "Item3");
    }
}
