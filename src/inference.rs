//! Single-document schema inference.
//!
//! Walk one JSON value tree, derive a type for every property, collapse
//! structurally identical objects into one named declaration, and render the
//! declarations in discovery order (children before the parent that uses
//! them).
//!
//! Design notes:
//! - Object shapes are keyed by their sorted (property, type fingerprint)
//!   pairs, so property order never matters.
//! - A parent only folds in the child's 64-bit fingerprint (XOR of per-member
//!   hashes); two different nested shapes colliding there is an accepted risk.
//! - Arrays are typed by their first element only.
//! - All mutable state lives in a per-call [`Run`]; a [`Converter`] can be
//!   shared freely across threads.
pub mod naming;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::case::to_pascal_case;
use crate::codegen::{self, DialectRenderer, Usage};
use crate::error::{ConvertError, ConvertResult};
use crate::ir::{Declaration, Fingerprint, JsonKind, Member, TypeRef};
use crate::options::{Config, NumericMode};
use naming::NameTable;

/// Canonical, order-independent object shape.
type Shape = BTreeMap<String, Fingerprint>;

// ------------------------------- Front API -------------------------------- //

#[derive(Debug, Clone, Copy, Default)]
pub struct Converter { config: Config }

impl Converter {
    pub fn new(config: Config) -> Self { Self { config } }

    pub fn config(&self) -> &Config { &self.config }

    /// Convert JSON text to Python source. Never fails: on error the error
    /// message is returned in place of the document.
    pub fn convert(&self, json: &str) -> String {
        self.try_convert(json).unwrap_or_else(|error| {
            debug!(%error, "conversion failed");
            error.to_string()
        })
    }

    pub fn try_convert(&self, json: &str) -> ConvertResult<String> {
        let run = self.run(json)?;
        Ok(run.into_document())
    }

    /// The derived declarations, in output order.
    pub fn declarations(&self, json: &str) -> ConvertResult<Vec<Declaration>> {
        let run = self.run(json)?;
        Ok(run.declarations.into_values().collect())
    }

    fn run(&self, json: &str) -> ConvertResult<Run<'_>> {
        let value: Value = crate::path_de::from_lenient_str(json)?;
        let Value::Object(root) = &value else {
            return Err(ConvertError::RootNotObject { found: kind_of(&value).describe() });
        };
        let root_name = naming::root_name(json);
        let mut run = Run::new(&self.config);
        let (name, fingerprint) = run.object(root, &root_name);
        debug!(root = %name, %fingerprint, declarations = run.declarations.len(), "schema derived");
        Ok(run)
    }
}

// ------------------------------ Run state --------------------------------- //

/// State of one conversion; dropped once the document is built.
struct Run<'c> {
    config: &'c Config,
    renderer: &'static dyn DialectRenderer,
    declarations: IndexMap<Shape, Declaration>,
    names: NameTable,
    usage: Usage,
}

impl<'c> Run<'c> {
    fn new(config: &'c Config) -> Self {
        Self {
            config,
            renderer: codegen::renderer_for(config.dialect),
            declarations: IndexMap::new(),
            names: NameTable::new(config.numeric == NumericMode::NamedAlias),
            usage: Usage::default(),
        }
    }

    /// Derive (or reuse) the declaration for an object; returns its name and
    /// fingerprint.
    fn object(&mut self, map: &Map<String, Value>, candidate: &str) -> (String, Fingerprint) {
        let mut members = Vec::with_capacity(map.len());
        let mut shape = Shape::new();
        let mut fingerprint = Fingerprint::default();

        for (key, value) in map {
            let (ty, member_fp) = self.member(key, value);
            fingerprint = fingerprint.xor(Fingerprint::of(&(key.as_str(), member_fp)));
            shape.insert(key.clone(), member_fp);
            members.push(Member { name: key.clone(), ty });
        }

        if let Some(existing) = self.declarations.get(&shape) {
            debug!(candidate, reused = %existing.name, "identical shape already declared");
            return (existing.name.clone(), existing.fingerprint);
        }

        let name = self.names.claim(candidate);
        trace!(candidate, %name, %fingerprint, "declaring");
        let body = codegen::body_text(
            &self.renderer.render(&name, &members),
            self.config.line_ending.as_str(),
        );
        self.declarations.insert(shape, Declaration {
            name: name.clone(),
            fingerprint,
            members,
            body,
        });
        (name, fingerprint)
    }

    fn member(&mut self, key: &str, value: &Value) -> (TypeRef, Fingerprint) {
        match value {
            Value::Object(map) => {
                let (name, fp) = self.object(map, &to_pascal_case(key));
                (TypeRef::Named(name), fp)
            }
            Value::Array(items) => match items.first() {
                None => (TypeRef::List(None), Fingerprint::of(&JsonKind::Array)),
                Some(Value::Object(map)) => {
                    let candidate = format!("{}Item", to_pascal_case(key));
                    let (name, fp) = self.object(map, &candidate);
                    (list_of(TypeRef::Named(name)), Fingerprint::of(&(JsonKind::Array, fp)))
                }
                Some(first) => {
                    let kind = kind_of(first);
                    let item_fp = Fingerprint::of(&kind);
                    (list_of(self.keyword(kind)), Fingerprint::of(&(JsonKind::Array, item_fp)))
                }
            },
            scalar => {
                let kind = kind_of(scalar);
                (self.keyword(kind), Fingerprint::of(&kind))
            }
        }
    }

    /// Type keyword for a non-object value kind. Objects are routed to
    /// [`Run::object`] by [`Run::member`] and never reach this point.
    fn keyword(&mut self, kind: JsonKind) -> TypeRef {
        match kind {
            JsonKind::String => TypeRef::Str,
            JsonKind::Bool => TypeRef::Bool,
            JsonKind::Array => TypeRef::List(None),
            JsonKind::Number => {
                if self.config.numeric == NumericMode::NamedAlias {
                    self.usage.number_alias = true;
                }
                TypeRef::Number(self.config.numeric)
            }
            JsonKind::Null => {
                self.usage.any = true;
                TypeRef::Any
            }
            JsonKind::Object => unreachable!("objects become declarations, not keywords"),
        }
    }

    fn into_document(self) -> String {
        codegen::assemble(
            self.renderer,
            self.usage,
            self.declarations.values(),
            self.config.line_ending.as_str(),
        )
    }
}

fn kind_of(value: &Value) -> JsonKind {
    match value {
        Value::Null => JsonKind::Null,
        Value::Bool(_) => JsonKind::Bool,
        Value::Number(_) => JsonKind::Number,
        Value::String(_) => JsonKind::String,
        Value::Array(_) => JsonKind::Array,
        Value::Object(_) => JsonKind::Object,
    }
}

fn list_of(item: TypeRef) -> TypeRef {
    TypeRef::List(Some(Box::new(item)))
}

// ------------------------------- Tests ------------------------------------ //
