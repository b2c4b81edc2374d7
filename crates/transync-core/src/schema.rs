//! Canonical translation schema and its builder.

use crate::tree::{Group, Node};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while assembling a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema root must be an object of groups and leaves.
    #[error("schema root must be an object")]
    NotAnObject,
    /// A value other than a string or object was found.
    #[error("invalid schema value at {path}: expected string or object, found {found}")]
    InvalidValue { path: String, found: &'static str },
    /// Keys must be non-empty and must not contain `.`.
    #[error("invalid schema key at {path}")]
    InvalidKey { path: String },
    /// A path was defined both as a leaf and as a group, or twice as a leaf.
    #[error("conflicting schema definition at {path}")]
    Conflict { path: String },
}

/// The canonical translation schema.
///
/// Every leaf holds the default-language string; groups nest arbitrarily.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: Group,
}

impl Schema {
    /// Start building a schema in code.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Build a schema from a JSON document, rejecting anything that is not a
    /// string or a nested object.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let Value::Object(map) = value else {
            return Err(SchemaError::NotAnObject);
        };
        let mut root = Group::new();
        for (key, child) in map {
            root.insert(key.clone(), schema_node(child, key, key)?);
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Default-language text at a dotted path.
    pub fn default_text(&self, path: &str) -> Option<&str> {
        self.root.lookup(path).and_then(Node::as_str)
    }

    /// Replace every leaf through `f`, which receives the dotted path and the
    /// current text.
    pub(crate) fn map_leaves(&self, f: &mut impl FnMut(&str, &str) -> String) -> Self {
        Self {
            root: map_group(&self.root, "", f),
        }
    }

    pub fn to_value(&self) -> Value {
        self.root.to_value()
    }
}

fn map_group(group: &Group, prefix: &str, f: &mut impl FnMut(&str, &str) -> String) -> Group {
    group
        .iter()
        .map(|(key, node)| {
            let path = join_path(prefix, key);
            let mapped = match node {
                Node::Group(child) => Node::Group(map_group(child, &path, f)),
                Node::Leaf(Some(text)) => Node::leaf(f(&path, text)),
                // Schemas are built with string leaves only.
                other => other.clone(),
            };
            (key.clone(), mapped)
        })
        .collect()
}

fn schema_node(value: &Value, key: &str, path: &str) -> Result<Node, SchemaError> {
    if key.is_empty() || key.contains('.') {
        return Err(SchemaError::InvalidKey {
            path: path.to_string(),
        });
    }
    match value {
        Value::String(text) => Ok(Node::leaf(text.clone())),
        Value::Object(map) => {
            let mut group = Group::new();
            for (key, child) in map {
                let child = schema_node(child, key, &join_path(path, key))?;
                group.insert(key.clone(), child);
            }
            Ok(Node::Group(group))
        }
        other => Err(SchemaError::InvalidValue {
            path: path.to_string(),
            found: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Join a key onto a dotted prefix.
pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Builder for schemas defined in code.
///
/// ```
/// use transync_core::Schema;
///
/// let schema = Schema::builder()
///     .leaf("T_ANIMALS.bird.budgie", "My budgie is small but cuddly.")
///     .leaf("T_SENTENCES.myBirds_one", "I own an adorable bird.")
///     .build()
///     .unwrap();
/// assert_eq!(
///     schema.default_text("T_ANIMALS.bird.budgie"),
///     Some("My budgie is small but cuddly.")
/// );
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    root: Group,
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    /// Define a leaf at a dotted path, creating intermediate groups.
    pub fn leaf(mut self, path: &str, text: impl Into<String>) -> Self {
        if self.error.is_none() {
            if let Err(err) = insert_path(&mut self.root, path, Node::leaf(text)) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Define an empty group at a dotted path.
    pub fn group(mut self, path: &str) -> Self {
        if self.error.is_none() {
            if let Err(err) = insert_path(&mut self.root, path, Node::Group(Group::new())) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Finish the schema, reporting the first definition error.
    pub fn build(self) -> Result<Schema, SchemaError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Schema { root: self.root }),
        }
    }
}

fn insert_path(root: &mut Group, path: &str, node: Node) -> Result<(), SchemaError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(SchemaError::InvalidKey {
            path: path.to_string(),
        });
    }
    let conflict = || SchemaError::Conflict {
        path: path.to_string(),
    };

    let (last, parents) = segments.split_last().ok_or_else(conflict)?;
    let mut current = root;
    for segment in parents {
        if !current.contains_key(segment) {
            current.insert(*segment, Group::new());
        }
        current = match current.get_mut(segment) {
            Some(Node::Group(group)) => group,
            _ => return Err(conflict()),
        };
    }

    let existing = current.get(last).map(Node::is_group);
    match (existing, node.is_group()) {
        (None, _) => {
            current.insert(*last, node);
            Ok(())
        }
        // Re-declaring an existing group is harmless.
        (Some(true), true) => Ok(()),
        _ => Err(conflict()),
    }
}
