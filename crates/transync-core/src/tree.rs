//! Tagged tree model shared by schemas, persisted files and merge output.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// A single node in a translation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested named children.
    Group(Group),
    /// A translated string, or `None` when the translation is still missing.
    Leaf(Option<String>),
    /// A persisted value that is neither a string, null nor an object.
    Foreign(Value),
}

impl Node {
    /// Build a string leaf.
    pub fn leaf(value: impl Into<String>) -> Self {
        Node::Leaf(Some(value.into()))
    }

    /// Build a missing (null) leaf.
    pub fn null() -> Self {
        Node::Leaf(None)
    }

    /// Normalize an untrusted JSON value into a node.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Node::Group(Group::from_map(map)),
            Value::String(text) => Node::Leaf(Some(text.clone())),
            Value::Null => Node::Leaf(None),
            other => Node::Foreign(other.clone()),
        }
    }

    /// Convert back to JSON. Missing leaves are written as explicit `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Group(group) => group.to_value(),
            Node::Leaf(Some(text)) => Value::String(text.clone()),
            Node::Leaf(None) => Value::Null,
            Node::Foreign(value) => value.clone(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Leaf text, if this is a non-null leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Leaf(Some(text)) => Some(text),
            _ => None,
        }
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// Ordered mapping of keys to child nodes.
///
/// Keys are kept sorted so serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    children: BTreeMap<String, Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a persisted JSON document into a group.
    ///
    /// Anything other than an object at the root yields an empty group.
    pub fn from_persisted(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::new(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let children = map
            .iter()
            .map(|(key, value)| (key.clone(), Node::from_value(value)))
            .collect();
        Self { children }
    }

    pub fn to_value(&self) -> Value {
        let map = self
            .children
            .iter()
            .map(|(key, node)| (key.clone(), node.to_value()))
            .collect::<Map<String, Value>>();
        Value::Object(map)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.children.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Insert a child, returning the previous node at that key.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.children.insert(key.into(), node.into())
    }

    /// Look up a node by dotted path (`"bird.budgie"`).
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.children.get(first)?;
        for segment in segments {
            current = current.as_group()?.children.get(segment)?;
        }
        Some(current)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.children.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Node> {
        self.children.iter_mut()
    }

    /// Render as 2-space indented JSON.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_value())
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl FromIterator<(String, Node)> for Group {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}
