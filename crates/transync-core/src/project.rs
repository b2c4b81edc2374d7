//! Schema projections used as merge targets.

use crate::schema::Schema;
use crate::tree::{Group, Node};

/// Which variant of the schema a language starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Leaves keep their default-language text.
    AsDefault,
    /// Every leaf is replaced by null; groups are preserved.
    Blanked,
}

impl Projection {
    /// The default language starts from its own text, every other language
    /// from a blank copy.
    pub fn for_language(is_default_language: bool) -> Self {
        if is_default_language {
            Projection::AsDefault
        } else {
            Projection::Blanked
        }
    }
}

/// Produce an owned deep copy of the schema in the requested mode.
pub fn project(schema: &Schema, mode: Projection) -> Group {
    match mode {
        Projection::AsDefault => schema.root().clone(),
        Projection::Blanked => blank_group(schema.root()),
    }
}

fn blank_group(group: &Group) -> Group {
    group
        .iter()
        .map(|(key, node)| {
            let blank = match node {
                Node::Group(child) => Node::Group(blank_group(child)),
                _ => Node::null(),
            };
            (key.clone(), blank)
        })
        .collect()
}
