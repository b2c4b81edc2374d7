//! Key-path derivation for runtime lookups.

use crate::schema::{Schema, join_path};
use crate::tree::{Group, Node};

/// Replace every leaf with the dotted path that leads to it.
///
/// `{"Group": {"key": "Value"}}` becomes `{"Group": {"key": "Group.key"}}`.
pub fn derive_key_paths(schema: &Schema) -> Schema {
    schema.map_leaves(&mut |path: &str, _: &str| path.to_string())
}

/// All leaf paths of the schema, in key order.
pub fn key_paths(schema: &Schema) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(schema.root(), "", &mut paths);
    paths
}

fn collect_paths(group: &Group, prefix: &str, paths: &mut Vec<String>) {
    for (key, node) in group {
        let path = join_path(prefix, key);
        match node {
            Node::Group(child) => collect_paths(child, &path, paths),
            _ => paths.push(path),
        }
    }
}
