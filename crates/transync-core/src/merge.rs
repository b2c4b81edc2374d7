//! Merge persisted translation trees into schema projections.

use crate::policy::MergePolicy;
use crate::tree::{Group, Node};
use log::trace;

/// Merge a persisted tree into a schema projection.
///
/// `target` must already be the projection matching `is_default_language`.
/// Unrecognized keys are added first, then existing translations are copied
/// over for non-default languages. The merge never fails: values whose shape
/// disagrees with the target are skipped.
pub fn merge(
    persisted: &Group,
    target: Group,
    policy: &MergePolicy,
    is_default_language: bool,
) -> Group {
    let mut working = target;

    if policy.keep_unrecognized_keys {
        keep_unrecognized_keys(persisted, &mut working);
    }

    if policy.keep_existing_translations && !is_default_language {
        keep_existing_translations(persisted, &mut working);
    }

    working
}

/// Copy keys present in `source` but missing from `target`, recursively.
///
/// Existing target entries are never overwritten. Non-object values are
/// copied as they are, including numbers and arrays.
pub fn keep_unrecognized_keys(source: &Group, target: &mut Group) {
    for (key, source_node) in source {
        match target.get_mut(key) {
            None => {
                let copied = match source_node {
                    Node::Group(source_group) => {
                        let mut fresh = Group::new();
                        keep_unrecognized_keys(source_group, &mut fresh);
                        Node::Group(fresh)
                    }
                    other => other.clone(),
                };
                target.insert(key.clone(), copied);
            }
            Some(Node::Group(target_group)) => {
                if let Node::Group(source_group) = source_node {
                    keep_unrecognized_keys(source_group, target_group);
                }
            }
            Some(_) => {}
        }
    }
}

/// Overwrite target leaves with the persisted value at the same path.
///
/// Only string/null values replace string/null values; groups recurse.
pub fn keep_existing_translations(source: &Group, target: &mut Group) {
    for (key, target_node) in target.iter_mut() {
        let Some(source_node) = source.get(key) else {
            continue;
        };

        match (target_node, source_node) {
            (Node::Group(target_group), Node::Group(source_group)) => {
                keep_existing_translations(source_group, target_group);
            }
            (Node::Leaf(target_value), Node::Leaf(source_value)) => {
                target_value.clone_from(source_value);
            }
            _ => {
                trace!("skipping persisted value with mismatched shape (key={key})");
            }
        }
    }
}
