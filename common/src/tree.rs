//! Pure recursive operations over the snippet forest.
//!
//! Every operation consumes a forest and returns a new one; callers install
//! the result as the current forest. Missing ids degrade to no-ops on the
//! affected branch rather than erroring.

use crate::{FileNode, Forest};

/// Depth-first search for the node with `id`, children in order.
pub fn find<'a>(forest: &'a [FileNode], id: &str) -> Option<&'a FileNode> {
    for node in forest {
        if node.id() == id {
            return Some(node);
        }
        if let FileNode::Folder { children, .. } = node {
            if let Some(found) = find(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Appends `new_node` to the end of the top-level sequence, or to the end of
/// the children of the folder with `parent_id` when one is given.
///
/// A `parent_id` that names a file or is absent from the forest leaves the
/// forest unchanged; callers validate the target before calling.
pub fn insert(forest: Forest, new_node: FileNode, parent_id: Option<&str>) -> Forest {
    let Some(parent_id) = parent_id else {
        let mut forest = forest;
        forest.push(new_node);
        return forest;
    };

    fn insert_into(nodes: Forest, parent_id: &str, new_node: &FileNode) -> Forest {
        nodes
            .into_iter()
            .map(|node| match node {
                FileNode::Folder { id, name, children } if id == parent_id => {
                    let mut children = children;
                    children.push(new_node.clone());
                    FileNode::Folder { id, name, children }
                }
                FileNode::Folder { id, name, children } => FileNode::Folder {
                    id,
                    name,
                    children: insert_into(children, parent_id, new_node),
                },
                file => file,
            })
            .collect()
    }

    insert_into(forest, parent_id, &new_node)
}

/// Replaces the content of the file with `file_id`. Folders and non-matching
/// files pass through unchanged.
pub fn update_content(forest: Forest, file_id: &str, new_content: &str) -> Forest {
    forest
        .into_iter()
        .map(|node| match node {
            FileNode::File { id, name, .. } if id == file_id => FileNode::File {
                id,
                name,
                content: new_content.to_string(),
            },
            FileNode::Folder { id, name, children } => FileNode::Folder {
                id,
                name,
                children: update_content(children, file_id, new_content),
            },
            file => file,
        })
        .collect()
}

/// Replaces the name of the node with `id`, file or folder.
pub fn rename(forest: Forest, target_id: &str, new_name: &str) -> Forest {
    forest
        .into_iter()
        .map(|node| match node {
            FileNode::File { id, content, .. } if id == target_id => FileNode::File {
                id,
                name: new_name.to_string(),
                content,
            },
            FileNode::Folder { id, children, .. } if id == target_id => FileNode::Folder {
                id,
                name: new_name.to_string(),
                children,
            },
            FileNode::Folder { id, name, children } => FileNode::Folder {
                id,
                name,
                children: rename(children, target_id, new_name),
            },
            file => file,
        })
        .collect()
}

/// Removes the node with `id` and its entire subtree. Siblings keep their
/// order.
pub fn delete(forest: Forest, target_id: &str) -> Forest {
    forest
        .into_iter()
        .filter_map(|node| {
            if node.id() == target_id {
                return None;
            }
            Some(match node {
                FileNode::Folder { id, name, children } => FileNode::Folder {
                    id,
                    name,
                    children: delete(children, target_id),
                },
                file => file,
            })
        })
        .collect()
}

/// Detaches the node with `source_id` and re-inserts it, either at the top
/// level (`target_folder_id` is `None`) or appended to the children of the
/// named folder.
///
/// The whole operation is a no-op when it would otherwise lose the detached
/// subtree: a `target_folder_id` that is missing or names a file, the source
/// itself, or one of the source's own descendants. An absent `source_id`
/// also leaves the forest unchanged.
pub fn move_node(forest: Forest, source_id: &str, target_folder_id: Option<&str>) -> Forest {
    if let Some(target_id) = target_folder_id {
        match find(&forest, target_id) {
            Some(target) if target.is_folder() => {}
            _ => return forest,
        }
        let Some(source) = find(&forest, source_id) else {
            return forest;
        };
        if source.id() == target_id {
            return forest;
        }
        if let FileNode::Folder { children, .. } = source {
            if find(children, target_id).is_some() {
                return forest;
            }
        }
    }

    fn detach(nodes: Forest, source_id: &str, taken: &mut Option<FileNode>) -> Forest {
        nodes
            .into_iter()
            .filter_map(|node| {
                if node.id() == source_id {
                    *taken = Some(node);
                    return None;
                }
                Some(match node {
                    FileNode::Folder { id, name, children } => FileNode::Folder {
                        id,
                        name,
                        children: detach(children, source_id, taken),
                    },
                    file => file,
                })
            })
            .collect()
    }

    let mut taken = None;
    let remaining = detach(forest, source_id, &mut taken);
    let Some(node) = taken else {
        return remaining;
    };
    insert(remaining, node, target_folder_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        vec![
            FileNode::Folder {
                id: "f1".into(),
                name: "utils".into(),
                children: vec![
                    FileNode::File {
                        id: "a".into(),
                        name: "a.js".into(),
                        content: "log(1)".into(),
                    },
                    FileNode::Folder {
                        id: "f2".into(),
                        name: "nested".into(),
                        children: vec![FileNode::file("b", "b.js")],
                    },
                ],
            },
            FileNode::file("c", "c.js"),
        ]
    }

    #[test]
    fn find_walks_depth_first() {
        let forest = sample();
        assert_eq!(find(&forest, "b").unwrap().name(), "b.js");
        assert_eq!(find(&forest, "c").unwrap().name(), "c.js");
        assert!(find(&forest, "missing").is_none());
    }

    #[test]
    fn insert_at_top_level_appends_last() {
        let forest = insert(sample(), FileNode::file("d", "d.js"), None);
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.last().unwrap().id(), "d");
    }

    #[test]
    fn insert_into_nested_folder_appends_last() {
        let forest = insert(sample(), FileNode::file("d", "d.js"), Some("f2"));
        let nested = find(&forest, "f2").unwrap();
        let children = nested.children().unwrap();
        assert_eq!(children.last().unwrap().id(), "d");
        assert_eq!(find(&forest, "d").unwrap().name(), "d.js");
    }

    #[test]
    fn insert_under_file_or_missing_parent_is_noop() {
        let forest = sample();
        assert_eq!(
            insert(forest.clone(), FileNode::file("d", "d.js"), Some("a")),
            forest
        );
        assert_eq!(
            insert(forest.clone(), FileNode::file("d", "d.js"), Some("nope")),
            forest
        );
    }

    #[test]
    fn delete_after_insert_restores_original() {
        let original = sample();
        let forest = insert(original.clone(), FileNode::file("d", "d.js"), None);
        assert_eq!(delete(forest, "d"), original);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let forest = sample();
        assert_eq!(delete(forest.clone(), "missing"), forest);
    }

    #[test]
    fn delete_folder_cascades_and_keeps_sibling_order() {
        let forest = delete(sample(), "f2");
        assert!(find(&forest, "f2").is_none());
        assert!(find(&forest, "b").is_none());
        let children = find(&forest, "f1").unwrap().children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id(), "a");
    }

    #[test]
    fn update_content_only_touches_the_named_file() {
        let forest = update_content(sample(), "b", "log(2)");
        assert_eq!(find(&forest, "b").unwrap().content(), Some("log(2)"));
        assert_eq!(find(&forest, "a").unwrap().content(), Some("log(1)"));
        // folder id passes through unchanged
        assert_eq!(update_content(sample(), "f1", "x"), sample());
    }

    #[test]
    fn rename_applies_to_files_and_folders() {
        let forest = rename(sample(), "f2", "renamed");
        assert_eq!(find(&forest, "f2").unwrap().name(), "renamed");
        let forest = rename(forest, "c", "c2.js");
        assert_eq!(find(&forest, "c").unwrap().name(), "c2.js");
    }

    #[test]
    fn move_file_into_folder_appends_to_children() {
        let forest = move_node(sample(), "c", Some("f2"));
        let children = find(&forest, "f2").unwrap().children().unwrap();
        assert_eq!(children.last().unwrap().id(), "c");
        // only one copy remains
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn move_to_top_level_appends_last() {
        let forest = move_node(sample(), "b", None);
        assert_eq!(forest.last().unwrap().id(), "b");
        assert!(find(&forest, "f2").unwrap().children().unwrap().is_empty());
    }

    #[test]
    fn move_missing_source_is_noop() {
        let forest = sample();
        assert_eq!(move_node(forest.clone(), "missing", Some("f1")), forest);
    }

    #[test]
    fn move_onto_file_or_missing_target_is_noop() {
        let forest = sample();
        assert_eq!(move_node(forest.clone(), "c", Some("a")), forest);
        assert_eq!(move_node(forest.clone(), "c", Some("missing")), forest);
    }

    #[test]
    fn move_into_own_descendant_is_noop() {
        let forest = sample();
        assert_eq!(move_node(forest.clone(), "f1", Some("f2")), forest);
        assert_eq!(move_node(forest.clone(), "f1", Some("f1")), forest);
    }
}
