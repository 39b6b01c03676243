//! Tree building - merge flat paths into the shared-prefix hierarchy.
//!
//! Paths that share a prefix sequence of segments share the same chain of
//! nodes up to the point of divergence, so insertion order never affects the
//! final structure. Empty segments (consecutive, leading, or trailing
//! slashes) are skipped rather than producing empty-named nodes.

use crate::types::Node;

/// Merge the given paths into a single hierarchy.
///
/// The returned node is the unnamed root; its children are the top-level
/// path segments. Duplicate paths and shared prefixes merge idempotently.
pub fn build_tree<S: AsRef<str>>(paths: &[S]) -> Node {
    let mut root = Node::new();
    for path in paths {
        insert_path(&mut root, path.as_ref());
    }
    root
}

/// Insert one slash-delimited path, creating missing nodes along the way.
fn insert_path(root: &mut Node, path: &str) {
    let mut current = root;
    for segment in path.split('/') {
        // "a//b" and "/a" split into runs with empty entries; collapse them.
        if segment.is_empty() {
            continue;
        }
        current = current.child_mut(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefix_merges() {
        let tree = build_tree(&["a/b.txt", "a/c.txt", "d.txt"]);

        assert_eq!(tree.children.len(), 2);
        let a = tree.child("a").unwrap();
        assert_eq!(a.children.len(), 2);
        assert!(a.child("b.txt").unwrap().is_leaf());
        assert!(a.child("c.txt").unwrap().is_leaf());
        assert!(tree.child("d.txt").unwrap().is_leaf());
    }

    #[test]
    fn test_insertion_order_invariant() {
        let forward = build_tree(&["a/b.txt", "a/c.txt", "d.txt"]);
        let reversed = build_tree(&["d.txt", "a/c.txt", "a/b.txt"]);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_duplicate_paths_idempotent() {
        let once = build_tree(&["a/b.txt"]);
        let twice = build_tree(&["a/b.txt", "a/b.txt"]);

        assert_eq!(once, twice);
        assert_eq!(twice.count(), 2); // a, a/b.txt
    }

    #[test]
    fn test_empty_segments_skipped() {
        let tree = build_tree(&["a//b.txt", "/c.txt", "d/"]);

        let a = tree.child("a").unwrap();
        assert!(a.child("b.txt").unwrap().is_leaf());
        assert!(tree.child("c.txt").unwrap().is_leaf());
        assert!(tree.child("d").unwrap().is_leaf());
        assert!(tree.child("").is_none());
    }

    #[test]
    fn test_all_slash_path_contributes_nothing() {
        let tree = build_tree(&["///"]);
        assert!(tree.is_leaf());
    }

    #[test]
    fn test_empty_input_yields_empty_root() {
        let tree = build_tree::<&str>(&[]);
        assert!(tree.is_leaf());
        assert_eq!(tree.count(), 0);
    }

    #[test]
    fn test_path_prolongs_existing_leaf() {
        // "a" first arrives as a leaf, then gains a child.
        let tree = build_tree(&["a", "a/b.txt"]);

        let a = tree.child("a").unwrap();
        assert!(!a.is_leaf());
        assert!(a.child("b.txt").unwrap().is_leaf());
    }
}
