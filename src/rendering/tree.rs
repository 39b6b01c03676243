//! Box-drawing tree renderer.
//!
//! Renders a merged hierarchy as an indented, connector-prefixed listing:
//!
//! ```text
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! Key design decisions:
//! - Siblings come pre-sorted from the node's `BTreeMap`, so output depends
//!   only on tree structure, never on input order
//! - The last child of each sibling group closes the branch (`└── `) and
//!   stops propagating the vertical rule to its descendants
//! - Output goes to a `String`; the caller decides where it lands

use crate::types::Node;

/// Connector for a child with later siblings.
const MID_CONNECTOR: &str = "├── ";
/// Connector for the last child of a sibling group.
const LAST_CONNECTOR: &str = "└── ";
/// Prefix extension below a child that still has later siblings.
const MID_EXTENSION: &str = "│   ";
/// Prefix extension below the last child of a sibling group.
const LAST_EXTENSION: &str = "    ";

/// Depth-first renderer producing one newline-terminated line per node.
#[derive(Debug, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the hierarchy rooted at `root`.
    ///
    /// The root itself is the unnamed forest and does not render; an empty
    /// root yields an empty string. Every emitted line ends with `\n`.
    pub fn render(&self, root: &Node) -> String {
        let mut output = String::new();
        self.render_children(root, "", &mut output);
        output
    }

    /// Emit one sibling group, recursing under each non-leaf child with the
    /// prefix extended by its connector's continuation.
    fn render_children(&self, node: &Node, prefix: &str, output: &mut String) {
        let last_index = node.children.len().saturating_sub(1);

        for (i, (name, child)) in node.children.iter().enumerate() {
            let is_last = i == last_index;

            output.push_str(prefix);
            output.push_str(if is_last { LAST_CONNECTOR } else { MID_CONNECTOR });
            output.push_str(name);
            output.push('\n');

            if !child.is_leaf() {
                let extension = if is_last { LAST_EXTENSION } else { MID_EXTENSION };
                self.render_children(child, &format!("{prefix}{extension}"), output);
            }
        }
    }
}
