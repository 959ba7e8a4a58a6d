//! A sideways drawing of the tree for eyeballing its shape. The root is at the left edge, right
//! subtrees are drawn above their parent and left subtrees below, so reading top to bottom gives
//! the values in descending order.
//!
//! ```text
//! │       ┌── 6345
//! │   ┌── 67
//! │   │   └── 23
//! └── 8
//!     └── 4
//! ```
//!
//! The format is meant for people, not for parsing.

use std::fmt;

use crate::tree::{Node, Tree};

fn render<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render(f, right, &prefix, false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render(f, left, &prefix, true)?;
    }
    Ok(())
}

/// Draws the tree one node per line. An empty tree draws nothing.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render(f, root, "", true),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_small() {
        let tree = Tree::from_values([1, 2, 3]);

        assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }

    #[test]
    fn test_render_nested() {
        let tree = Tree::from_values(1..=6);
        let expected = [
            "│   ┌── 6",
            "│   │   └── 5",
            "└── 4",
            "    │   ┌── 3",
            "    └── 2",
            "        └── 1",
        ];

        assert_eq!(tree.to_string(), expected.join("\n") + "\n");
    }
}
