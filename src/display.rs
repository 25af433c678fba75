use std::fmt::Write;

use generational_arena::Index;

use crate::{node::Side, LinkedBinaryTree};

pub(crate) struct TreeDisplay;

impl TreeDisplay {
    /// Render `tree` in preorder, one node per line. Children are tagged with
    /// the slot they occupy.
    pub(crate) fn format<E, F>(
        tree: &LinkedBinaryTree<E>,
        f: &mut std::fmt::Formatter<'_>,
        data_format: F,
    ) -> std::fmt::Result
    where
        F: Fn(&E, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        let Some(root) = tree.root else {
            return f.write_char('∅');
        };

        // (node, slot in parent and whether it is the last child, line prefix)
        let mut stack: Vec<(Index, Option<(Side, bool)>, String)> =
            vec![(root, None, String::new())];

        while let Some((index, branch, prefix)) = stack.pop() {
            let Some(node) = tree.arena.get(index) else {
                continue;
            };

            f.write_str(&prefix)?;

            let child_prefix = match branch {
                None => String::new(),
                Some((side, last)) => {
                    f.write_char(if last { '┗' } else { '┣' })?;
                    f.write_char(match side {
                        Side::Left => 'L',
                        Side::Right => 'R',
                    })?;
                    f.write_char(' ')?;

                    if last {
                        format!("{prefix}   ")
                    } else {
                        format!("{prefix}┃  ")
                    }
                }
            };

            data_format(&node.element, f)?;
            f.write_char('\n')?;

            let children: Vec<(Side, Index)> = [
                (Side::Left, node.left),
                (Side::Right, node.right),
            ]
            .into_iter()
            .filter_map(|(side, child)| child.map(|child| (side, child)))
            .collect();

            let count = children.len();
            for (i, (side, child)) in children.into_iter().enumerate().rev() {
                stack.push((child, Some((side, i + 1 == count)), child_prefix.clone()));
            }
        }

        Ok(())
    }
}

impl<E> std::fmt::Display for LinkedBinaryTree<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f, |data, f| write!(f, "{}", data))
    }
}
