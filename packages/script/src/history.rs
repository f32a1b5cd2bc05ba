//! # History Container
//!
//! A named block whose children form a linear edit history.
//!
//! ## Design
//!
//! - Children are kept in the order they were appended
//! - A cursor marks how many of them are live; only `[0, cursor)` is rendered
//! - Undo lowers the cursor, redo raises it again
//! - Appending while the cursor sits below the end drops everything past the cursor,
//!   so a redo branch cannot survive a new edit
//!
//! ## Example
//!
//! ```rust
//! use rnartist_script::{HistoryContainer, Property};
//!
//! let mut theme = HistoryContainer::new("theme");
//! theme.append(Property::new("details", "1"));
//! theme.append(Property::new("details", "2"));
//!
//! theme.undo();
//! theme.append(Property::new("details", "3"));
//!
//! assert_eq!(theme.len(), 2);
//! assert_eq!(theme.cursor(), 2);
//! ```

use crate::node::{find, find_all, write_block, Node};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryContainer {
    name: String,
    /// Every recorded child, live or undone
    children: Vec<Node>,
    /// Number of live children
    cursor: usize,
}

impl HistoryContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            cursor: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a child at the cursor, discarding any undone suffix first
    pub fn append(&mut self, node: impl Into<Node>) {
        if self.cursor < self.children.len() {
            tracing::trace!(
                name = %self.name,
                discarded = self.children.len() - self.cursor,
                "Dropping undone history"
            );
            self.children.truncate(self.cursor);
        }

        self.children.push(node.into());
        self.cursor += 1;
    }

    /// Step back one child. Returns false when nothing is live.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward over one undone child. Returns false when nothing was undone.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.children.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor anywhere in `[0, len]`; larger values are clamped
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.children.len());
    }

    /// Live children
    pub fn live(&self) -> &[Node] {
        &self.children[..self.cursor]
    }

    /// All recorded children, including undone ones
    pub fn recorded(&self) -> &[Node] {
        &self.children
    }

    /// Number of recorded children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// First live child with this name
    pub fn child(&self, name: &str) -> Option<&Node> {
        find(self.live(), name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        find_all(self.live(), name)
    }

    /// Live leaves only, in order
    pub fn properties(&self) -> impl Iterator<Item = &Node> {
        self.live().iter().filter(|child| child.is_leaf())
    }

    pub fn dump(&self, indent: &str) -> String {
        let mut out = String::new();
        write_block(&self.name, self.live(), indent, &mut out);
        out
    }
}
