//! # Script Tree
//!
//! Leaf values and named blocks that make up a drawing script.
//!
//! ## Text form
//!
//! ```text
//! color {
//!     type = "helix"
//!     value = "#ff0000"
//!    location {
//!        3 to 5
//!    }
//! }
//! ```
//!
//! A block opens with `{indent}{name} {` and closes with `{indent}}`. Children are
//! rendered three spaces deeper. A leaf line is `{indent} {name} {operator} {value}`,
//! the value being double-quoted for string leaves only.

use std::fmt::Write;

use crate::error::{ScriptError, ScriptResult};
use crate::history::HistoryContainer;
use crate::location::Block;

/// Indentation added per nesting level
pub const INDENT: &str = "   ";

/// Operator used by leaves unless told otherwise
pub const DEFAULT_OPERATOR: &str = "=";

/// Operator joining the two ends of a range leaf
pub const RANGE_OPERATOR: &str = "to";

/// Lookup name shared by every range leaf
pub const RANGE_LEAF: &str = "range";

/// How a leaf renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Written as given (numbers, identifiers)
    Plain,
    /// Written between double quotes
    Quoted,
}

/// Named scalar leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
    pub operator: String,
    pub kind: ValueKind,
}

impl Property {
    /// Plain leaf (`name = value`)
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            operator: DEFAULT_OPERATOR.to_string(),
            kind: ValueKind::Plain,
        }
    }

    /// String leaf (`name = "value"`)
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Quoted,
            ..Self::new(name, value)
        }
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    pub fn is_string(&self) -> bool {
        self.kind == ValueKind::Quoted
    }

    fn write_line(&self, indent: &str, out: &mut String) {
        let _ = match self.kind {
            ValueKind::Plain => {
                writeln!(out, "{} {} {} {}", indent, self.name, self.operator, self.value)
            }
            ValueKind::Quoted => {
                writeln!(out, "{} {} {} \"{}\"", indent, self.name, self.operator, self.value)
            }
        };
    }
}

/// Format an integer leaf value
pub fn int_value(value: impl Into<i64>) -> String {
    value.into().to_string()
}

/// Format a float leaf value, keeping a trailing `.0` on integral values.
/// Callers check the value with [`finite`] first.
pub fn float_value(value: f64) -> String {
    format!("{:?}", value)
}

/// `value` if it can be written as script text, an error naming the leaf otherwise
pub fn finite(name: &str, value: f64) -> ScriptResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScriptError::non_finite(name, value))
    }
}

/// Any element of the script tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Property(Property),
    /// One location block, stored as two independent ends
    Range(Block),
    Container(Container),
    History(HistoryContainer),
}

impl Node {
    /// Tag used for lookups. Range leaves all answer to [`RANGE_LEAF`], never to
    /// their positions.
    pub fn name(&self) -> &str {
        match self {
            Node::Property(property) => &property.name,
            Node::Range(_) => RANGE_LEAF,
            Node::Container(container) => &container.name,
            Node::History(history) => history.name(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Property(_) | Node::Range(_))
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Node::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Node::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Render this node at the given indentation
    pub fn dump(&self, indent: &str) -> String {
        let mut out = String::new();
        self.dump_into(indent, &mut out);
        out
    }

    pub(crate) fn dump_into(&self, indent: &str, out: &mut String) {
        match self {
            Node::Property(property) => property.write_line(indent, out),
            Node::Range(block) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {}",
                    indent, block.start, RANGE_OPERATOR, block.end
                );
            }
            Node::Container(container) => {
                write_block(&container.name, &container.children, indent, out)
            }
            Node::History(history) => write_block(history.name(), history.live(), indent, out),
        }
    }
}

impl From<Property> for Node {
    fn from(property: Property) -> Self {
        Node::Property(property)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Range(block)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

impl From<HistoryContainer> for Node {
    fn from(history: HistoryContainer) -> Self {
        Node::History(history)
    }
}

pub(crate) fn write_block(name: &str, children: &[Node], indent: &str, out: &mut String) {
    let _ = writeln!(out, "{}{} {{", indent, name);
    let nested = format!("{}{}", indent, INDENT);
    for child in children {
        child.dump_into(&nested, out);
    }
    let _ = writeln!(out, "{}}}", indent);
}

pub(crate) fn find<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Node> {
    nodes.iter().find(|node| node.name() == name)
}

pub(crate) fn find_all<'a>(
    nodes: &'a [Node],
    name: &'a str,
) -> impl Iterator<Item = &'a Node> + 'a {
    nodes.iter().filter(move |node| node.name() == name)
}

/// Named block owning an ordered list of children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub name: String,
    children: Vec<Node>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Container::add_child`]
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.add_child(node);
        self
    }

    pub fn add_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Remove the first child equal to `node`
    pub fn remove_child(&mut self, node: &Node) -> Option<Node> {
        let index = self.children.iter().position(|child| child == node)?;
        Some(self.children.remove(index))
    }

    /// Remove every child with the given name, returning them in order
    pub fn remove_children(&mut self, name: &str) -> Vec<Node> {
        let (removed, kept): (Vec<Node>, Vec<Node>) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|child| child.name() == name);
        self.children = kept;
        removed
    }

    /// Insert a single-instance child: any same-named child is dropped first and the new
    /// one goes to the end
    pub fn replace_child(&mut self, node: impl Into<Node>) {
        let node = node.into();
        let removed = self.remove_children(node.name());
        if !removed.is_empty() {
            tracing::debug!(
                name = node.name(),
                replaced = removed.len(),
                "Replacing single-instance child"
            );
        }
        self.children.push(node);
    }

    /// Existing child with this name, or a new one appended from `make`
    pub fn get_or_insert_with(
        &mut self,
        name: &str,
        make: impl FnOnce() -> Node,
    ) -> &mut Node {
        let index = match self.children.iter().position(|child| child.name() == name) {
            Some(index) => index,
            None => {
                self.children.push(make());
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        find(&self.children, name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|child| child.name() == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        find_all(&self.children, name)
    }

    /// Leaves only, in order
    pub fn properties(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|child| child.is_leaf())
    }

    /// Value of the first plain or string leaf with this name
    pub fn property_value(&self, name: &str) -> Option<&str> {
        self.child(name)
            .and_then(Node::as_property)
            .map(|property| property.value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn dump(&self, indent: &str) -> String {
        let mut out = String::new();
        write_block(&self.name, &self.children, indent, &mut out);
        out
    }
}
