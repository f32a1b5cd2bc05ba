//! Junction layout rules, recorded in a history block like the theme.

use crate::category::JunctionTopology;
use crate::error::ScriptResult;
use crate::history::HistoryContainer;
use crate::node::{finite, float_value, Container, Node, Property};

use super::{with_scope, Scope};

pub const LAYOUT_BLOCK: &str = "layout";

/// How the helices leaving a junction are arranged
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JunctionRule {
    /// Junctions of this shape only; any junction if unset
    pub topology: Option<JunctionTopology>,
    /// Compass directions of the outgoing helices, e.g. `"nnw ne"`
    pub out_ids: Option<String>,
    pub radius: Option<f64>,
    pub scope: Scope,
}

impl JunctionRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topology(mut self, topology: JunctionTopology) -> Self {
        self.topology = Some(topology);
        self
    }

    pub fn out_ids(mut self, out_ids: impl Into<String>) -> Self {
        self.out_ids = Some(out_ids.into());
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn scope(mut self, scope: impl Into<Scope>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl From<JunctionRule> for Node {
    fn from(rule: JunctionRule) -> Self {
        let mut block = Container::new("junction");
        if let Some(topology) = rule.topology {
            block.add_child(Property::string("type", topology.tag()));
        }
        if let Some(out_ids) = rule.out_ids {
            block.add_child(Property::string("out_ids", out_ids));
        }
        if let Some(radius) = rule.radius {
            block.add_child(Property::new("radius", float_value(radius)));
        }
        with_scope(block, &rule.scope).into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    history: HistoryContainer,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    pub fn new() -> Self {
        Self {
            history: HistoryContainer::new(LAYOUT_BLOCK),
        }
    }

    /// Record a junction rule; a radius that is not finite is rejected
    pub fn add_junction(&mut self, rule: JunctionRule) -> ScriptResult<()> {
        if let Some(radius) = rule.radius {
            finite("radius", radius)?;
        }
        self.history.append(rule);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn history(&self) -> &HistoryContainer {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryContainer {
        &mut self.history
    }
}

impl From<Layout> for Node {
    fn from(layout: Layout) -> Self {
        Node::History(layout.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn test_junction_rule_dump() {
        let mut layout = Layout::new();
        layout
            .add_junction(
                JunctionRule::new()
                    .topology(JunctionTopology::ThreeWay)
                    .out_ids("nnw ne")
                    .radius(40.0),
            )
            .unwrap();

        assert_eq!(
            layout.history().dump(""),
            concat!(
                "layout {\n",
                "   junction {\n",
                "       type = \"3_way\"\n",
                "       out_ids = \"nnw ne\"\n",
                "       radius = 40.0\n",
                "   }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_scoped_junction_rule() {
        let rule = JunctionRule::new()
            .out_ids("wnw")
            .scope(Location::from_ranges([(12, 14)]));
        let node = Node::from(rule);
        let block = node.as_container().unwrap();

        assert!(block.child("type").is_none());
        let location = block.child("location").and_then(Node::as_container).unwrap();
        assert_eq!(Location::decode(location).unwrap().blocks().len(), 1);
    }

    #[test]
    fn test_layout_undo_redo() {
        let mut layout = Layout::new();
        layout.add_junction(JunctionRule::new().out_ids("n")).unwrap();
        layout.add_junction(JunctionRule::new().out_ids("s")).unwrap();

        assert!(layout.undo());
        assert_eq!(layout.history().children_named("junction").count(), 1);
        assert!(layout.redo());
        assert_eq!(layout.history().children_named("junction").count(), 2);
    }

    #[test]
    fn test_infinite_radius_is_not_recorded() {
        let mut layout = Layout::new();
        assert!(layout.add_junction(JunctionRule::new().radius(f64::INFINITY)).is_err());
        assert!(layout.add_junction(JunctionRule::new().radius(f64::NAN)).is_err());
        assert!(layout.history().is_empty());
    }
}
