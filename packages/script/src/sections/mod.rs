//! Fixed-shape sections of a drawing script.

mod layout;
mod output;
mod sequence;
mod theme;

pub use layout::{JunctionRule, Layout, LAYOUT_BLOCK};
pub use output::{OutputFormat, OutputTarget};
pub use sequence::{SequenceSource, SEQUENCE_BLOCK};
pub use theme::{ColorRule, DetailsRule, LineRule, Theme, Visibility, VisibilityRule, THEME_BLOCK};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::location::Location;
use crate::node::{Container, Property};

/// Where a rule applies
///
/// `Everywhere` is the wildcard: no location is written and the rule keeps meaning
/// "every element of its categories" whatever structure it is applied to. It is never
/// the same thing as a location spanning every position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Location>", into = "Option<Location>")]
pub enum Scope {
    #[default]
    Everywhere,
    At(Location),
}

impl Scope {
    pub fn is_everywhere(&self) -> bool {
        matches!(self, Scope::Everywhere)
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Scope::Everywhere => None,
            Scope::At(location) => Some(location),
        }
    }
}

impl From<Option<Location>> for Scope {
    fn from(location: Option<Location>) -> Self {
        location.map_or(Scope::Everywhere, Scope::At)
    }
}

impl From<Scope> for Option<Location> {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Everywhere => None,
            Scope::At(location) => Some(location),
        }
    }
}

impl From<Location> for Scope {
    fn from(location: Location) -> Self {
        Scope::At(location)
    }
}

/// One category narrowed to a scope, the unit rules are written against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub category: Category,
    #[serde(default)]
    pub scope: Scope,
}

impl Selector {
    pub fn everywhere(category: Category) -> Self {
        Self {
            category,
            scope: Scope::Everywhere,
        }
    }

    pub fn at(category: Category, location: Location) -> Self {
        Self {
            category,
            scope: Scope::At(location),
        }
    }
}

/// Value of a rule's `type` leaf: the tags separated by single spaces
pub(crate) fn type_value(types: &[Category]) -> String {
    types
        .iter()
        .map(Category::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Start a rule block with its `type` leaf, if it targets any category
pub(crate) fn rule_block(name: &str, types: &[Category]) -> Container {
    let block = Container::new(name);
    if types.is_empty() {
        block
    } else {
        block.with_child(Property::string("type", type_value(types)))
    }
}

/// Close a rule block with its location, unless it applies everywhere
pub(crate) fn with_scope(mut block: Container, scope: &Scope) -> Container {
    if let Scope::At(location) = scope {
        block.add_child(location.encode());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Host, JunctionTopology};

    #[test]
    fn test_scope_from_option() {
        assert_eq!(Scope::from(None), Scope::Everywhere);
        let location = Location::from_ranges([(1, 4)]);
        assert_eq!(Scope::from(Some(location.clone())), Scope::At(location.clone()));
        assert!(Scope::At(Location::new()).location().is_some());
        assert!(Scope::Everywhere.is_everywhere());
    }

    #[test]
    fn test_type_value_joins_tags() {
        let types = [
            Category::Helix,
            Category::Residue(Some(Host::Junction(JunctionTopology::ApicalLoop))),
        ];
        assert_eq!(type_value(&types), "helix N@apical_loop");
    }

    #[test]
    fn test_rule_block_layout() {
        let everywhere = with_scope(rule_block("show", &[Category::Helix]), &Scope::Everywhere);
        assert_eq!(everywhere.dump(""), "show {\n    type = \"helix\"\n}\n");

        let scoped = with_scope(
            rule_block("hide", &[]),
            &Scope::At(Location::from_ranges([(2, 3)])),
        );
        assert_eq!(scoped.dump(""), "hide {\n   location {\n       2 to 3\n   }\n}\n");
    }

    #[test]
    fn test_selector_serde() {
        let selector: Selector = serde_json::from_str(r#"{"category":"helix"}"#).unwrap();
        assert_eq!(selector, Selector::everywhere(Category::Helix));

        let selector: Selector =
            serde_json::from_str(r#"{"category":"N","scope":[{"start":1,"end":2}]}"#).unwrap();
        assert_eq!(
            selector,
            Selector::at(Category::Residue(None), Location::from_ranges([(1, 2)]))
        );
    }
}
