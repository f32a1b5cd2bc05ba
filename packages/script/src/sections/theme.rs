//! # Theme
//!
//! Styling rules recorded in a history block so that edits can be undone:
//!
//! ```text
//! theme {
//!     details = 3
//!    color {
//!        type = "helix"
//!        value = "#ff0000"
//!    }
//!    line {
//!        type = "phosphodiester_bond"
//!        value = 2.0
//!    }
//! }
//! ```
//!
//! A `details` rule without location is a plain leaf; with a location it becomes a block.

use crate::category::Category;
use crate::color::HexColor;
use crate::error::ScriptResult;
use crate::history::HistoryContainer;
use crate::node::{finite, float_value, int_value, Container, Node, Property};

use super::{rule_block, with_scope, Scope, Selector};

pub const THEME_BLOCK: &str = "theme";

/// Level of detail drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRule {
    pub level: u8,
    pub scope: Scope,
}

impl From<DetailsRule> for Node {
    fn from(rule: DetailsRule) -> Self {
        let value = int_value(rule.level);
        match rule.scope {
            Scope::Everywhere => Property::new("details", value).into(),
            scope @ Scope::At(_) => {
                let block = Container::new("details").with_child(Property::new("value", value));
                with_scope(block, &scope).into()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    pub types: Vec<Category>,
    /// Canonical `#rrggbb` text
    pub color: String,
    pub scope: Scope,
}

impl ColorRule {
    /// Rule for the given color; text that is not `#rrggbb` is rejected
    pub fn new(types: Vec<Category>, color: &impl HexColor, scope: Scope) -> ScriptResult<Self> {
        Ok(Self {
            types,
            color: color.to_hex()?,
            scope,
        })
    }
}

impl From<ColorRule> for Node {
    fn from(rule: ColorRule) -> Self {
        let block =
            rule_block("color", &rule.types).with_child(Property::string("value", rule.color));
        with_scope(block, &rule.scope).into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineRule {
    pub types: Vec<Category>,
    pub width: f64,
    pub scope: Scope,
}

impl From<LineRule> for Node {
    fn from(rule: LineRule) -> Self {
        let block = rule_block("line", &rule.types)
            .with_child(Property::new("value", float_value(rule.width)));
        with_scope(block, &rule.scope).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Show,
    Hide,
}

impl Visibility {
    fn block_name(self) -> &'static str {
        match self {
            Visibility::Show => "show",
            Visibility::Hide => "hide",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityRule {
    pub visibility: Visibility,
    pub types: Vec<Category>,
    pub scope: Scope,
}

impl From<VisibilityRule> for Node {
    fn from(rule: VisibilityRule) -> Self {
        with_scope(rule_block(rule.visibility.block_name(), &rule.types), &rule.scope).into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    history: HistoryContainer,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            history: HistoryContainer::new(THEME_BLOCK),
        }
    }

    pub fn set_details(&mut self, level: u8, scope: Scope) {
        self.history.append(DetailsRule { level, scope });
    }

    pub fn add_color(&mut self, rule: ColorRule) {
        self.history.append(rule);
    }

    /// Record a line rule; a width that is not finite is rejected
    pub fn add_line(&mut self, rule: LineRule) -> ScriptResult<()> {
        finite("width", rule.width)?;
        self.history.append(rule);
        Ok(())
    }

    pub fn show(&mut self, types: Vec<Category>, scope: Scope) {
        self.history.append(VisibilityRule {
            visibility: Visibility::Show,
            types,
            scope,
        });
    }

    pub fn hide(&mut self, types: Vec<Category>, scope: Scope) {
        self.history.append(VisibilityRule {
            visibility: Visibility::Hide,
            types,
            scope,
        });
    }

    /// One color rule per selector, keeping each selector's scope
    pub fn color_selectors(
        &mut self,
        selectors: &[Selector],
        color: &impl HexColor,
    ) -> ScriptResult<()> {
        let color = color.to_hex()?;
        for selector in selectors {
            self.add_color(ColorRule {
                types: vec![selector.category],
                color: color.clone(),
                scope: selector.scope.clone(),
            });
        }
        Ok(())
    }

    /// One line rule per selector, keeping each selector's scope
    pub fn line_selectors(&mut self, selectors: &[Selector], width: f64) -> ScriptResult<()> {
        finite("width", width)?;
        for selector in selectors {
            self.add_line(LineRule {
                types: vec![selector.category],
                width,
                scope: selector.scope.clone(),
            })?;
        }
        Ok(())
    }

    /// One show or hide rule per selector, keeping each selector's scope
    pub fn set_visibility(&mut self, selectors: &[Selector], visibility: Visibility) {
        for selector in selectors {
            self.history.append(VisibilityRule {
                visibility,
                types: vec![selector.category],
                scope: selector.scope.clone(),
            });
        }
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

impl From<Theme> for Node {
    fn from(theme: Theme) -> Self {
        Node::History(theme.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Host, JunctionTopology};
    use crate::color::Rgb;
    use crate::error::ScriptError;
    use crate::location::Location;

    #[test]
    fn test_theme_rules_dump() {
        let mut theme = Theme::new();
        theme.set_details(3, Scope::Everywhere);
        let red = Rgb::new(255, 0, 0);
        theme.add_color(ColorRule::new(vec![Category::Helix], &red, Scope::Everywhere).unwrap());
        theme
            .add_line(LineRule {
                types: vec![Category::PhosphodiesterBond(None)],
                width: 2.0,
                scope: Scope::Everywhere,
            })
            .unwrap();

        assert_eq!(
            theme.history().dump(""),
            concat!(
                "theme {\n",
                "    details = 3\n",
                "   color {\n",
                "       type = \"helix\"\n",
                "       value = \"#ff0000\"\n",
                "   }\n",
                "   line {\n",
                "       type = \"phosphodiester_bond\"\n",
                "       value = 2.0\n",
                "   }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_scoped_details_is_a_block() {
        let mut theme = Theme::new();
        theme.set_details(4, Scope::At(Location::from_ranges([(1, 8)])));

        assert_eq!(
            theme.history().dump(""),
            concat!(
                "theme {\n",
                "   details {\n",
                "       value = 4\n",
                "      location {\n",
                "          1 to 8\n",
                "      }\n",
                "   }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_multiple_types_and_visibility() {
        let mut theme = Theme::new();
        let apical = Host::Junction(JunctionTopology::ApicalLoop);
        theme.hide(
            vec![Category::Residue(Some(apical)), Category::ResidueLetter],
            Scope::Everywhere,
        );
        let hide = theme.history().child("hide").and_then(Node::as_container).unwrap();
        assert_eq!(hide.property_value("type"), Some("N@apical_loop n"));
    }

    #[test]
    fn test_undo_then_new_rule_discards_redo() {
        let mut theme = Theme::new();
        theme.set_details(1, Scope::Everywhere);
        theme.set_details(2, Scope::Everywhere);
        assert!(theme.undo());

        theme.show(vec![Category::Helix], Scope::Everywhere);
        assert!(!theme.redo());
        assert_eq!(theme.history().len(), 2);
        assert_eq!(theme.history().live()[1].name(), "show");
    }

    #[test]
    fn test_line_and_visibility_selectors() {
        let selectors = vec![
            Selector::everywhere(Category::SecondaryInteraction),
            Selector::at(Category::ResidueLetter, Location::from_ranges([(7, 9)])),
        ];
        let mut theme = Theme::new();
        theme.line_selectors(&selectors, 0.5).unwrap();
        theme.set_visibility(&selectors, Visibility::Hide);

        assert_eq!(theme.history().children_named("line").count(), 2);
        let hidden: Vec<_> = theme.history().children_named("hide").collect();
        assert_eq!(hidden.len(), 2);
        let letters = hidden[1].as_container().unwrap();
        assert_eq!(letters.property_value("type"), Some("n"));
        assert!(letters.child("location").is_some());
    }

    #[test]
    fn test_color_selectors_keep_wildcards() {
        let selectors = vec![
            Selector::everywhere(Category::Junction(JunctionTopology::ApicalLoop)),
            Selector::at(Category::Helix, Location::from_ranges([(1, 4), (20, 23)])),
        ];
        let mut theme = Theme::new();
        theme.color_selectors(&selectors, &"#00FF00").unwrap();

        let rules: Vec<_> = theme.history().children_named("color").collect();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].as_container().unwrap().child("location").is_none());

        let scoped = rules[1].as_container().unwrap();
        assert_eq!(scoped.property_value("value"), Some("#00ff00"));
        let location = scoped.child("location").and_then(Node::as_container).unwrap();
        assert_eq!(
            Location::decode(location).unwrap(),
            Location::from_ranges([(1, 4), (20, 23)])
        );
    }

    #[test]
    fn test_invalid_values_leave_history_untouched() {
        let selectors = vec![Selector::everywhere(Category::Helix)];
        let mut theme = Theme::new();

        assert_eq!(
            theme.color_selectors(&selectors, &"not a color"),
            Err(ScriptError::invalid_color("not a color"))
        );
        assert!(ColorRule::new(vec![Category::Helix], &"#12", Scope::Everywhere).is_err());
        assert!(theme.line_selectors(&selectors, f64::NAN).is_err());
        assert!(theme
            .add_line(LineRule {
                types: vec![Category::Helix],
                width: f64::INFINITY,
                scope: Scope::Everywhere,
            })
            .is_err());

        assert!(theme.history().is_empty());
        assert!(!theme.history().dump("").contains("inf"));
    }
}
