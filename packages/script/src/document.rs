//! # Drawing Script Document
//!
//! The root `rnartist { ... }` block. It always renders a sequence source, a theme and a
//! layout, in that order, then the png and svg targets that were added.
//!
//! ```rust
//! use rnartist_script::{OutputTarget, RnArtist, Scope, SequenceSource};
//!
//! let mut script = RnArtist::new();
//! script.set_ss(SequenceSource::bracket_notation("((..))", "GGAACC"));
//! script.theme_mut().set_details(3, Scope::Everywhere);
//! script.set_png(OutputTarget::png("/tmp", 800.0, 800.0))?;
//!
//! let text = script.dump();
//! assert!(text.starts_with("rnartist {\n"));
//! # Ok::<(), rnartist_script::ScriptError>(())
//! ```

use crate::error::ScriptResult;
use crate::node::{Container, Node};
use crate::sections::{Layout, OutputTarget, SequenceSource, Theme, SEQUENCE_BLOCK};

pub const ROOT_BLOCK: &str = "rnartist";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RnArtist {
    ss: Option<SequenceSource>,
    theme: Option<Theme>,
    layout: Option<Layout>,
    png: Option<OutputTarget>,
    svg: Option<OutputTarget>,
}

impl RnArtist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ss(&self) -> Option<&SequenceSource> {
        self.ss.as_ref()
    }

    /// Replace the sequence source
    pub fn set_ss(&mut self, source: SequenceSource) {
        self.ss = Some(source);
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Theme, created empty on first use
    pub fn theme_mut(&mut self) -> &mut Theme {
        self.theme.get_or_insert_with(Theme::new)
    }

    /// Replace the whole theme, history included
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Layout, created empty on first use
    pub fn layout_mut(&mut self) -> &mut Layout {
        self.layout.get_or_insert_with(Layout::new)
    }

    /// Replace the whole layout, history included
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    pub fn png(&self) -> Option<&OutputTarget> {
        self.png.as_ref()
    }

    /// Replace the png target; rejected if its sizes cannot be written
    pub fn set_png(&mut self, target: OutputTarget) -> ScriptResult<()> {
        target.check()?;
        self.png = Some(target);
        Ok(())
    }

    pub fn svg(&self) -> Option<&OutputTarget> {
        self.svg.as_ref()
    }

    pub fn set_svg(&mut self, target: OutputTarget) -> ScriptResult<()> {
        target.check()?;
        self.svg = Some(target);
        Ok(())
    }

    pub fn remove_png(&mut self) -> Option<OutputTarget> {
        self.png.take()
    }

    pub fn remove_svg(&mut self) -> Option<OutputTarget> {
        self.svg.take()
    }

    /// Tree as it will be written. Absent mandatory sections appear empty.
    pub fn to_tree(&self) -> Container {
        let mut root = Container::new(ROOT_BLOCK);

        root.add_child(match &self.ss {
            Some(source) => Node::from(source),
            None => Container::new(SEQUENCE_BLOCK).into(),
        });
        root.add_child(self.theme.clone().unwrap_or_default());
        root.add_child(self.layout.clone().unwrap_or_default());

        for target in [&self.png, &self.svg].into_iter().flatten() {
            root.add_child(target);
        }

        root
    }

    pub fn dump(&self) -> String {
        self.to_tree().dump("")
    }
}
