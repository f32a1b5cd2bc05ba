//! Image files the drawing is exported to.

use serde::{Deserialize, Serialize};

use crate::error::ScriptResult;
use crate::node::{finite, float_value, Container, Node, Property};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn block_name(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

/// `png { ... }` or `svg { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
    pub format: OutputFormat,
    /// Directory the file is written to
    pub path: String,
    pub width: f64,
    pub height: f64,
    /// File name without extension; the structure's name if unset
    pub name: Option<String>,
}

impl OutputTarget {
    pub fn new(format: OutputFormat, path: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            format,
            path: path.into(),
            width,
            height,
            name: None,
        }
    }

    pub fn png(path: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(OutputFormat::Png, path, width, height)
    }

    pub fn svg(path: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(OutputFormat::Svg, path, width, height)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sizes must be finite to be written
    pub fn check(&self) -> ScriptResult<()> {
        finite("width", self.width)?;
        finite("height", self.height)?;
        Ok(())
    }

    pub fn to_container(&self) -> Container {
        let mut block = Container::new(self.format.block_name())
            .with_child(Property::string("path", &self.path))
            .with_child(Property::new("width", float_value(self.width)))
            .with_child(Property::new("height", float_value(self.height)));
        if let Some(name) = &self.name {
            block.add_child(Property::string("name", name));
        }
        block
    }
}

impl From<&OutputTarget> for Node {
    fn from(target: &OutputTarget) -> Self {
        Node::Container(target.to_container())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_dump() {
        let png = OutputTarget::png("/tmp/drawings", 800.0, 600.5).with_name("tRNA");
        assert_eq!(
            png.to_container().dump(""),
            concat!(
                "png {\n",
                "    path = \"/tmp/drawings\"\n",
                "    width = 800.0\n",
                "    height = 600.5\n",
                "    name = \"tRNA\"\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_svg_without_name() {
        let svg = OutputTarget::svg(".", 100.0, 100.0).to_container();
        assert_eq!(svg.name, "svg");
        assert!(svg.child("name").is_none());
        assert_eq!(svg.properties().count(), 3);
    }

    #[test]
    fn test_check_rejects_non_finite_sizes() {
        assert!(OutputTarget::png(".", 800.0, 600.0).check().is_ok());
        assert!(OutputTarget::png(".", f64::NAN, 600.0).check().is_err());
        assert!(OutputTarget::svg(".", 800.0, f64::INFINITY).check().is_err());
    }
}
