//! JSON description of a drawing script, as read by `rnartist script`.
//!
//! ```json
//! {
//!   "ss": { "source": "bn", "value": "((..))", "seq": "GGAACC" },
//!   "theme": [
//!     { "rule": "details", "level": 3 },
//!     { "rule": "color", "types": ["helix"], "color": "#ff0000" }
//!   ],
//!   "layout": [ { "topology": "3_way", "outIds": "nnw ne" } ],
//!   "png": { "name": "hairpin" }
//! }
//! ```

use anyhow::{anyhow, Result};
use rnartist_script::{
    Category, ColorRule, JunctionRule, JunctionTopology, LineRule, Location, OutputFormat,
    OutputTarget, Rgb, RnArtist, Scope, SequenceSource,
};
use serde::Deserialize;

use crate::config::Config;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescription {
    #[serde(default)]
    pub ss: Option<SequenceSource>,
    #[serde(default)]
    pub theme: Vec<ThemeRuleDescription>,
    #[serde(default)]
    pub layout: Vec<JunctionDescription>,
    #[serde(default)]
    pub png: Option<TargetDescription>,
    #[serde(default)]
    pub svg: Option<TargetDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum ThemeRuleDescription {
    Details {
        level: u8,
        #[serde(default)]
        scope: Scope,
    },
    Color {
        types: Vec<Category>,
        color: String,
        #[serde(default)]
        scope: Scope,
    },
    Line {
        types: Vec<Category>,
        width: f64,
        #[serde(default)]
        scope: Scope,
    },
    Show {
        types: Vec<Category>,
        #[serde(default)]
        scope: Scope,
    },
    Hide {
        types: Vec<Category>,
        #[serde(default)]
        scope: Scope,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JunctionDescription {
    #[serde(default)]
    pub topology: Option<JunctionTopology>,
    #[serde(default)]
    pub out_ids: Option<String>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetDescription {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TargetDescription {
    fn to_target(&self, format: OutputFormat, config: &Config) -> OutputTarget {
        let target = OutputTarget::new(
            format,
            self.path.clone().unwrap_or_else(|| config.output_dir.clone()),
            self.width.unwrap_or(config.width),
            self.height.unwrap_or(config.height),
        );
        match &self.name {
            Some(name) => target.with_name(name),
            None => target,
        }
    }
}

pub fn parse_color(text: &str) -> Result<Rgb> {
    Rgb::from_hex(text).ok_or_else(|| anyhow!("Invalid color '{}', expected #rrggbb", text))
}

/// Build the script a description stands for
pub fn build(description: &DocumentDescription, config: &Config) -> Result<RnArtist> {
    let mut script = RnArtist::new();

    if let Some(ss) = &description.ss {
        script.set_ss(ss.clone());
    }

    let sets_details = description
        .theme
        .iter()
        .any(|rule| matches!(rule, ThemeRuleDescription::Details { .. }));
    if let (Some(level), false) = (config.details_level, sets_details) {
        script.theme_mut().set_details(level, Scope::Everywhere);
    }

    for rule in &description.theme {
        let theme = script.theme_mut();
        match rule.clone() {
            ThemeRuleDescription::Details { level, scope } => theme.set_details(level, scope),
            ThemeRuleDescription::Color { types, color, scope } => {
                theme.add_color(ColorRule::new(types, &parse_color(&color)?, scope)?)
            }
            ThemeRuleDescription::Line { types, width, scope } => {
                theme.add_line(LineRule { types, width, scope })?
            }
            ThemeRuleDescription::Show { types, scope } => theme.show(types, scope),
            ThemeRuleDescription::Hide { types, scope } => theme.hide(types, scope),
        }
    }

    for junction in &description.layout {
        let rule = JunctionRule {
            topology: junction.topology,
            out_ids: junction.out_ids.clone(),
            radius: junction.radius,
            scope: junction.location.clone().into(),
        };
        script.layout_mut().add_junction(rule)?;
    }

    if let Some(png) = &description.png {
        script.set_png(png.to_target(OutputFormat::Png, config))?;
    }
    if let Some(svg) = &description.svg {
        script.set_svg(svg.to_target(OutputFormat::Svg, config))?;
    }

    Ok(script)
}
