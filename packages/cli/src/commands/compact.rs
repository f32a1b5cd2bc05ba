use crate::config::Config;
use crate::description::parse_color;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use rnartist_script::{RnArtist, Scope, Selector};
use rnartist_selection::{compact as compact_selection, Structure};
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompactArgs {
    /// JSON drawing model (`{"elements": [...]}`)
    pub structure: PathBuf,

    /// Indices of the selected elements
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub select: Vec<usize>,

    /// Print a script coloring the selection instead of the selectors
    #[arg(short, long)]
    pub color: Option<String>,
}

pub fn compact(args: CompactArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    print!("{}", render(&args, &config)?);
    Ok(())
}

/// Text `compact` prints: the selectors, or a coloring script when a color is given
pub fn render(args: &CompactArgs, config: &Config) -> Result<String> {
    let source = fs::read_to_string(&args.structure)
        .with_context(|| format!("Cannot read {}", args.structure.display()))?;
    let structure = Structure::from_json(&source)?;

    if let Some(&missing) = args.select.iter().find(|&&index| index >= structure.len()) {
        return Err(anyhow!(
            "Element {} is not in the structure ({} elements)",
            missing,
            structure.len()
        ));
    }

    let selectors = compact_selection(structure.select(&args.select), &structure);
    tracing::info!(
        selected = args.select.len(),
        selectors = selectors.len(),
        "Compacted selection"
    );

    match &args.color {
        Some(color) => {
            let color = parse_color(color)?;
            let mut script = RnArtist::new();
            if let Some(level) = config.details_level {
                script.theme_mut().set_details(level, Scope::Everywhere);
            }
            script.theme_mut().color_selectors(&selectors, &color)?;
            Ok(script.dump())
        }
        None => Ok(format_selectors(&selectors)),
    }
}

/// One `tag<TAB>location` line per selector, `*` standing for everywhere
pub fn format_selectors(selectors: &[Selector]) -> String {
    let mut out = String::new();
    for selector in selectors {
        let _ = match selector.scope.location() {
            Some(location) => writeln!(out, "{}\t{}", selector.category, location),
            None => writeln!(out, "{}\t*", selector.category),
        };
    }
    out
}
