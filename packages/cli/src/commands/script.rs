use crate::config::Config;
use crate::description::{build, DocumentDescription};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// JSON description of the document
    pub input: PathBuf,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn script(args: ScriptArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let description: DocumentDescription = serde_json::from_str(&source)
        .with_context(|| format!("Invalid document description in {}", args.input.display()))?;

    let text = build(&description, &config)?.dump();

    match args.output {
        Some(path) => {
            fs::write(&path, &text).with_context(|| format!("Cannot write {}", path.display()))?;
            eprintln!("  {} {} → {}", "✓".green(), args.input.display(), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hairpin.json");
        let output = dir.path().join("hairpin.kts");
        fs::write(
            &input,
            r#"{"ss": {"source": "bn", "value": "(.)", "seq": "GAC"}, "png": {}}"#,
        )
        .unwrap();

        let args = ScriptArgs {
            input,
            output: Some(output.clone()),
        };
        script(args, dir.path().to_str().unwrap()).unwrap();

        let text = fs::read_to_string(output).unwrap();
        assert!(text.starts_with("rnartist {\n"));
        assert!(text.contains("png {"));
        assert!(text.contains("path = \".\""));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ScriptArgs {
            input: dir.path().join("missing.json"),
            output: None,
        };
        assert!(script(args, dir.path().to_str().unwrap()).is_err());
    }
}
