//! Command-line front end for Gradient Lab.
//!
//! ```text
//! gradient-lab [--config PATH] [--declaration] <default | random | list | preset NAME>
//! ```
//!
//! Prints the CSS gradient expression for the chosen gradient, or the full
//! `background: ...;` declaration with `--declaration`. Set `RUST_LOG` to see
//! editor events on stderr.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use gradient_lab_core::prelude::*;

const USAGE: &str = "usage: gradient-lab [--config PATH] [--declaration] <default | random | list | preset NAME>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Default,
    Random,
    List,
    Preset(String),
}

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    declaration: bool,
    command: Command,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut config = None;
    let mut declaration = false;
    let mut command = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--declaration" => declaration = true,
            "default" => command = Some(Command::Default),
            "random" => command = Some(Command::Random),
            "list" => command = Some(Command::List),
            "preset" => {
                let name: Vec<String> = args.by_ref().collect();
                if name.is_empty() {
                    return Err("preset needs a name".to_string());
                }
                command = Some(Command::Preset(name.join(" ")));
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(Args {
        config,
        declaration,
        command: command.unwrap_or(Command::Default),
    })
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => EditorConfig::from_file(path)?,
        None => EditorConfig::default(),
    };
    let catalog = config.catalog()?;
    let mut editor = GradientEditor::from_config(&config);

    match &args.command {
        Command::List => {
            for preset in catalog.presets() {
                println!("{:<20} {}", preset.name, preset.preview_css());
            }
            return Ok(());
        }
        Command::Default => {}
        Command::Random => editor.randomize(),
        Command::Preset(name) => {
            let preset = catalog
                .find(name)
                .ok_or_else(|| format!("no preset named '{name}'"))?;
            if !editor.load_preset(preset) {
                return Err(format!("preset '{name}' is invalid").into());
            }
        }
    }

    if args.declaration {
        println!("{}", editor.declaration());
    } else {
        println!("{}", editor.css());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(?args, "starting");
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, Command::Default);
        assert!(!args.declaration);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_preset_with_spaces() {
        let args = parse(&["--declaration", "preset", "Ocean", "Breeze"]).unwrap();
        assert!(args.declaration);
        assert_eq!(args.command, Command::Preset("Ocean Breeze".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["preset"]).is_err());
        assert!(parse(&["bogus"]).is_err());
    }

    #[test]
    fn test_run_unknown_preset_fails() {
        let args = parse(&["preset", "Nothing", "Here"]).unwrap();
        assert!(run(args).is_err());
    }
}
