//! CLI entry point for arbor

use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use arbor::{JsonReport, OutputConfig, TreeBuilder, TreeRenderer, parse_script, print_json, prune};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Renders a filesystem tree described by a command script")]
#[command(version)]
struct Args {
    /// Command script to read (defaults to stdin)
    path: Option<PathBuf>,

    /// Ignore nodes matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Omit the total-size summary line
    #[arg(long = "no-total")]
    no_total: bool,
}

/// Read the command script from the given path, or stdin when none.
fn read_script(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut script = String::new();
            std::io::stdin().read_to_string(&mut script)?;
            Ok(script)
        }
    }
}

fn main() {
    let args = Args::parse();

    let script = read_script(args.path.as_ref()).unwrap_or_else(|e| {
        match &args.path {
            Some(path) => eprintln!("arbor: cannot read '{}': {}", path.display(), e),
            None => eprintln!("arbor: cannot read stdin: {}", e),
        }
        process::exit(1);
    });

    let commands = parse_script(&script).unwrap_or_else(|e| {
        eprintln!("arbor: {}", e);
        process::exit(1);
    });

    let tree = TreeBuilder::build(commands).unwrap_or_else(|e| {
        eprintln!("arbor: {}", e);
        process::exit(1);
    });

    let tree = if args.ignore.is_empty() {
        tree
    } else {
        prune(&tree, &args.ignore)
    };

    let result = if args.json {
        print_json(&JsonReport::from_tree(&tree))
    } else {
        let renderer = TreeRenderer::new(OutputConfig {
            use_color: should_use_color(args.color),
            show_total: !args.no_total,
        });
        renderer.print(&tree)
    };

    if let Err(e) = result {
        eprintln!("arbor: error writing output: {}", e);
        process::exit(1);
    }
}
