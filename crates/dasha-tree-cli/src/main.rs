use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dasha_tree_config::Config;
use dasha_tree_engine::{InputFile, ParseOptions, convert_file, io};
use log::{error, info, warn};

#[derive(Parser)]
#[command(name = "dasha-tree", about = "Convert dasha period listings into nested JSON trees")]
struct Cli {
    /// Config file to use instead of ~/.config/dasha-tree/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log parser decisions
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file, or every matching file under a directory
    Convert {
        /// Input file or directory (defaults to input.dir from the config)
        input: Option<PathBuf>,
        /// Output root (defaults to output.dir from the config, then ".")
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print JSON to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Print the period outline and warnings for one file
    Outline {
        file: PathBuf,
    },
}

/// Where converted documents go.
enum Sink<'a> {
    Stdout,
    Dir(&'a Path),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref())?;
    let options = config.parse_options()?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            stdout,
        } => {
            let Some(input) = input.or_else(|| config.input.dir.clone()) else {
                bail!("No input given and no input.dir in the config file");
            };
            let output = output
                .or_else(|| config.output.dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let sink = if stdout {
                Sink::Stdout
            } else {
                Sink::Dir(&output)
            };

            let failed = run_convert(&input, &config.input.pattern, &options, &sink)?;
            if failed > 0 {
                error!("{failed} file(s) could not be converted");
                process::exit(1);
            }
        }
        Commands::Outline { file } => {
            let conversion = convert_file(&file, &options)?;
            print!("{}", conversion.outline());
            for w in &conversion.warnings {
                println!("! {w}");
            }
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file {} not found", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                info!("No config at {}, using defaults", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Converts every input and returns how many could not be read.
fn run_convert(input: &Path, pattern: &str, options: &ParseOptions, sink: &Sink) -> Result<usize> {
    let (root, files) = if input.is_dir() {
        let files = io::scan_input_files(input, pattern)?;
        info!("Found {} file(s) under {}", files.len(), input.display());
        (input.to_path_buf(), files)
    } else {
        let root = input.parent().map(Path::to_path_buf).unwrap_or_default();
        let name = input
            .file_name()
            .with_context(|| format!("{} has no file name", input.display()))?;
        (root, vec![InputFile::from(name.to_string_lossy().as_ref())])
    };

    let mut failed = 0;
    for file in &files {
        if let Err(e) = convert_one(&root, file, options, sink) {
            error!("{}: {e:#}", file.relative_path());
            failed += 1;
        }
    }
    Ok(failed)
}

fn convert_one(root: &Path, file: &InputFile, options: &ParseOptions, sink: &Sink) -> Result<()> {
    let path = file.relative_path().to_path(root);
    let conversion = convert_file(&path, options)?;
    for w in &conversion.warnings {
        warn!("{}: {w}", file.relative_path());
    }

    let folder = conversion.person_folder();
    let json = conversion.into_document().to_json()?;
    match sink {
        Sink::Stdout => print!("{json}"),
        Sink::Dir(out) => {
            let written = io::write_output(&file.output_path(&folder), out, &json)?;
            info!("Wrote {}", written.display());
        }
    }
    Ok(())
}
