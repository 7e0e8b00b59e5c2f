use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::env;
use std::path::Path;
use std::process::ExitCode;

use linestore::domain::{Record, Status};
use linestore::storage::{EchoDecoder, LineStore, RecordFile};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(verbose: bool) {
    // Installed before config loads so config warnings reach stderr
    let rust_log = env::var_os("RUST_LOG").is_some();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !rust_log {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    }
}

/// Narrow or widen logging once the config is known; `-v` and `RUST_LOG` win.
fn apply_log_level(config: &Config, verbose: bool) {
    if !verbose && env::var_os("RUST_LOG").is_none() {
        log::set_max_level(config.level_filter());
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<Status> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Cat { path } => Ok(handle_cat_command(path, config)),
        Commands::List { path, json } => handle_list_command(path, *json, config),
        Commands::Add { path, codes } => Ok(handle_add_command(path, codes, config)),
        Commands::Copy { from, to } => Ok(handle_copy_command(from, to, config)),
    }
}

fn handle_cat_command(path: &Path, config: &Config) -> Status {
    info!("Echoing {}", path.display());
    LineStore::new(path)
        .with_options(config.store.clone())
        .read_all(&mut EchoDecoder::stdout())
}

fn handle_list_command(path: &Path, json: bool, config: &Config) -> Result<Status> {
    info!("Listing records in {}", path.display());
    let mut file = RecordFile::open(path).with_options(config.store.clone());
    let status = file.load();
    if !status.is_success() {
        return Ok(status);
    }

    if json {
        let out = serde_json::to_string_pretty(file.records()).context("Failed to serialize records")?;
        println!("{}", out);
    } else {
        for record in file.records() {
            println!("{}", record);
        }
    }

    if file.malformed() > 0 {
        eprintln!("{} {} malformed line(s) skipped", "Warning:".yellow(), file.malformed());
    }
    Ok(status)
}

fn handle_add_command(path: &Path, codes: &[i32], config: &Config) -> Status {
    info!("Adding {} records to {}", codes.len(), path.display());
    let mut file = RecordFile::open(path).with_options(config.store.clone());

    // A missing file starts out empty; any other read failure aborts before overwriting
    if path.exists() {
        let status = file.load();
        if !status.is_success() {
            eprintln!("{} could not read {}", "Error:".red(), path.display());
            return status;
        }
    }

    for &code in codes {
        file.push(Record::new(code));
    }
    match file.try_save() {
        Ok(summary) => {
            println!("{} {} record(s) in {}", "Saved:".green(), summary.lines, path.display());
            Status::Success
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            Status::Failure
        }
    }
}

fn handle_copy_command(from: &Path, to: &Path, config: &Config) -> Status {
    info!("Copying records from {} to {}", from.display(), to.display());
    let mut file = RecordFile::with_store(LineStore::with_paths(from, to).with_options(config.store.clone()));

    let status = file.load();
    if !status.is_success() {
        eprintln!("{} could not read {}", "Error:".red(), from.display());
        return status;
    }
    if file.malformed() > 0 {
        eprintln!("{} {} malformed line(s) not copied", "Warning:".yellow(), file.malformed());
    }

    match file.try_save() {
        Ok(summary) => {
            println!("{} {} record(s) to {}", "Copied:".green(), summary.lines, to.display());
            Status::Success
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            Status::Failure
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.is_verbose());

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config, cli.is_verbose());
    info!("Starting with config from: {:?}", cli.config);

    let status = run_application(&cli, &config).context("Application failed")?;

    Ok(status.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_add_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.txt");

        let status = handle_add_command(&path, &[5, -3], &Config::default());
        assert_eq!(status, Status::Success);
        assert_eq!(fs::read_to_string(&path).unwrap(), "5\n-3\n");
    }

    #[test]
    fn test_add_appends_to_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("r.txt");
        fs::write(&path, "1\n2\n").unwrap();

        let status = handle_add_command(&path, &[3], &Config::default());
        assert_eq!(status, Status::Success);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n3\n");
    }

    #[test]
    fn test_add_refuses_to_drop_unparsed_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("r.txt");
        fs::write(&path, "1\n\n# note\n2\n").unwrap();

        let status = handle_add_command(&path, &[3], &Config::default());
        assert_eq!(status, Status::Failure);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n\n# note\n2\n");
    }

    #[test]
    fn test_add_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("r.txt");

        let status = handle_add_command(&path, &[1], &Config::default());
        assert_eq!(status, Status::Failure);
        assert!(!path.exists());
    }

    #[test]
    fn test_copy_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.txt");
        fs::write(&from, "7\n").unwrap();

        let status = handle_copy_command(&from, &temp.path().join("nope").join("to.txt"), &Config::default());
        assert_eq!(status, Status::Failure);
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let to = temp.path().join("to.txt");

        let status = handle_copy_command(&temp.path().join("absent.txt"), &to, &Config::default());
        assert_eq!(status, Status::Failure);
        assert!(!to.exists());
    }

    #[test]
    fn test_copy_writes_destination() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.txt");
        let to = temp.path().join("to.txt");
        fs::write(&from, "7\n8\n").unwrap();

        let status = handle_copy_command(&from, &to, &Config::default());
        assert_eq!(status, Status::Success);
        assert_eq!(fs::read_to_string(&to).unwrap(), "7\n8\n");
    }
}
