mod commands;
mod logging;
mod progress;
mod worker;

use std::io::{self, Write};
use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, ScanArgs, ShowArgs};
use dotenv::dotenv;
use folders2csv_core::catalog;
use folders2csv_core::{AppConfig, Backend, CatalogEntry, Outcome};
use progress::CliReporter;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match folders2csv_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();
    let backend = Backend::new(config.clone());

    let succeeded = match args.command {
        Some(Commands::Drives) => run_drives(&backend),
        Some(Commands::Info { volume }) => run_info(&backend, &volume),
        Some(Commands::Scan(scan_args)) => run_scan(&backend, &config, scan_args),
        Some(Commands::Validate { path }) => {
            let path = config.catalog_path_or(path.as_deref());
            print_outcome(&backend.validate_csv_file(&path))
        }
        Some(Commands::Show(show_args)) => run_show(&backend, &config, show_args),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
            true
        }
        None => {
            let _ = Cli::command().print_long_help();
            true
        }
    };

    if !succeeded {
        process::exit(1);
    }
}

fn print_outcome(outcome: &Outcome) -> bool {
    if outcome.success {
        println!("{} {}", "✓".green(), outcome.message);
    } else {
        println!("{} {}", "✗".red(), outcome.message);
    }
    outcome.success
}

fn run_drives(backend: &Backend) -> bool {
    let drives = backend.get_available_drives();
    if drives.is_empty() {
        println!("No Audio Archive drives found");
        return true;
    }

    for drive in &drives {
        let info = backend.get_drive_info(drive);
        println!(
            "{} ({} folders)  {}",
            info.canonical_name.green(),
            info.folder_count,
            drive.dimmed()
        );
    }
    info!("Found {} Audio Archive drives", drives.len());
    true
}

fn run_info(backend: &Backend, volume: &str) -> bool {
    let info = backend.get_drive_info(volume);
    println!("drive:      {}", info.drive_name);
    println!("canonical:  {}", info.canonical_name);
    match &info.mastering_folder {
        Some(path) => println!("mastering:  {}", path.display()),
        None => println!("mastering:  {}", "-".dimmed()),
    }
    println!("folders:    {}", info.folder_count);
    println!("status:     {}", info.status.cyan());
    true
}

fn run_scan(backend: &Backend, config: &AppConfig, args: ScanArgs) -> bool {
    let csv_path = config.catalog_path_or(args.csv.as_deref());

    let validation = backend.validate_csv_file(&csv_path);
    if !validation.success {
        println!("{} CSV validation failed: {}", "✗".red(), validation.message);
        return false;
    }
    info!("CSV validation: {}", validation.message);

    let selected = if !args.volumes.is_empty() {
        args.volumes
    } else {
        let drives = backend.get_available_drives();
        if !args.all && !args.yes && !drives.is_empty() {
            let question = format!("No drives named. Scan all {} Audio Archive drives?", drives.len());
            match prompt_confirm(&question, Some(false)) {
                Ok(true) => {}
                _ => return false,
            }
        }
        drives
    };

    info!("Processing {} selected drives...", selected.len());
    let job = match worker::spawn_scan(backend.clone(), selected, csv_path) {
        Ok(job) => job,
        Err(err) => {
            error!("Error starting scan: {}", err);
            return false;
        }
    };

    let reporter = CliReporter::new();
    reporter.start("Processing drives...");
    let outcome = job.wait(&reporter);
    reporter.finish();

    print_outcome(&outcome)
}

fn run_show(backend: &Backend, config: &AppConfig, args: ShowArgs) -> bool {
    let csv_path = config.catalog_path_or(args.csv.as_deref());
    let entries = backend.get_csv_contents(&csv_path);
    let shown: Vec<&CatalogEntry> = match args.search.as_deref() {
        Some(term) => catalog::search(&entries, term),
        None => entries.iter().collect(),
    };

    let width = shown
        .iter()
        .map(|entry| entry.folder_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Folder Name".len());

    println!("{:<width$}  {}", "Folder Name".bold(), "Drive Name".bold(), width = width);
    for entry in &shown {
        println!("{:<width$}  {}", entry.folder_name, entry.drive_name, width = width);
    }
    println!("{} of {} entries", shown.len(), entries.len());
    true
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(default.unwrap_or(false));
        }

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
