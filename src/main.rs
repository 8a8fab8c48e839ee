// src/main.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use resume_extractor::input;
use resume_extractor::storage::StorageManager;
use resume_extractor::utils::{self, AppError};
use resume_extractor::{parse_resume_with_defaults, ParsedProfile};

/// Command Line Interface for the résumé text extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Plain-text résumé files to parse ("-" or nothing reads stdin)
    inputs: Vec<PathBuf>,

    /// Output directory for profile JSON (prints to stdout when omitted)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Pretty-print JSON written to stdout
    #[arg(long)]
    pretty: bool,

    /// Debug mode - save a section location report per input
    #[arg(short, long)]
    debug: bool,

    /// Desired occupation to stamp on every parsed profile
    #[arg(long)]
    desired_occupation: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    if args.debug && args.output_dir.is_none() {
        return Err(AppError::Config("--debug needs --output-dir to write reports into".to_string()));
    }

    // 3. Initialize storage if requested
    let storage = args
        .output_dir
        .as_deref()
        .map(StorageManager::new)
        .transpose()?;

    // 4. Process each input
    let mut success_count = 0;
    let mut failure_count = 0;

    for path in input::resolve_inputs(&args.inputs) {
        tracing::info!("Processing input: {}", path.display());

        let text = match input::load_text(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                failure_count += 1;
                continue;
            }
        };

        match process_text(text, &path, &args, storage.as_ref()).await {
            Ok(()) => success_count += 1,
            Err(e) => {
                tracing::error!("Failed to process {}: {}", path.display(), e);
                failure_count += 1;
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!("Failed to parse any of {} inputs", failure_count)));
    }

    Ok(())
}

async fn process_text(
    text: String,
    path: &Path,
    args: &Args,
    storage: Option<&StorageManager>,
) -> Result<(), AppError> {
    let stem = input::output_stem(path);

    if let (true, Some(storage)) = (args.debug, storage) {
        let report_path = storage.target_dir(&stem)?.join(format!("{}_sections.txt", stem));
        if let Err(e) = utils::debug::write_section_report(&text, &report_path) {
            tracing::warn!("Failed to write section report: {}", e);
        }
    }

    let (mut profile, defaulted): (ParsedProfile, _) =
        tokio::task::spawn_blocking(move || parse_resume_with_defaults(&text))
            .await
            .map_err(|e| AppError::Processing(format!("Parser task failed: {}", e)))?;

    if let Some(occupation) = &args.desired_occupation {
        profile.desired_occupation = occupation.clone();
    }

    match storage {
        Some(storage) => {
            let saved = storage.save_profile(&profile, &stem)?;
            tracing::info!("Saved profile to: {}", saved.display());
            let meta = storage.save_profile_metadata(&profile, defaulted, &stem, path)?;
            tracing::info!("Saved profile metadata to: {}", meta.display());
        }
        None => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&profile)
            } else {
                serde_json::to_string(&profile)
            }
            .map_err(|e| AppError::Processing(format!("Could not serialize profile: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}
