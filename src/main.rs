mod cli;

use clap::Parser;
use cli::{Args, Settings};
use npm_dep_tree::adapters::outbound::console::StderrProgressReporter;
use npm_dep_tree::adapters::outbound::filesystem::{
    FileSystemSizeReader, JsonFileCacheStore, NoopCacheStore, StdoutPresenter,
};
use npm_dep_tree::adapters::outbound::process::NpmManifestFetcher;
use npm_dep_tree::application::dto::{OutputMode, TreeRequest};
use npm_dep_tree::application::factories::{ExporterFactory, RendererFactory};
use npm_dep_tree::application::use_cases::VisualizeTreeUseCase;
use npm_dep_tree::config::{discover_config, load_config_from_path};
use npm_dep_tree::dependency_tree::domain::DisplayTree;
use npm_dep_tree::ports::outbound::{CacheStore, OutputPresenter};
use npm_dep_tree::shared::error::ExitCode;
use npm_dep_tree::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            if let Err(io_error) = e.print() {
                log::debug!("Failed to print argument error: {}", io_error);
            }
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&args.project_dir())?,
    };
    let settings = args.resolve(config)?;
    log::debug!("Effective settings: {:?}", settings);

    if settings.no_cache {
        visualize(&settings, NoopCacheStore).await
    } else {
        let cache_store = JsonFileCacheStore::load(&settings.cache_file)?;
        visualize(&settings, cache_store).await
    }
}

async fn visualize<CS: CacheStore>(settings: &Settings, cache_store: CS) -> Result<ExitCode> {
    // Create adapters (Dependency Injection)
    let manifest_fetcher = NpmManifestFetcher::new()
        .with_program(settings.package_manager.clone())
        .with_timeout(settings.timeout);
    let size_reader = FileSystemSizeReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        VisualizeTreeUseCase::new(manifest_fetcher, size_reader, cache_store, progress_reporter);

    let request = TreeRequest::new(settings.project_path.clone(), settings.filter.clone());
    let response = use_case.execute(request).await?;

    eprintln!("{}", RendererFactory::progress_message(settings.output));
    let rendered = RendererFactory::create(settings.output).render(&response.tree)?;
    StdoutPresenter::new().present(&rendered)?;

    Ok(export(settings, &response.tree))
}

/// Writes the export file, if requested; failures do not undo the display
fn export(settings: &Settings, tree: &DisplayTree) -> ExitCode {
    let Some(exporter) = ExporterFactory::create(settings.export, Path::new(".")) else {
        return ExitCode::Success;
    };
    if let Some(message) = ExporterFactory::progress_message(settings.export) {
        eprintln!("{}", message);
    }

    // Exports always draw the text tree, whatever the display mode
    let result = RendererFactory::create(OutputMode::Tree)
        .render(tree)
        .and_then(|text| exporter.export(&text));

    match result {
        Ok(path) => {
            eprintln!("{} {}", "✅ Exported dependency tree to:".green(), path.display());
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("\n{}\n", "❌ Export failed:".red());
            eprintln!("{}", e);
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }
            eprintln!();
            ExitCode::ExportFailed
        }
    }
}
