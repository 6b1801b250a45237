use std::path::Path;

use subrecon::cli::{self, OutputFormat};
use subrecon::config::{Config, WordlistMode};
use subrecon::error::SubreconError;
use subrecon::{http_client, output, pipeline::Pipeline, security};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::parse_cli();
    init_logging(&cli);

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Builds the crate's `tracing` filter the way the teacher's CLI front end
/// does: our own modules follow `--debug`/`--verbose`, external crates are
/// held one tier quieter so they don't flood the terminal, and `--quiet`
/// silences everything but warnings.
fn init_logging(cli: &cli::Cli) {
    use tracing_subscriber::EnvFilter;

    let crate_level = if cli.quiet {
        "warn"
    } else if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!("subrecon={crate_level},reqwest=warn,hyper=warn,h2=warn");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let domain = security::sanitize_domain(&cli.domain);
    if !security::is_valid_domain(&domain) {
        anyhow::bail!(SubreconError::InvalidDomain(cli.domain.clone()));
    }

    let base_dir = std::env::current_dir()?;
    let wordlist = match &cli.wordlist {
        Some(path) => {
            if !security::is_safe_path(path, &base_dir) {
                anyhow::bail!(SubreconError::InvalidWordlistPath(path.clone()));
            }
            WordlistMode::Custom(path.clone())
        }
        None if cli.safe => WordlistMode::Safe,
        None => WordlistMode::Deep,
    };

    let config = Config {
        concurrency: cli.concurrency.unwrap_or(10),
        wordlist,
        recursive: cli.recursive,
        axfr: cli.axfr,
        nuclei: cli.nuclei,
        ..Config::default()
    };

    let client = http_client::build_client(config.http_timeout_secs)?;
    let pipeline = Pipeline::new(config, client)?;

    let (findings, stats) = pipeline.run(&domain).await?;

    tracing::info!(
        processed = stats.processed,
        total = stats.total_candidates,
        live = stats.success,
        errors = stats.errors,
        "scan complete"
    );

    if let Some(output_path) = &cli.output {
        let path = Path::new(output_path);
        let result = match cli.format {
            OutputFormat::Json => output::write_json(path, &findings),
            OutputFormat::Csv => output::write_csv(path, &findings),
            OutputFormat::Txt => output::write_txt(path, &findings),
        };
        match result {
            Ok(()) => println!("wrote {} findings to {}", findings.len(), output_path),
            Err(e) => eprintln!("export failed: {e}"),
        }
    } else {
        let json = serde_json::to_string_pretty(&findings)?;
        println!("{json}");
    }

    Ok(())
}
