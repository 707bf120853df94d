//! CLI binary for namescout.

use clap::{Parser, Subcommand};
use namescout::names::NameVariants;
use namescout::search::{UnifiedOptions, unified_search};
use namescout::{EmailOptions, ScoutConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// namescout: enumerate name variants, usernames and emails, and search for them.
#[derive(Parser)]
#[command(name = "namescout", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Print name orderings and username candidates.
    Variants {
        /// Full name, e.g. "Maria Jose Garcia Lopez".
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Print full names and usernames as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print candidate email addresses.
    Emails {
        /// Full name.
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Extra domain to try before the webmail defaults (repeatable).
        #[arg(short, long = "domain")]
        domains: Vec<String>,
        /// Maximum addresses per domain.
        #[arg(long)]
        max: Option<usize>,
        /// Print as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Search engines, social platforms and file-sharing sites for a name.
    Search {
        /// Full name.
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,
        /// Skip the social-platform branch.
        #[arg(long)]
        no_socials: bool,
        /// Skip the file-sharing/repository branch.
        #[arg(long)]
        no_repos: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("namescout=info,namescout_search=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = ScoutConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Variants { name, json } => print_variants(&name.join(" "), json),
        Command::Emails {
            name,
            domains,
            max,
            json,
        } => {
            let mut options = config.emails.clone();
            options.domain_hints.extend(domains);
            if let Some(max) = max {
                options.max_per_domain = max;
            }
            print_emails(&name.join(" "), &options, json)
        }
        Command::Search {
            name,
            limit,
            no_socials,
            no_repos,
        } => {
            let options = UnifiedOptions {
                limit: limit.unwrap_or(config.unified.limit),
                include_socials: config.unified.include_socials && !no_socials,
                include_repos: config.unified.include_repos && !no_repos,
            };
            run_search(&name.join(" "), options, config).await
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn print_variants(name: &str, json: bool) -> anyhow::Result<()> {
    let variants = NameVariants::generate(name);
    if json {
        println!("{}", serde_json::to_string_pretty(&variants)?);
    } else {
        for variant in variants.into_list() {
            println!("{variant}");
        }
    }
    Ok(())
}

fn print_emails(name: &str, options: &EmailOptions, json: bool) -> anyhow::Result<()> {
    let emails = options.generate(name);
    if json {
        println!("{}", serde_json::to_string_pretty(&emails)?);
    } else {
        for email in emails {
            println!("{email}");
        }
    }
    Ok(())
}

async fn run_search(
    name: &str,
    options: UnifiedOptions,
    config: ScoutConfig,
) -> anyhow::Result<()> {
    info!(
        limit = options.limit,
        socials = options.include_socials,
        repos = options.include_repos,
        "starting unified search"
    );
    let bundle = unified_search(name, options, config.search).await?;
    info!(count = bundle.count, "search finished");
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
