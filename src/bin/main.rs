use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relkit::{
    ApiVersionRegistry, BumpKind, ChangelogUpdater, CleanOutcome, ConfigValidator,
    DEFAULT_CONFIG_PATH, UpdateConfig, clean_version_dir, normalize_versions,
};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "relkit")]
#[command(version, about = "release automation tools for generated SDK pipelines", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the SDK repository (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// insert release entries into the changelog
    Changelog {
        /// comma-separated api versions, e.g. 'v20250224,v20111101'
        versions: Option<String>,
    },

    /// validate a generator config against an api version
    Validate {
        /// path to the generator YAML config
        config: PathBuf,

        /// api version the config belongs to
        api_version: String,
    },

    /// bump the npm version stored in a generator config
    Bump {
        /// bump type: 'minor' or 'patch'
        kind: String,

        /// path to the generator YAML config
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// delete a version-targeted generator output directory
    Clean {
        /// version directory to delete, e.g. 'v20250224'
        target_dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Changelog { versions } => {
            handle_changelog(&cli.path, versions.as_deref())?;
        }
        Commands::Validate {
            config,
            api_version,
        } => {
            let validator = ConfigValidator::default();
            validator
                .validate(&config, &api_version)
                .context("config validation failed")?;
            println!("config {} is valid for {}", config.display(), api_version);
        }
        Commands::Bump { kind, config } => {
            let kind = BumpKind::from_str(&kind)?;
            let bumped =
                relkit::bump_config_version(&config, kind).context("version bump failed")?;
            println!("{}", bumped);
        }
        Commands::Clean { target_dir } => {
            match clean_version_dir(&cli.path, &target_dir).context("cleanup failed")? {
                CleanOutcome::Deleted(path) => println!("deleted: {}", path.display()),
                CleanOutcome::NotFound(path) => println!(
                    "directory not found (will be created during generation): {}",
                    path.display()
                ),
            }
        }
    }

    Ok(())
}

/// outer wrapper for the changelog core: rejects unknown api versions before
/// the updater runs, printing usage guidance and exiting with status 1
fn handle_changelog(path: &PathBuf, versions_arg: Option<&str>) -> Result<()> {
    let registry = ApiVersionRegistry::default();

    let versions = versions_arg.map(normalize_versions).unwrap_or_default();
    if versions.is_empty() {
        println!("Usage: relkit changelog <versions>");
        println!("Example: relkit changelog 'v20250224,v20111101'");
        println!("Supported versions: {}", registry.supported_list());
        std::process::exit(1);
    }

    if versions.iter().any(|v| !registry.is_supported(v)) {
        println!(
            "error: invalid versions. Supported versions: {}",
            registry.supported_list()
        );
        std::process::exit(1);
    }

    let config = UpdateConfig::new()
        .changelog_path(path.join("CHANGELOG.md"))
        .metadata_root(path.clone())
        .priority_order(registry.names().map(str::to_string).collect());

    let updater = ChangelogUpdater::new(config);
    updater
        .update(&versions)
        .context("changelog update failed")?;

    println!("CHANGELOG updated successfully");
    Ok(())
}
