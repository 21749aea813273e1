//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser (default)
//! - **list**: Print the filtered items
//! - **categories**: Print the derived categories
//! - **generate**: Scan a directory and write a manifest
//! - **completions**: Emit a shell completion script
//!
//! Global flags (`--manifest`, `--config`, `--match`, `--resync`, `-q`)
//! override the configuration file and `GALLERIA_*` environment variables.

use crate::catalog::MediaType;
use crate::config::GalleriaConfig;
use crate::filter::{Category, CategoryMatch, FilterCriteria};
use crate::viewer::ResyncPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[cfg(feature = "dynamic-completions")]
use clap_complete::engine::ArgValueCompleter;

/// Output format for non-interactive commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, colored when writing to a terminal
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Filter flags shared by `browse` and `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Start in this category (top-level folder)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    #[cfg_attr(
        feature = "dynamic-completions",
        arg(add = ArgValueCompleter::new(crate::completions::complete_categories))
    )]
    pub category: Option<String>,

    /// Only include these media types (repeatable; default: all)
    #[arg(short = 't', long = "type", value_name = "TYPE", value_enum)]
    pub types: Vec<MediaType>,

    /// Search query matched against name, path, folder and extension
    #[arg(short = 's', long = "search", value_name = "QUERY")]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Build filter criteria from the flags
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        if let Some(label) = &self.category {
            criteria = criteria.with_category(Category::from_label(label));
        }
        if !self.types.is_empty() {
            criteria = criteria.with_types(self.types.iter().copied());
        }
        if let Some(query) = &self.search {
            criteria = criteria.with_query(query.clone());
        }
        criteria
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "galleria")]
#[command(about = "Browse a media gallery manifest", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Manifest URL or path (default: gallery.json)
    #[arg(short = 'm', long = "manifest", value_name = "SRC", global = true)]
    pub manifest: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// How categories match folders
    #[arg(long = "match", value_name = "MODE", value_enum, global = true)]
    pub category_match: Option<CategoryMatch>,

    /// What the viewer does when its item is filtered away
    #[arg(long = "resync", value_name = "POLICY", value_enum, global = true)]
    pub resync: Option<ResyncPolicy>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the items that pass the filters
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the categories derived from the manifest
    Categories {
        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Scan a directory tree and write a manifest
    #[command(visible_alias = "gen")]
    Generate {
        /// Root of the media tree
        #[arg(value_name = "ROOT", default_value = ".")]
        root: PathBuf,

        /// Output file (default: ROOT/gallery.json)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Glob patterns (relative to ROOT) to leave out; repeatable
        #[arg(short = 'e', long = "exclude", value_name = "GLOB")]
        exclude: Vec<String>,

        /// Print the manifest to stdout instead of writing a file
        #[arg(long = "stdout", conflicts_with = "output")]
        stdout: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filters: FilterArgs::default(),
        })
    }

    /// Overlay command-line flags onto loaded configuration
    pub fn apply_overrides(&self, config: &mut GalleriaConfig) {
        if let Some(manifest) = &self.manifest {
            config.manifest.clone_from(manifest);
        }
        if let Some(mode) = self.category_match {
            config.category_match = mode;
        }
        if let Some(policy) = self.resync {
            config.resync = policy;
        }
        if self.quiet {
            config.quiet = true;
        }
    }
}
