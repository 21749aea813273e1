//! Galleria CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse ./gallery.json interactively (default command)
//! galleria
//! galleria browse -c Trips
//!
//! # Browse a published gallery
//! galleria -m https://example.com/gallery/gallery.json
//!
//! # Print matching items, for scripting
//! galleria -q list -t pdf -s manual
//! galleria list --format json
//!
//! # Build a manifest for a media folder
//! galleria generate ./media -e 'drafts/**'
//! ```
//!
//! # Configuration
//!
//! Optional settings are read from `~/.config/galleria/config.toml`, then
//! `GALLERIA_*` environment variables, then command-line flags.

use clap::CommandFactory;
use galleria::{
    GalleriaError,
    catalog::{self, Catalog, LoadError, ManifestSource},
    cli::{Cli, Commands, FilterArgs},
    commands, completions,
    config::GalleriaConfig,
    filter::FilterCriteria,
    logging::{self, LogMode},
    session::Session,
};
use std::io;

type Result<T> = std::result::Result<T, GalleriaError>;

/// Fetch the manifest on a single-threaded runtime
fn fetch(source: &ManifestSource) -> Result<std::result::Result<Catalog, LoadError>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(catalog::load(source)))
}

/// Build a session and run the one-shot load
///
/// With `strict`, a failed load is returned as an error instead of being
/// kept in the session for inline display.
fn open_session(config: &GalleriaConfig, filters: &FilterArgs, strict: bool) -> Result<Session> {
    let source = ManifestSource::parse(&config.manifest)?;
    let criteria: FilterCriteria = filters.criteria();

    let mut session = Session::new(config.session_options())
        .with_source(source.clone())
        .with_criteria(criteria)
        .with_sidebar(config.sidebar_open);

    let result = fetch(&source)?;
    if strict {
        session.set_catalog(result?);
    } else {
        session.apply_load(result);
    }
    Ok(session)
}

fn load_config(cli: &Cli) -> Result<GalleriaConfig> {
    let mut config = match &cli.config {
        Some(path) => GalleriaConfig::load_from(path)?,
        None => GalleriaConfig::load()?,
    };
    cli.apply_overrides(&mut config);
    Ok(config)
}

fn main() -> Result<()> {
    #[cfg(feature = "dynamic-completions")]
    completions::init_dynamic_completions(Cli::command);

    let cli = Cli::parse_args();
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        completions::generate_static(*shell, &mut Cli::command(), &mut io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let quiet = config.quiet;

    let mode = if matches!(command, Commands::Browse { .. }) {
        LogMode::Interactive
    } else {
        LogMode::Command { quiet }
    };
    logging::init(mode);

    match command {
        Commands::Browse { filters } => {
            let session = open_session(&config, &filters, false)?;
            commands::browse(session, &config.view_options())?;
        }
        Commands::List { filters, format } => {
            let session = open_session(&config, &filters, true)?;
            commands::list(&session, format, quiet, &mut io::stdout().lock())?;
        }
        Commands::Categories { format } => {
            let session = open_session(&config, &FilterArgs::default(), true)?;
            commands::categories(
                &session,
                &config.all_label,
                format,
                quiet,
                &mut io::stdout().lock(),
            )?;
        }
        Commands::Generate {
            root,
            output,
            exclude,
            stdout,
        } => {
            commands::generate(&root, output, exclude, stdout, quiet, &mut io::stdout().lock())?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
