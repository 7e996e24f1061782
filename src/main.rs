mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use depinfo::adapters::outbound::console::StderrProgressReporter;
use depinfo::adapters::outbound::filesystem::JsonBuildModelReader;
use depinfo::adapters::outbound::maven::EffectiveModelBuilder;
use depinfo::adapters::outbound::network::MAVEN_CENTRAL_URL;
use depinfo::application::dto::{ApplicationModelRequest, OutputFormat};
use depinfo::application::factories::{
    FormatterFactory, LocatorFactory, PresenterFactory, PresenterType, RepositorySettings,
};
use depinfo::application::read_models::ApplicationModelReportBuilder;
use depinfo::application::services::{system_properties, PomModelResolver};
use depinfo::application::use_cases::BuildApplicationModelUseCase;
use depinfo::dependency_info::domain::LaunchMode;
use depinfo::dependency_info::policies::ScopePolicy;
use depinfo::shared::error::ExitCode;
use depinfo::shared::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Settings after the CLI, the config file and the defaults have been merged
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    launch_mode: Option<LaunchMode>,
    scope_policy: ScopePolicy,
    repositories: RepositorySettings,
    system_properties: BTreeMap<String, String>,
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = merge_settings(&args, config.unwrap_or_default())?;
    debug!("Effective settings: {:?}", settings);

    // Create adapters (Dependency Injection)
    let build_model_reader = JsonBuildModelReader::new();
    let locator = LocatorFactory::create(&settings.repositories)?;
    let pom_resolver = PomModelResolver::new(locator, EffectiveModelBuilder::new())
        .with_system_properties(system_properties(&settings.system_properties));
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = BuildApplicationModelUseCase::new(
        build_model_reader,
        pom_resolver,
        settings.scope_policy,
        progress_reporter,
    );

    let request = ApplicationModelRequest::new(args.build_model.clone(), settings.launch_mode);
    let response = use_case.execute(request)?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let report = ApplicationModelReportBuilder::build(&response.model, response.launch_mode);
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads `--config` when given, otherwise looks for a config file next to
/// the build model.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(ref path) = args.config {
        return load_config_from_path(path).map(Some);
    }
    discover_config(&config_dir(&args.build_model))
}

fn config_dir(build_model: &Path) -> PathBuf {
    match build_model.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Precedence: CLI > config > defaults
fn merge_settings(args: &Args, config: ConfigFile) -> Result<Settings> {
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    let launch_mode = args.launch_mode.or_else(|| config.launch_mode());

    let scope_policy = match args.scope_policy {
        Some(preset) => ScopePolicy::from_preset(preset),
        None => match config.explicit_scope_policy()? {
            Some(policy) => policy,
            None => ScopePolicy::from_preset(config.scope_policy_preset().unwrap_or_default()),
        },
    };

    let remote_repositories = if !args.repositories.is_empty() {
        args.repositories.clone()
    } else {
        config
            .remote_repositories
            .clone()
            .unwrap_or_else(|| vec![MAVEN_CENTRAL_URL.to_string()])
    };

    let repositories = RepositorySettings {
        local_repository: args
            .local_repository
            .clone()
            .or_else(|| config.local_repository.clone()),
        remote_repositories,
        offline: args.offline || config.offline.unwrap_or(false),
    };

    Ok(Settings {
        format,
        launch_mode,
        scope_policy,
        repositories,
        system_properties: config.system_properties.unwrap_or_default(),
    })
}
