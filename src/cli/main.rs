mod commands;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use workon::client::WorkOnClient;

use crate::settings::CliSettings;

#[derive(Debug, Parser)]
#[command(name = "workon")]
#[command(about = "Command line interface for the WorkOn RBGA API", version)]
struct Cli {
    /// Settings file; defaults to ~/.workon_cli.toml.
    #[arg(long, global = true, env = "WORKON_CLI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show or change the CLI settings.
    Config(ConfigArgs),
    /// Create a request from a JSON input file.
    Create {
        #[arg(long, short = 'i')]
        input: PathBuf,
        /// Create a draft with relaxed validation.
        #[arg(long)]
        draft: bool,
        /// Directory receiving the saved response.
        #[arg(long, default_value = ".")]
        save_dir: PathBuf,
    },
    /// Show the details of a request.
    View {
        #[arg(long, short = 'r')]
        request_id: String,
        #[arg(long)]
        approval_history: bool,
        /// Restrict the output to these data fields; repeatable.
        #[arg(long = "custom-field")]
        custom_fields: Vec<String>,
    },
    /// Show the localized status of a request.
    Status {
        #[arg(long, short = 'r')]
        request_id: String,
    },
    /// Fetch one attachment by name, or all of them.
    Attachments {
        #[arg(long, short = 'r')]
        request_id: String,
        /// NT id of the caller.
        #[arg(long)]
        user: String,
        #[arg(long, conflicts_with = "all")]
        name: Option<String>,
        #[arg(long)]
        all: bool,
    },
    /// Write a sample input document for `create`.
    Sample {
        #[arg(long, short = 'o', default_value = "sample_basic_request.json")]
        output: PathBuf,
    },
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[arg(long)]
    set_endpoint: Option<String>,
    #[arg(long)]
    set_key_id: Option<String>,
    #[arg(long)]
    set_timeout: Option<u64>,
    #[arg(long)]
    set_source_system: Option<String>,
    #[arg(long)]
    show: bool,
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(CliSettings::default_path);
    let settings = CliSettings::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), endpoint = %settings.endpoint, "settings loaded");

    let client = || WorkOnClient::new(settings.client_config());
    match cli.command {
        Command::Config(args) => configure(settings.clone(), &config_path, args),
        Command::Create {
            input,
            draft,
            save_dir,
        } => commands::create(&client()?, &settings, &input, draft, &save_dir).await,
        Command::View {
            request_id,
            approval_history,
            custom_fields,
        } => {
            let query = commands::detail_query(approval_history, custom_fields);
            commands::view(&client()?, &request_id, &query).await
        }
        Command::Status { request_id } => commands::status(&client()?, &request_id).await,
        Command::Attachments {
            request_id,
            user,
            name,
            all,
        } => {
            commands::attachments(&client()?, &request_id, &user, name.as_deref(), all).await
        }
        Command::Sample { output } => commands::sample(&settings, &output),
    }
}

fn configure(
    mut settings: CliSettings,
    path: &std::path::Path,
    args: ConfigArgs,
) -> anyhow::Result<()> {
    let mut changed = false;
    if let Some(endpoint) = args.set_endpoint {
        settings.endpoint = endpoint;
        changed = true;
    }
    if let Some(key_id) = args.set_key_id {
        settings.key_id = key_id;
        changed = true;
    }
    if let Some(timeout) = args.set_timeout {
        settings.timeout = timeout;
        changed = true;
    }
    if let Some(source_system) = args.set_source_system {
        settings.source_system = source_system;
        changed = true;
    }

    if changed {
        settings.save(path)?;
        println!("Configuration saved to {}", path.display());
    }
    if args.show || !changed {
        println!("Current configuration ({}):", path.display());
        println!("  endpoint = {}", settings.endpoint);
        println!("  key_id = {}", settings.masked_key_id());
        println!("  timeout = {}", settings.timeout);
        println!("  source_system = {}", settings.source_system);
    }
    Ok(())
}
