use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use onewallet_client::config::load_config;
use onewallet_client::lifecycle::signals::cancel_on_ctrl_c;
use onewallet_client::observability::logging;
use onewallet_client::{ClientError, HttpMethod, OneWalletApi, Shutdown};

#[derive(Parser)]
#[command(name = "onewallet-cli")]
#[command(about = "Send signed requests to the OneWallet API", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "onewallet.toml")]
    config: PathBuf,

    /// Override the configured base URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a player's credentials
    Authenticate { username: String, password: String },
    /// Fetch player information
    UserInfo {
        user_id: String,
        /// Comma-separated field list
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// Send an arbitrary signed request
    Request {
        method: String,
        /// Path including query string, e.g. /users/1?fields=balance
        path: String,
        /// JSON request body
        #[arg(long)]
        body: Option<String>,
        /// Retry budget for transport failures
        #[arg(long, default_value_t = 0)]
        retries: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    logging::init(&config.observability.log_level);

    tracing::info!(base_url = %config.base_url, access_id = %config.access_id, "onewallet-cli starting");

    let api = OneWalletApi::new(config);

    let payload = match cli.command {
        Commands::Authenticate { username, password } => {
            api.authenticate_user(&username, &password).await
        }
        Commands::UserInfo { user_id, fields } => {
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            let fields = (!fields.is_empty()).then_some(fields.as_slice());
            api.get_user_info(&user_id, fields).await
        }
        Commands::Request {
            method,
            path,
            body,
            retries,
        } => {
            let method: HttpMethod = method.parse()?;
            let mut spec = api.config().request(method, path, retries);
            spec.body = body.as_deref().map(|b| serde_json::from_str::<Value>(b)).transpose()?;

            let shutdown = Shutdown::new();
            cancel_on_ctrl_c(shutdown.clone());
            api.executor().execute_until(&spec, shutdown.subscribe()).await
        }
    };

    match payload {
        Ok(payload) => print_payload(&payload)?,
        Err(ClientError::Application { code, message, status, .. }) => {
            eprintln!("Error: wallet API returned status {} ({}: {})", status, code, message);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn print_payload(payload: &Value) -> Result<(), Box<dyn std::error::Error>> {
    match payload {
        Value::String(text) => println!("{}", text),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}
