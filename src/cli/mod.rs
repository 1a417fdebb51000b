pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

use crate::client::{ApiClient, ClientError};

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley CLI - console client for the thread/message API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "PARLEY_API_URL",
        default_value = "http://127.0.0.1:3000",
        help = "Base URL of the API server"
    )]
    pub server: String,

    #[arg(
        long,
        global = true,
        env = "PARLEY_TOKEN",
        help = "Bearer token for authenticated requests"
    )]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Thread management")]
    Threads {
        #[command(subcommand)]
        cmd: commands::threads::ThreadCommands,
    },

    #[command(about = "Post a message to a thread")]
    Post {
        #[arg(help = "Thread id")]
        thread_id: i64,
        #[arg(help = "Message content")]
        content: String,
        #[arg(long, default_value = "user", help = "Message author kind: user or bot")]
        kind: String,
    },

    #[command(about = "Mint a development token signed with AUTH_JWT_SECRET")]
    Token {
        #[arg(help = "Subject identifier")]
        subject: String,
        #[arg(long, default_value_t = 24, help = "Token lifetime in hours")]
        ttl_hours: i64,
    },

    #[command(about = "Apply database migrations from ./migrations")]
    Migrate,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(cli.server.clone(), cli.token.clone());

    let result = match cli.command {
        Commands::Threads { cmd } => commands::threads::handle(cmd, &client, output_format).await,
        Commands::Post {
            thread_id,
            content,
            kind,
        } => commands::post::handle(&client, thread_id, &kind, &content, output_format).await,
        Commands::Token { subject, ttl_hours } => commands::token::handle(&subject, ttl_hours),
        Commands::Migrate => commands::migrate::handle().await,
    };

    // The console analogue of the browser redirect-to-login on 401: the
    // session is gone, tell the user how to get back and where to resume.
    match result {
        Err(err) => match err.downcast::<ClientError>() {
            Ok(ClientError::SessionExpired { return_to }) => anyhow::bail!(
                "session expired; set PARLEY_TOKEN to a fresh token and retry {}",
                return_to
            ),
            Ok(other) => Err(other.into()),
            Err(err) => Err(err),
        },
        ok => ok,
    }
}
