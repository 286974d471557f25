use anyhow::Result;
use clap::{Parser, Subcommand};
use env_config::{
    env::{ReadOptions, read_var},
    report::report,
    server_url::resolve_server_url,
    settings::Settings,
    source::SystemEnv,
    vars::KNOWN_VARS,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Inspect and validate environment configuration")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the value of one variable
    Get {
        /// Variable name
        name: String,
        /// Succeed with no output when the variable is absent
        #[arg(long)]
        optional: bool,
        /// Accept an explicitly empty value
        #[arg(long)]
        allow_empty: bool,
    },
    /// Print the public server URL
    ServerUrl,
    /// Report every known variable and validate startup settings
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "env_config=info,env_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let env = SystemEnv;

    match cli.cmd {
        Cmd::Get {
            name,
            optional,
            allow_empty,
        } => {
            let options = ReadOptions::default()
                .required(!optional)
                .allow_empty(allow_empty);
            if let Some(value) = read_var(&env, &name, options)? {
                println!("{value}");
            }
        }
        Cmd::ServerUrl => {
            println!("{}", resolve_server_url(&env)?);
        }
        Cmd::Check { json } => {
            let rows = report(&env, KNOWN_VARS);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    let req = if row.required { "required" } else { "optional" };
                    println!("{:<32} {:<9} {}", row.name, req, row.status);
                }
            }

            Settings::from_env(&env)?;
            tracing::info!("configuration is valid");
        }
    }

    Ok(())
}
