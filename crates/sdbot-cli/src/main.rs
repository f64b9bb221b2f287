//! One-shot harness feeding a chat message through the services plugin.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use sdbot_monitoring::{MonitoringApiClient, MonitoringConfig};
use sdbot_services_command::{CommandReply, ServicesPlugin};
use sdbot_slack::SlackApiClient;

mod cli_args;

use cli_args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let monitoring = MonitoringApiClient::new(MonitoringConfig {
        api_base: cli.monitoring_api_base.clone(),
        token: cli.monitoring_token.clone(),
        request_timeout_ms: cli.request_timeout_ms,
    })
    .context("failed to build monitoring api client")?;
    let plugin = ServicesPlugin::new(Arc::new(monitoring));

    let reply = plugin
        .handle_message(&cli.message)
        .await
        .context("services command failed")?;

    match reply {
        None => {
            tracing::info!(target: "sdbot::cli", "message did not match the services command grammar");
        }
        Some(CommandReply::Text(text)) => {
            println!("{text}");
        }
        Some(CommandReply::Cards {
            attachments,
            message,
        }) => match (cli.slack_token.as_deref(), cli.channel.as_deref()) {
            (Some(token), Some(channel)) => {
                let slack = SlackApiClient::new(
                    cli.slack_api_base.clone(),
                    token.to_string(),
                    cli.request_timeout_ms,
                )
                .context("failed to build slack client")?;
                let posted = slack
                    .post_message(channel, &message, &attachments)
                    .await
                    .context("failed to post reply to slack")?;
                tracing::info!(
                    target: "sdbot::cli",
                    channel = %posted.channel,
                    ts = %posted.ts,
                    cards = attachments.len(),
                    "posted services reply"
                );
            }
            _ => {
                let payload = json!({ "text": message, "attachments": attachments });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
        },
    }

    Ok(())
}
