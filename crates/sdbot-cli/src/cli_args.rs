use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "sdbot",
    about = "Relay Server Density monitoring data into a Slack channel",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "SDBOT_SD_TOKEN",
        help = "Server Density API token, sent as a query parameter on every call"
    )]
    pub monitoring_token: String,

    #[arg(
        long,
        env = "SDBOT_SD_API_BASE",
        default_value = "https://api.serverdensity.io",
        help = "Base URL for the Server Density API"
    )]
    pub monitoring_api_base: String,

    #[arg(
        long,
        env = "SDBOT_SLACK_TOKEN",
        help = "Slack bot token; when omitted the reply payload is printed instead of posted"
    )]
    pub slack_token: Option<String>,

    #[arg(
        long,
        env = "SDBOT_SLACK_API_BASE",
        default_value = "https://slack.com/api",
        help = "Base URL for the Slack Web API"
    )]
    pub slack_api_base: String,

    #[arg(
        long,
        env = "SDBOT_SLACK_CHANNEL",
        help = "Channel id to post card replies to"
    )]
    pub channel: Option<String>,

    #[arg(
        long,
        default_value_t = 30_000,
        help = "HTTP request timeout in milliseconds for both API clients"
    )]
    pub request_timeout_ms: u64,

    #[arg(help = "Chat message text to process, e.g. \"sdbot services list 2\"")]
    pub message: String,
}
