//! Slack Web API client used to post command responses.

mod slack_api_client;

pub use slack_api_client::{SlackApiClient, SlackError, SlackPostedMessage};
