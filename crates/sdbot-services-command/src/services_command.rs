//! Services command dispatch over the monitoring facade.

use std::sync::Arc;

use regex::Regex;
use sdbot_core::{seconds_label, Attachment};
use sdbot_monitoring::{
    CheckType, MetricPoint, MetricsWindow, MonitoringApi, MonitoringError, ServiceRecord,
};
use serde_json::json;

mod command_parser;
mod service_cards;

use command_parser::parse_services_command;
use service_cards::{format_services, help_cards, status_card, value_card};

/// Trailing window queried for metric values, in minutes.
pub const METRICS_WINDOW_MINUTES: i64 = 35;

const DEFAULT_LIST_LIMIT: usize = 5;
const NOT_FOUND_REPLY: &str = "I couldn't find your service";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Help table key; one entry per documented command.
pub enum HelpTopic {
    Status,
    Find,
    List,
}

impl HelpTopic {
    fn for_command(command: &str) -> Option<Self> {
        match command {
            "status" => Some(Self::Status),
            "find" => Some(Self::Find),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// A validated `sdbot services` command ready for dispatch.
///
/// `Invalid` carries the user-facing explanation for inputs that matched the
/// grammar but failed validation; those never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicesCommand {
    Help { topic: Option<HelpTopic> },
    Status { name: String },
    Find { pattern: String },
    List { count: Option<String> },
    Value { name: String },
    Invalid { message: String },
}

/// Outcome of one command invocation.
///
/// `Cards` is posted as a rich attachment payload with `message` as the body
/// text; `Text` is returned for inline display.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandReply {
    Cards {
        attachments: Vec<Attachment>,
        message: String,
    },
    Text(String),
}

/// The services plugin: stateless across invocations, holding only the
/// monitoring facade handle.
pub struct ServicesPlugin {
    api: Arc<dyn MonitoringApi>,
}

impl ServicesPlugin {
    pub fn new(api: Arc<dyn MonitoringApi>) -> Self {
        Self { api }
    }

    /// Parses raw chat text. `None` means the message is not addressed to
    /// this plugin and the caller should take no action.
    pub fn parse(text: &str) -> Option<ServicesCommand> {
        parse_services_command(text)
    }

    /// Parses and handles one chat message end to end.
    pub async fn handle_message(
        &self,
        text: &str,
    ) -> Result<Option<CommandReply>, MonitoringError> {
        let Some(command) = Self::parse(text) else {
            return Ok(None);
        };
        tracing::info!(target: "sdbot::services", ?command, "dispatching services command");
        self.handle(command).await.map(Some)
    }

    pub async fn handle(&self, command: ServicesCommand) -> Result<CommandReply, MonitoringError> {
        match command {
            ServicesCommand::Help { topic } => Ok(CommandReply::Cards {
                attachments: help_cards(topic),
                message: String::new(),
            }),
            ServicesCommand::Status { name } => self.get_status(&name).await,
            ServicesCommand::Find { pattern } => self.find_service(&pattern).await,
            ServicesCommand::List { count } => self.list_services(count.as_deref()).await,
            ServicesCommand::Value { name } => self.get_value(&name).await,
            ServicesCommand::Invalid { message } => Ok(CommandReply::Text(message)),
        }
    }

    async fn list_services(&self, count: Option<&str>) -> Result<CommandReply, MonitoringError> {
        let limit = match count {
            None => DEFAULT_LIST_LIMIT,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(value) => value,
                Err(_) => {
                    return Ok(CommandReply::Text(format!(
                        "{raw} is not a number, now is it. You see, it needs to be."
                    )));
                }
            },
        };

        let services = self.api.list_services().await?;
        let truncated = &services[..services.len().min(limit)];
        let http: Vec<&ServiceRecord> = truncated
            .iter()
            .filter(|service| service.check_type == CheckType::Http)
            .collect();
        let tcp: Vec<&ServiceRecord> = truncated
            .iter()
            .filter(|service| service.check_type == CheckType::Tcp)
            .collect();

        let message = format!(
            "You have {} services, if you would like to list more than these {} services, \
             use `sdbot services list <no>`",
            services.len(),
            truncated.len()
        );
        Ok(CommandReply::Cards {
            attachments: format_services(&http, &tcp),
            message,
        })
    }

    async fn find_service(&self, pattern: &str) -> Result<CommandReply, MonitoringError> {
        let matcher = match Regex::new(pattern) {
            Ok(matcher) => matcher,
            Err(_) => {
                return Ok(CommandReply::Text(format!(
                    "`{pattern}` is not a pattern I can search with, try a simpler one"
                )));
            }
        };

        let services = self.api.list_services().await?;
        let http: Vec<&ServiceRecord> = services
            .iter()
            .filter(|service| {
                service.check_type == CheckType::Http && matcher.is_match(&service.name)
            })
            .collect();
        let tcp: Vec<&ServiceRecord> = services
            .iter()
            .filter(|service| {
                service.check_type == CheckType::Tcp && matcher.is_match(&service.name)
            })
            .collect();

        Ok(CommandReply::Cards {
            attachments: format_services(&http, &tcp),
            message: String::new(),
        })
    }

    async fn get_value(&self, name: &str) -> Result<CommandReply, MonitoringError> {
        let services = self.api.list_services().await?;
        let Some(id) = find_service_id(name, &services) else {
            return Ok(CommandReply::Text(NOT_FOUND_REPLY.to_string()));
        };

        let service = self.api.view_service(&id).await?;
        let mut attachments = Vec::with_capacity(service.check_locations.len());
        for location in &service.check_locations {
            let filter = json!({ "time": { location: "all" } });
            let window = MetricsWindow::trailing_minutes(METRICS_WINDOW_MINUTES);
            let groups = self.api.metrics(&id, window, &filter).await?;
            let series = groups
                .first()
                .and_then(|group| group.tree.first())
                .ok_or_else(|| {
                    MonitoringError::InvalidResponse(format!(
                        "metrics response for location {location} has no series"
                    ))
                })?;
            let (latest, average) = latest_and_average(&series.data);
            attachments.push(value_card(&series.name, &average, &latest));
        }

        let message = format!(
            "Here is the latest values for the {} locations of the service {}",
            service.check_locations.len(),
            name
        );
        Ok(CommandReply::Cards {
            attachments,
            message,
        })
    }

    async fn get_status(&self, name: &str) -> Result<CommandReply, MonitoringError> {
        let services = self.api.list_services().await?;
        let Some(id) = find_service_id(name, &services) else {
            return Ok(CommandReply::Text(NOT_FOUND_REPLY.to_string()));
        };

        let nodes = self.api.nodes().await?;
        let statuses = self.api.location_statuses(&id).await?;
        let attachments = statuses
            .iter()
            .map(|status| {
                let title = nodes
                    .iter()
                    .find(|node| node.id == status.location)
                    .map(|node| node.name.clone());
                status_card(title, status)
            })
            .collect();

        let message = format!("This is the status of all your locations for the service {name}");
        Ok(CommandReply::Cards {
            attachments,
            message,
        })
    }
}

/// Resolves a user-supplied name to a service id: case-insensitive exact
/// match first, then a substring match that is unique across the inventory.
fn find_service_id(name: &str, services: &[ServiceRecord]) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    if let Some(service) = services
        .iter()
        .find(|service| service.name.to_lowercase() == wanted)
    {
        return Some(service.id.clone());
    }

    let mut candidates = services
        .iter()
        .filter(|service| service.name.to_lowercase().contains(&wanted));
    let first = candidates.next()?;
    candidates.next().is_none().then(|| first.id.clone())
}

/// Latest and mean sample rendered for display; an empty series degrades to
/// the `down` sentinel instead of failing.
fn latest_and_average(data: &[MetricPoint]) -> (String, String) {
    match data.last() {
        None => ("down".to_string(), "down".to_string()),
        Some(last) => {
            let sum: f64 = data.iter().map(|point| point.y).sum();
            let average = sum / data.len() as f64;
            (seconds_label(last.y), seconds_label(average))
        }
    }
}
