//! Card construction for service listings, statuses, metric values, and help.

use sdbot_core::{seconds_label, Attachment, AttachmentField};
use sdbot_monitoring::{LocationStatus, ServiceRecord};
use serde_json::Value;

use super::HelpTopic;

const HELP_ENTRIES: [(HelpTopic, &str, &str); 3] = [
    (
        HelpTopic::Status,
        "Overall Status",
        "Overall Status displays statistics about your services. It includes _Round trip \
         time_, _Response Time_, _Status Code_ and _Status of location_. To get the status \
         of a service you can type `sdbot services status serviceName`",
    ),
    (
        HelpTopic::Find,
        "Find a Service",
        "You can find a service by typing `sdbot services find serviceName`. I can also \
         accept regex for the argument `serviceName`. For example `sdbot services find 2$`.",
    ),
    (
        HelpTopic::List,
        "List All Services",
        "For a list of all services, type `sdbot services list <no>`. In this case `<no>` \
         is a number. If you leave it out I will list the first 5 services.",
    ),
];

/// Help cards in fixed table order; a topic narrows to its single entry.
pub(super) fn help_cards(topic: Option<HelpTopic>) -> Vec<Attachment> {
    HELP_ENTRIES
        .iter()
        .filter(|(entry, _, _)| topic.map_or(true, |wanted| wanted == *entry))
        .map(|(_, title, text)| Attachment::markdown(*title, *text))
        .collect()
}

/// http cards first, then tcp; relative API order preserved within each.
pub(super) fn format_services(
    http: &[&ServiceRecord],
    tcp: &[&ServiceRecord],
) -> Vec<Attachment> {
    let mut cards = Vec::with_capacity(http.len() + tcp.len());
    cards.extend(http.iter().map(|service| http_card(service)));
    cards.extend(tcp.iter().map(|service| tcp_card(service)));
    cards
}

fn group_label(service: &ServiceRecord) -> String {
    service
        .group
        .clone()
        .filter(|group| !group.is_empty())
        .unwrap_or_else(|| "Ungrouped".to_string())
}

fn http_card(service: &ServiceRecord) -> Attachment {
    Attachment::titled(
        service.name.clone(),
        vec![
            AttachmentField::short("Group", group_label(service)),
            AttachmentField::short("Type of check", service.check_type.as_str()),
            AttachmentField::short("Url", service.check_url.clone().unwrap_or_default()),
            AttachmentField::short("Method", service.check_method.clone().unwrap_or_default()),
            AttachmentField::short(
                "Slow threshold",
                format!("{}ms", service.slow_threshold.unwrap_or_default()),
            ),
        ],
    )
}

fn tcp_card(service: &ServiceRecord) -> Attachment {
    Attachment::titled(
        service.name.clone(),
        vec![
            AttachmentField::short("Group", group_label(service)),
            AttachmentField::short("Type of check", service.check_type.as_str()),
            AttachmentField::short("Host", service.host.clone().unwrap_or_default()),
            AttachmentField::short(
                "Port",
                service.port.map(|port| port.to_string()).unwrap_or_default(),
            ),
        ],
    )
}

/// Status card for one probe location; a title is present only when the
/// location id resolved to a known monitoring node.
pub(super) fn status_card(title: Option<String>, status: &LocationStatus) -> Attachment {
    Attachment::titled(
        title,
        vec![
            AttachmentField::short("Round Trip Time", seconds_label(status.rtt.unwrap_or(0.0))),
            AttachmentField::short("Status of Location", status.status.clone()),
            AttachmentField::short("Response Time", seconds_label(status.time.unwrap_or(0.0))),
            AttachmentField::short("Status Code", json_value_label(&status.code)),
        ],
    )
}

pub(super) fn value_card(series_name: &str, average: &str, latest: &str) -> Attachment {
    Attachment::titled(
        series_name.to_string(),
        vec![
            AttachmentField::short("30 Minute Average", average),
            AttachmentField::short("Latest Value", latest),
        ],
    )
}

/// Renders a raw JSON value for a card field, without quotes for strings.
fn json_value_label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
