//! `sdbot services` grammar parsing and command validation.

use std::sync::OnceLock;

use regex::Regex;

use super::{HelpTopic, ServicesCommand};

fn command_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[sS][dD][bB]ot services? (\w+)\s?(\w+)?")
            .expect("static command pattern compiles")
    })
}

pub(super) fn services_usage(command: &str) -> String {
    format!("It looks like you forgot to add a name, try `sdbot services {command} serviceName`")
}

pub(super) fn unknown_command_reply() -> String {
    "I'm sorry, but couldn't quite understand you there, perhaps you could try one of these \
     commands `find`, `status`, `value`"
        .to_string()
}

/// Extracts and validates a command from raw chat text.
///
/// `None` means the text does not match the grammar at all. Validation
/// failures come back as `ServicesCommand::Invalid` so the caller replies
/// inline without touching the network.
pub(super) fn parse_services_command(text: &str) -> Option<ServicesCommand> {
    let captures = command_pattern().captures(text.trim())?;
    let command = captures.get(1).map_or("", |group| group.as_str());
    let name = captures
        .get(2)
        .map_or("", |group| group.as_str())
        .trim()
        .to_string();

    if name.is_empty() && !matches!(command, "list" | "help") {
        return Some(ServicesCommand::Invalid {
            message: services_usage(command),
        });
    }

    let parsed = match command {
        "help" => ServicesCommand::Help { topic: None },
        "status" | "find" | "list" | "value" if name == "help" => ServicesCommand::Help {
            topic: HelpTopic::for_command(command),
        },
        "status" => ServicesCommand::Status { name },
        "find" => ServicesCommand::Find { pattern: name },
        "list" => ServicesCommand::List {
            count: (!name.is_empty()).then_some(name),
        },
        // Reachable on purpose even though usage/help text never mentions it.
        "value" => ServicesCommand::Value { name },
        _ => ServicesCommand::Invalid {
            message: unknown_command_reply(),
        },
    };
    Some(parsed)
}
