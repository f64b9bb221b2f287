//! Chat command plugin relaying monitoring data into channel responses.
//!
//! Parses `sdbot services <command> [<name>]` messages, dispatches to the
//! monitoring facade, and renders results as attachment cards or inline text.

mod services_command;

pub use services_command::{
    CommandReply, HelpTopic, ServicesCommand, ServicesPlugin, METRICS_WINDOW_MINUTES,
};
