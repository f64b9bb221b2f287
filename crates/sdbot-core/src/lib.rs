//! Shared display primitives for sdbot chat responses.
//!
//! Provides the attachment card model serialized to the chat platform's wire
//! shape, the brand color applied to every card, and the numeric display
//! helpers used by response formatters.

pub mod attachment;
pub mod number_display;

pub use attachment::{Attachment, AttachmentField, BRAND_COLOR};
pub use number_display::{round3, seconds_label};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_serializes_to_wire_shape() {
        let card = Attachment {
            title: Some("service-1".to_string()),
            text: None,
            color: BRAND_COLOR.to_string(),
            fields: vec![AttachmentField::short("Group", "Ungrouped")],
            mrkdwn_in: Vec::new(),
        };
        let value = serde_json::to_value(&card).expect("serialize card");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "service-1",
                "color": "#8E44AD",
                "fields": [{"title": "Group", "value": "Ungrouped", "short": true}],
            })
        );
    }

    #[test]
    fn card_omits_absent_title_and_text() {
        let card = Attachment {
            title: None,
            text: None,
            color: BRAND_COLOR.to_string(),
            fields: Vec::new(),
            mrkdwn_in: Vec::new(),
        };
        let value = serde_json::to_value(&card).expect("serialize card");
        assert_eq!(value, serde_json::json!({"color": "#8E44AD"}));
    }

    #[test]
    fn markdown_card_round_trips() {
        let card = Attachment {
            title: Some("List All Services".to_string()),
            text: Some("type `sdbot services list`".to_string()),
            color: BRAND_COLOR.to_string(),
            fields: Vec::new(),
            mrkdwn_in: vec!["text".to_string()],
        };
        let encoded = serde_json::to_string(&card).expect("serialize card");
        let decoded: Attachment = serde_json::from_str(&encoded).expect("deserialize card");
        assert_eq!(decoded, card);
    }

    #[test]
    fn seconds_label_rounds_to_three_decimals() {
        assert_eq!(seconds_label(1.235), "1.235s");
        assert_eq!(seconds_label(0.123456), "0.123s");
        assert_eq!(seconds_label(0.0), "0s");
    }

    #[test]
    fn round3_matches_midpoint_average() {
        let average = (1.2345 + 1.2355) / 2.0;
        assert_eq!(seconds_label(average), "1.235s");
        assert_eq!(round3(2.0004), 2.0);
    }
}
