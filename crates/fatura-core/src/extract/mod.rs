//! Rule-based field extraction for the bill template.

pub mod numbers;
pub mod patterns;

pub use numbers::parse_locale_number;

use tracing::debug;

use crate::model::{LineItem, RawExtraction};
use patterns::{
    LineItemField, LineItemRule, CLIENT_INSTALLATION, LINE_ITEM_RULES, PUBLIC_LIGHTING,
    REFERENCE_MONTH,
};

/// Apply the whole pattern catalog to linearized bill text.
///
/// Every pattern is applied independently: a miss records an absent field
/// and never fails the extraction. An unparsable numeric token is treated
/// the same as a miss.
pub fn parse_text(text: &str) -> RawExtraction {
    let mut raw = RawExtraction::default();

    if let Some(caps) = CLIENT_INSTALLATION.captures(text) {
        raw.client_number = Some(caps[1].to_string());
        raw.installation_number = Some(caps[2].to_string());
    } else {
        debug!("client/installation header not found");
    }

    if let Some(caps) = REFERENCE_MONTH.captures(text) {
        raw.reference_month = Some(caps[1].to_string());
    } else {
        debug!("reference month anchor not found");
    }

    for rule in LINE_ITEM_RULES.iter() {
        let Some(item) = extract_line_item(rule, text) else {
            debug!(label = rule.label, "line item not found");
            continue;
        };
        match rule.field {
            LineItemField::Electric => raw.electric_energy = Some(item),
            LineItemField::Scee => raw.scee_energy = Some(item),
            LineItemField::Compensated => raw.compensated_energy = Some(item),
        }
    }

    if let Some(caps) = PUBLIC_LIGHTING.captures(text) {
        raw.public_lighting_contribution = parse_locale_number(&caps[1]);
    }

    raw
}

fn extract_line_item(rule: &LineItemRule, text: &str) -> Option<LineItem> {
    let caps = rule.pattern.captures(text)?;
    Some(LineItem {
        unit: rule.unit.to_string(),
        quantity: parse_locale_number(&caps[1])?,
        unit_price: parse_locale_number(&caps[2])?,
        value: parse_locale_number(&caps[3])?,
    })
}
