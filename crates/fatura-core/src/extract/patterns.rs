//! Regex catalog for the distributor's fixed bill template.
//!
//! Labels are matched case-sensitively: the source documents come from a
//! fixed template, and a layout with different wording yields absent fields
//! rather than false positives.

use lazy_static::lazy_static;
use regex::Regex;

/// Which line-item slot a catalog rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Electric,
    Scee,
    Compensated,
}

/// One entry of the line-item rule table: target field, label, unit, and a
/// pattern capturing (quantity, unit price, value) in that order.
pub struct LineItemRule {
    pub field: LineItemField,
    pub label: &'static str,
    pub unit: &'static str,
    pub pattern: &'static Regex,
}

lazy_static! {
    /// Identifier header followed by the two whitespace-separated ids:
    /// first the client number, then the installation number.
    pub static ref CLIENT_INSTALLATION: Regex = Regex::new(
        r"Nº DO CLIENTE\s+Nº DA INSTALAÇÃO\s+(\d+)\s+(\d+)"
    ).unwrap();

    /// Reference month (`MMM/YYYY`), anchored after the payable-amount
    /// column header.
    pub static ref REFERENCE_MONTH: Regex = Regex::new(
        r"Valor a pagar \(R\$\)\s+([A-Z]{3}/\d{4})"
    ).unwrap();

    pub static ref ELECTRIC_ENERGY: Regex = Regex::new(
        r"Energia Elétrica\s*kWh\s+([\d.,]+)\s+([\d.,]+)\s+([\d.,]+)"
    ).unwrap();

    pub static ref SCEE_ENERGY: Regex = Regex::new(
        r"Energia SCEE s/ ICMS\s*kWh\s+([\d.,]+)\s+([\d.,]+)\s+([\d.,]+)"
    ).unwrap();

    /// The GD credit always carries a leading minus; requiring it keeps the
    /// pattern off unrelated lines.
    pub static ref COMPENSATED_ENERGY: Regex = Regex::new(
        r"Energia compensada GD I\s*kWh\s+([\d.,]+)\s+([\d.,]+)\s+(-[\d.,]+)"
    ).unwrap();

    pub static ref PUBLIC_LIGHTING: Regex = Regex::new(
        r"Contrib Ilum Publica Municipal\s+([\d.,]+)"
    ).unwrap();

    /// The enumerable line-item rule table. New label variants are added
    /// here, not in extractor control flow.
    pub static ref LINE_ITEM_RULES: [LineItemRule; 3] = [
        LineItemRule {
            field: LineItemField::Electric,
            label: "Energia Elétrica",
            unit: "kWh",
            pattern: &ELECTRIC_ENERGY,
        },
        LineItemRule {
            field: LineItemField::Scee,
            label: "Energia SCEE s/ ICMS",
            unit: "kWh",
            pattern: &SCEE_ENERGY,
        },
        LineItemRule {
            field: LineItemField::Compensated,
            label: "Energia compensada GD I",
            unit: "kWh",
            pattern: &COMPENSATED_ENERGY,
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_installation_header() {
        let caps = CLIENT_INSTALLATION
            .captures("Nº DO CLIENTE Nº DA INSTALAÇÃO 7202210726 3001422762")
            .unwrap();
        assert_eq!(&caps[1], "7202210726");
        assert_eq!(&caps[2], "3001422762");
    }

    #[test]
    fn test_reference_month_anchor() {
        let text = "Referente a Vencimento Valor a pagar (R$) MAI/2024 10/06/2024 190,01";
        let caps = REFERENCE_MONTH.captures(text).unwrap();
        assert_eq!(&caps[1], "MAI/2024");

        // Without the anchor phrase the month is not recognized.
        assert!(REFERENCE_MONTH.captures("Referente a MAI/2024").is_none());
    }

    #[test]
    fn test_line_item_rules_capture_three_tokens() {
        let text = "Energia Elétrica kWh 100 0,95863273 95,86 \
                    Energia SCEE s/ ICMS kWh 2.220 0,50196 1.135,57 \
                    Energia compensada GD I kWh 2.220 0,48733 -1.081,87";

        for rule in LINE_ITEM_RULES.iter() {
            let caps = rule.pattern.captures(text).unwrap_or_else(|| {
                panic!("rule {:?} did not match", rule.field);
            });
            assert_eq!(caps.len(), 4);
        }
    }

    #[test]
    fn test_compensated_requires_negative_value() {
        let text = "Energia compensada GD I kWh 2.220 0,48733 1.081,87";
        assert!(COMPENSATED_ENERGY.captures(text).is_none());
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let text = "energia elétrica kWh 100 0,95863273 95,86";
        assert!(ELECTRIC_ENERGY.captures(text).is_none());
    }

    #[test]
    fn test_public_lighting() {
        let caps = PUBLIC_LIGHTING
            .captures("Contrib Ilum Publica Municipal 40,45")
            .unwrap();
        assert_eq!(&caps[1], "40,45");
    }
}
