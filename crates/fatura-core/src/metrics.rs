//! Derived consumption and billing metrics.

use crate::model::{DerivedMetrics, RawExtraction};

/// Compute dashboard metrics from an extraction.
///
/// Total function with no failure mode: every absent input counts as zero,
/// and the GD credit's sign is stripped (the bill encodes it as a negative
/// value).
pub fn derive_metrics(raw: &RawExtraction) -> DerivedMetrics {
    let electric_quantity = raw.electric_energy.as_ref().map_or(0.0, |i| i.quantity);
    let electric_value = raw.electric_energy.as_ref().map_or(0.0, |i| i.value);
    let scee_quantity = raw.scee_energy.as_ref().map_or(0.0, |i| i.quantity);
    let scee_value = raw.scee_energy.as_ref().map_or(0.0, |i| i.value);
    let compensated_quantity = raw.compensated_energy.as_ref().map_or(0.0, |i| i.quantity);
    let compensated_value = raw.compensated_energy.as_ref().map_or(0.0, |i| i.value);
    let public_lighting = raw.public_lighting_contribution.unwrap_or(0.0);

    DerivedMetrics {
        energy_consumption: electric_quantity + scee_quantity,
        compensated_energy: compensated_quantity,
        total_value_without_gd: electric_value + scee_value + public_lighting,
        gd_savings: compensated_value.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineItem;
    use pretty_assertions::assert_eq;

    fn kwh(quantity: f64, unit_price: f64, value: f64) -> LineItem {
        LineItem {
            unit: "kWh".to_string(),
            quantity,
            unit_price,
            value,
        }
    }

    #[test]
    fn test_all_absent_yields_zeroes() {
        let metrics = derive_metrics(&RawExtraction::default());
        assert_eq!(metrics, DerivedMetrics::default());
        assert_eq!(metrics.total_amount(), 0.0);
    }

    #[test]
    fn test_full_extraction() {
        let raw = RawExtraction {
            electric_energy: Some(kwh(100.0, 0.95863273, 95.86)),
            scee_energy: Some(kwh(2220.0, 0.50196, 1135.57)),
            compensated_energy: Some(kwh(2220.0, 0.48733, -1081.87)),
            public_lighting_contribution: Some(40.45),
            ..Default::default()
        };

        let metrics = derive_metrics(&raw);
        assert_eq!(metrics.energy_consumption, 2320.0);
        assert_eq!(metrics.compensated_energy, 2220.0);
        assert!((metrics.total_value_without_gd - 1271.88).abs() < 0.01);
        assert!((metrics.gd_savings - 1081.87).abs() < 0.01);
        assert!((metrics.total_amount() - 190.01).abs() < 0.01);
    }

    #[test]
    fn test_gd_savings_strips_the_credit_sign() {
        let negative = RawExtraction {
            compensated_energy: Some(kwh(2220.0, 0.48733, -1081.87)),
            ..Default::default()
        };
        assert!((derive_metrics(&negative).gd_savings - 1081.87).abs() < 0.01);

        let positive = RawExtraction {
            compensated_energy: Some(kwh(2220.0, 0.48733, 1081.87)),
            ..Default::default()
        };
        assert!((derive_metrics(&positive).gd_savings - 1081.87).abs() < 0.01);
    }

    #[test]
    fn test_electric_only() {
        let raw = RawExtraction {
            electric_energy: Some(kwh(150.0, 0.80333, 120.50)),
            ..Default::default()
        };

        let metrics = derive_metrics(&raw);
        assert_eq!(metrics.energy_consumption, 150.0);
        assert_eq!(metrics.compensated_energy, 0.0);
        assert!((metrics.total_value_without_gd - 120.50).abs() < 0.01);
        assert_eq!(metrics.gd_savings, 0.0);
    }

    #[test]
    fn test_scee_only_consumption() {
        let raw = RawExtraction {
            scee_energy: Some(kwh(2220.0, 0.50196, 1135.57)),
            ..Default::default()
        };
        assert_eq!(derive_metrics(&raw).energy_consumption, 2220.0);
    }
}
