//! Invoice data models for the distributor's bill template.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One billed energy category from the bill's line-item table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Billing unit; "kWh" for every recognized category.
    pub unit: String,

    /// Billed quantity.
    pub quantity: f64,

    /// Unit price in R$.
    pub unit_price: f64,

    /// Line value in R$. Negative for compensated energy (a credit).
    pub value: f64,
}

/// The bag of fields recovered from one bill.
///
/// The bill layout guarantees nothing: any field may be absent, and each is
/// recovered independently of the others. Defaulting of absent fields happens
/// in [`crate::metrics::derive_metrics`] and in the assembler, never at the
/// point of use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExtraction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_number: Option<String>,

    /// Billing period, `MMM/YYYY` (e.g. "MAI/2024").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_month: Option<String>,

    /// Active electricity ("Energia Elétrica").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electric_energy: Option<LineItem>,

    /// Subsidized compensation-scheme energy ("Energia SCEE s/ ICMS").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scee_energy: Option<LineItem>,

    /// Distributed-generation credit ("Energia compensada GD I").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_energy: Option<LineItem>,

    /// Municipal public-lighting contribution in R$.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_lighting_contribution: Option<f64>,
}

/// Dashboard metrics derived from a [`RawExtraction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Total energy consumed in kWh (electric + SCEE quantities).
    pub energy_consumption: f64,

    /// Compensated energy in kWh.
    pub compensated_energy: f64,

    /// Billed value before the GD credit, in R$.
    pub total_value_without_gd: f64,

    /// Absolute monetary value of the GD credit, in R$.
    pub gd_savings: f64,
}

impl DerivedMetrics {
    /// Final payable amount: value before the credit minus the savings.
    pub fn total_amount(&self) -> f64 {
        self.total_value_without_gd - self.gd_savings
    }
}

/// The identifying triple of an invoice. No two accepted invoices may share
/// it; the store owns that constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceKey {
    pub client_number: String,
    pub installation_number: String,
    pub reference_month: String,
}

impl fmt::Display for InvoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client {} / installation {} / {}",
            self.client_number, self.installation_number, self.reference_month
        )
    }
}

/// An assembled invoice awaiting persistence; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCandidate {
    pub client_number: String,
    pub installation_number: String,
    pub reference_month: String,

    pub electricity_consumption: f64,
    pub electricity_value: f64,
    pub scee_consumption: f64,
    pub scee_value: f64,
    pub compensated_energy_consumption: f64,
    pub compensated_energy_value: f64,
    pub public_lighting_contribution: f64,

    pub total_energy_consumption: f64,
    pub total_value_without_gd: f64,
    pub gd_savings: f64,
    pub total_amount: f64,
}

impl InvoiceCandidate {
    /// The identifying triple of this candidate.
    pub fn key(&self) -> InvoiceKey {
        InvoiceKey {
            client_number: self.client_number.clone(),
            installation_number: self.installation_number.clone(),
            reference_month: self.reference_month.clone(),
        }
    }

    /// Promote the candidate to a persisted invoice with a store-assigned id.
    pub fn with_id(self, id: u64) -> Invoice {
        Invoice {
            id,
            client_number: self.client_number,
            installation_number: self.installation_number,
            reference_month: self.reference_month,
            electricity_consumption: self.electricity_consumption,
            electricity_value: self.electricity_value,
            scee_consumption: self.scee_consumption,
            scee_value: self.scee_value,
            compensated_energy_consumption: self.compensated_energy_consumption,
            compensated_energy_value: self.compensated_energy_value,
            public_lighting_contribution: self.public_lighting_contribution,
            total_energy_consumption: self.total_energy_consumption,
            total_value_without_gd: self.total_value_without_gd,
            gd_savings: self.gd_savings,
            total_amount: self.total_amount,
        }
    }
}

/// Canonical persisted invoice. Never mutated after creation; a correction
/// requires a new extraction cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Store-assigned identifier.
    pub id: u64,

    pub client_number: String,
    pub installation_number: String,
    pub reference_month: String,

    pub electricity_consumption: f64,
    pub electricity_value: f64,
    pub scee_consumption: f64,
    pub scee_value: f64,
    pub compensated_energy_consumption: f64,
    pub compensated_energy_value: f64,
    pub public_lighting_contribution: f64,

    pub total_energy_consumption: f64,
    pub total_value_without_gd: f64,
    pub gd_savings: f64,
    pub total_amount: f64,
}

impl Invoice {
    /// The identifying triple of this invoice.
    pub fn key(&self) -> InvoiceKey {
        InvoiceKey {
            client_number: self.client_number.clone(),
            installation_number: self.installation_number.clone(),
            reference_month: self.reference_month.clone(),
        }
    }
}
