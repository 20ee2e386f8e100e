//! Shared traits and period labels for proforma primitives.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Labels the period the entered figures represent.
///
/// The straight per-period arithmetic is the same for any cadence; the label
/// only prefixes report lines.
#[derive(Default)]
pub enum ReportPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Custom(String),
}

impl ReportPeriod {
    /// Returns the label used as the report-line prefix.
    pub fn label(&self) -> &str {
        match self {
            ReportPeriod::Daily => "Daily",
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Yearly => "Yearly",
            ReportPeriod::Custom(label) => label,
        }
    }

    /// Parses a case-insensitive period name; `custom:<label>` keeps the
    /// label verbatim.
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(label) = value.strip_prefix("custom:") {
            if label.is_empty() {
                return None;
            }
            return Some(ReportPeriod::Custom(label.to_string()));
        }
        match value.to_ascii_lowercase().as_str() {
            "daily" => Some(ReportPeriod::Daily),
            "weekly" => Some(ReportPeriod::Weekly),
            "monthly" => Some(ReportPeriod::Monthly),
            "yearly" => Some(ReportPeriod::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
