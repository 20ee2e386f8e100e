//! Revenue and vacancy stream types for the income ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::ledger::LedgerError;

/// Name reserved for the aggregate vacancy entry in reports.
pub const AGGREGATE_VACANCY_NAME: &str = "total";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Describes how a stream's per-unit amount is supplied.
pub enum AmountBasis {
    /// A caller-supplied average applied across a unit count.
    Uniform { amount: f64, units: u32 },
    /// Explicit per-unit amounts; the average and unit count derive from the
    /// list, overriding any caller idea of a count.
    Listed(Vec<f64>),
}

impl AmountBasis {
    /// Resolves the basis into `(average, units)`.
    pub fn resolve(&self) -> Result<(f64, u32), LedgerError> {
        match self {
            AmountBasis::Uniform { amount, units } => {
                if *units == 0 {
                    return Err(LedgerError::ZeroUnits);
                }
                Ok((*amount, *units))
            }
            AmountBasis::Listed(amounts) => {
                if amounts.is_empty() {
                    return Err(LedgerError::EmptyAmounts);
                }
                let average = amounts.iter().sum::<f64>() / amounts.len() as f64;
                Ok((average, amounts.len() as u32))
            }
        }
    }
}

/// A named income line: `average_amount` collected across `units`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueStream {
    pub id: Uuid,
    pub name: String,
    pub average_amount: f64,
    pub units: u32,
}

impl RevenueStream {
    pub fn new(name: impl Into<String>, average_amount: f64, units: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            average_amount,
            units,
        }
    }

    /// Contribution to gross potential income.
    pub fn contribution(&self) -> f64 {
        self.average_amount * f64::from(self.units)
    }
}

impl Identifiable for RevenueStream {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for RevenueStream {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for RevenueStream {
    fn amount(&self) -> f64 {
        self.contribution()
    }
}

impl Displayable for RevenueStream {
    fn display_label(&self) -> String {
        format!("{} ({} units)", self.name, self.units)
    }
}

/// A named loss line: `average_loss` forgone across `units` vacant units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VacancyStream {
    pub id: Uuid,
    pub name: String,
    pub average_loss: f64,
    pub units: u32,
}

impl VacancyStream {
    pub fn new(name: impl Into<String>, average_loss: f64, units: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            average_loss,
            units,
        }
    }

    /// Contribution to total economic vacancy.
    pub fn contribution(&self) -> f64 {
        self.average_loss * f64::from(self.units)
    }
}

impl Identifiable for VacancyStream {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for VacancyStream {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for VacancyStream {
    fn amount(&self) -> f64 {
        self.contribution()
    }
}

impl Displayable for VacancyStream {
    fn display_label(&self) -> String {
        format!("{} ({} units vacant)", self.name, self.units)
    }
}

/// How economic vacancy is recorded for a ledger.
///
/// The two forms are mutually exclusive by construction: a ledger either
/// itemizes vacant units per category or applies a single rate to gross
/// potential income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VacancyModel {
    Itemized(BTreeMap<String, VacancyStream>),
    AggregateRate(f64),
}

impl VacancyModel {
    pub fn is_aggregate(&self) -> bool {
        matches!(self, VacancyModel::AggregateRate(_))
    }

    /// Returns `true` when no vacancy has been recorded in either form.
    pub fn is_empty(&self) -> bool {
        match self {
            VacancyModel::Itemized(streams) => streams.is_empty(),
            VacancyModel::AggregateRate(_) => false,
        }
    }

    /// Sum of unit counts across itemized streams; zero under the aggregate
    /// form.
    pub fn itemized_units(&self) -> u32 {
        match self {
            VacancyModel::Itemized(streams) => streams.values().map(|stream| stream.units).sum(),
            VacancyModel::AggregateRate(_) => 0,
        }
    }
}

impl Default for VacancyModel {
    fn default() -> Self {
        VacancyModel::Itemized(BTreeMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_basis_passes_values_through() {
        let basis = AmountBasis::Uniform {
            amount: 500.0,
            units: 5,
        };
        assert_eq!(basis.resolve().unwrap(), (500.0, 5));
    }

    #[test]
    fn listed_basis_derives_mean_and_count() {
        let basis = AmountBasis::Listed(vec![600.0, 620.0, 610.0]);
        assert_eq!(basis.resolve().unwrap(), (610.0, 3));
    }

    #[test]
    fn listed_basis_matches_equivalent_uniform() {
        let listed = AmountBasis::Listed(vec![600.0, 620.0, 610.0]);
        let uniform = AmountBasis::Uniform {
            amount: 610.0,
            units: 3,
        };
        assert_eq!(listed.resolve().unwrap(), uniform.resolve().unwrap());
    }

    #[test]
    fn degenerate_bases_are_rejected() {
        let zero = AmountBasis::Uniform {
            amount: 500.0,
            units: 0,
        };
        assert_eq!(zero.resolve(), Err(LedgerError::ZeroUnits));
        let empty = AmountBasis::Listed(Vec::new());
        assert_eq!(empty.resolve(), Err(LedgerError::EmptyAmounts));
    }

    #[test]
    fn entity_traits_expose_stream_data() {
        let stream = RevenueStream::new("studio", 500.0, 5);
        assert_eq!(NamedEntity::name(&stream), "studio");
        assert_eq!(Identifiable::id(&stream), stream.id);
        assert_eq!(Amounted::amount(&stream), 2500.0);
        assert_eq!(stream.display_label(), "studio (5 units)");
    }
}
