//! The income ledger accumulator and its derived summaries.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ReportPeriod;
use crate::stream::{
    AmountBasis, RevenueStream, VacancyModel, VacancyStream, AGGREGATE_VACANCY_NAME,
};

#[derive(Debug, Clone, PartialEq)]
/// Errors raised by ledger mutations. No failed call leaves a partial
/// mutation behind.
pub enum LedgerError {
    ZeroUnits,
    EmptyAmounts,
    DuplicateCategory(String),
    ReservedCategory(String),
    VacancyModeConflict,
    RateOutOfRange(f64),
    CapacityExceeded { requested: u32, available: u32 },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::ZeroUnits => f.write_str("unit count must be positive"),
            LedgerError::EmptyAmounts => f.write_str("amounts list must not be empty"),
            LedgerError::DuplicateCategory(name) => {
                write!(f, "category `{name}` already exists")
            }
            LedgerError::ReservedCategory(name) => {
                write!(f, "`{name}` is reserved for the aggregate vacancy entry")
            }
            LedgerError::VacancyModeConflict => f.write_str(
                "aggregate and itemized vacancy cannot be combined in one ledger",
            ),
            LedgerError::RateOutOfRange(rate) => {
                write!(f, "vacancy rate {rate} must lie within [0, 1]")
            }
            LedgerError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "vacant units requested ({requested}) exceed units available ({available})"
            ),
        }
    }
}

impl std::error::Error for LedgerError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Accumulates named revenue and vacancy streams and derives proforma totals
/// on demand.
pub struct IncomeLedger {
    pub id: Uuid,
    pub name: String,
    pub period: ReportPeriod,
    revenue: BTreeMap<String, RevenueStream>,
    vacancy: VacancyModel,
    total_units: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncomeLedger {
    pub fn new(name: impl Into<String>, period: ReportPeriod) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            period,
            revenue: BTreeMap::new(),
            vacancy: VacancyModel::default(),
            total_units: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the ledger as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn revenue_streams(&self) -> impl Iterator<Item = &RevenueStream> {
        self.revenue.values()
    }

    pub fn vacancy_model(&self) -> &VacancyModel {
        &self.vacancy
    }

    /// Total units across all revenue streams.
    pub fn total_units(&self) -> u32 {
        self.total_units
    }

    pub fn itemized_vacancy_units(&self) -> u32 {
        self.vacancy.itemized_units()
    }

    pub fn is_empty(&self) -> bool {
        self.revenue.is_empty() && self.vacancy.is_empty()
    }

    /// Records a revenue stream and grows the unit pool by its unit count.
    ///
    /// Category names are unique; re-adding a name is rejected rather than
    /// overwritten so `total_units` always equals the sum of stream units.
    pub fn add_revenue_stream(
        &mut self,
        name: impl Into<String>,
        basis: AmountBasis,
    ) -> Result<Uuid, LedgerError> {
        let name = name.into();
        let (average, units) = basis.resolve()?;
        if self.revenue.contains_key(&name) {
            return Err(LedgerError::DuplicateCategory(name));
        }
        let stream = RevenueStream::new(name.clone(), average, units);
        let id = stream.id;
        self.revenue.insert(name, stream);
        self.total_units += units;
        self.touch();
        Ok(id)
    }

    /// Records an itemized vacancy stream against the unit pool.
    pub fn add_vacancy_stream(
        &mut self,
        name: impl Into<String>,
        basis: AmountBasis,
    ) -> Result<Uuid, LedgerError> {
        let name = name.into();
        if name == AGGREGATE_VACANCY_NAME {
            return Err(LedgerError::ReservedCategory(name));
        }
        let (average, units) = basis.resolve()?;
        let total_units = self.total_units;
        let streams = match &mut self.vacancy {
            VacancyModel::AggregateRate(_) => return Err(LedgerError::VacancyModeConflict),
            VacancyModel::Itemized(streams) => streams,
        };
        if streams.contains_key(&name) {
            return Err(LedgerError::DuplicateCategory(name));
        }
        let vacant: u32 = streams.values().map(|stream| stream.units).sum();
        if vacant + units > total_units {
            return Err(LedgerError::CapacityExceeded {
                requested: units,
                available: total_units - vacant,
            });
        }
        let stream = VacancyStream::new(name.clone(), average, units);
        let id = stream.id;
        streams.insert(name, stream);
        self.touch();
        Ok(id)
    }

    /// Switches the ledger to the aggregate vacancy form.
    ///
    /// Only valid while no vacancy has been recorded; the rate is a fraction
    /// of gross potential income.
    pub fn set_aggregate_vacancy(&mut self, rate: f64) -> Result<(), LedgerError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(LedgerError::RateOutOfRange(rate));
        }
        if !self.vacancy.is_empty() {
            return Err(LedgerError::VacancyModeConflict);
        }
        self.vacancy = VacancyModel::AggregateRate(rate);
        self.touch();
        Ok(())
    }

    /// Income with every unit rented at its recorded average.
    pub fn gross_potential_income(&self) -> f64 {
        self.revenue.values().map(RevenueStream::contribution).sum()
    }

    /// Income lost to vacancy. The aggregate form is re-derived against the
    /// current gross potential income on every call.
    pub fn total_economic_vacancy(&self) -> f64 {
        match &self.vacancy {
            VacancyModel::Itemized(streams) => {
                streams.values().map(VacancyStream::contribution).sum()
            }
            VacancyModel::AggregateRate(rate) => rate * self.gross_potential_income(),
        }
    }

    /// Gross potential income less total economic vacancy. May be negative
    /// when losses exceed potential income.
    pub fn gross_operating_income(&self) -> f64 {
        self.gross_potential_income() - self.total_economic_vacancy()
    }

    /// Derives a serializable snapshot of the ledger's current totals.
    pub fn summarize(&self) -> IncomeSummary {
        let gross_potential_income = self.gross_potential_income();
        let total_economic_vacancy = self.total_economic_vacancy();
        let gross_operating_income = gross_potential_income - total_economic_vacancy;
        let economic_occupancy = if gross_potential_income.abs() > f64::EPSILON {
            Some((gross_operating_income / gross_potential_income) * 100.0)
        } else {
            None
        };

        let revenue_lines = self
            .revenue
            .values()
            .map(|stream| StreamTotal {
                id: Some(stream.id),
                name: stream.name.clone(),
                average: stream.average_amount,
                units: Some(stream.units),
                total: stream.contribution(),
            })
            .collect();

        let (vacancy_lines, vacant_units) = match &self.vacancy {
            VacancyModel::Itemized(streams) => (
                streams
                    .values()
                    .map(|stream| StreamTotal {
                        id: Some(stream.id),
                        name: stream.name.clone(),
                        average: stream.average_loss,
                        units: Some(stream.units),
                        total: stream.contribution(),
                    })
                    .collect(),
                Some(streams.values().map(|stream| stream.units).sum()),
            ),
            VacancyModel::AggregateRate(rate) => (
                vec![StreamTotal {
                    id: None,
                    name: AGGREGATE_VACANCY_NAME.into(),
                    average: *rate,
                    units: None,
                    total: total_economic_vacancy,
                }],
                None,
            ),
        };

        IncomeSummary {
            period: self.period.clone(),
            gross_potential_income,
            total_economic_vacancy,
            gross_operating_income,
            economic_occupancy,
            total_units: self.total_units,
            vacant_units,
            revenue_lines,
            vacancy_lines,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One reported line within a summary. The aggregate vacancy line carries the
/// rate in `average` and no id or unit count.
pub struct StreamTotal {
    pub id: Option<Uuid>,
    pub name: String,
    pub average: f64,
    pub units: Option<u32>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Complete derived snapshot of a ledger, including per-stream totals.
pub struct IncomeSummary {
    pub period: ReportPeriod,
    pub gross_potential_income: f64,
    pub total_economic_vacancy: f64,
    pub gross_operating_income: f64,
    /// Percent of potential income retained; `None` while no revenue exists.
    pub economic_occupancy: Option<f64>,
    pub total_units: u32,
    /// Itemized vacant unit count; `None` under the aggregate vacancy form.
    pub vacant_units: Option<u32>,
    pub revenue_lines: Vec<StreamTotal>,
    pub vacancy_lines: Vec<StreamTotal>,
}
