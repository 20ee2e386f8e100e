use proforma_core::{CoreError, RevenueService, SummaryService, VacancyService};
use proforma_domain::{AmountBasis, IncomeLedger, ReportPeriod, VacancyModel};

fn sample_ledger() -> IncomeLedger {
    let mut ledger = IncomeLedger::new("Maple Court", ReportPeriod::Monthly);
    RevenueService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 5,
        },
    )
    .expect("studio stream");
    RevenueService::add_stream(
        &mut ledger,
        "one_bedroom",
        AmountBasis::Listed(vec![600.0, 620.0, 610.0]),
    )
    .expect("one_bedroom stream");
    ledger
}

#[test]
fn goi_identity_holds_for_itemized_vacancy() {
    let mut ledger = sample_ledger();
    VacancyService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 5,
        },
    )
    .expect("vacancy stream");

    assert_eq!(ledger.gross_potential_income(), 4330.0);
    assert_eq!(ledger.total_economic_vacancy(), 2500.0);
    assert_eq!(
        ledger.gross_operating_income(),
        ledger.gross_potential_income() - ledger.total_economic_vacancy()
    );
}

#[test]
fn listed_amounts_contribute_like_their_average() {
    let mut listed = IncomeLedger::new("Listed", ReportPeriod::Monthly);
    RevenueService::add_stream(
        &mut listed,
        "one_bedroom",
        AmountBasis::Listed(vec![600.0, 620.0, 610.0]),
    )
    .unwrap();

    let mut averaged = IncomeLedger::new("Averaged", ReportPeriod::Monthly);
    RevenueService::add_stream(
        &mut averaged,
        "one_bedroom",
        AmountBasis::Uniform {
            amount: 610.0,
            units: 3,
        },
    )
    .unwrap();

    assert_eq!(
        listed.gross_potential_income(),
        averaged.gross_potential_income()
    );
    assert_eq!(listed.total_units(), averaged.total_units());
}

#[test]
fn aggregate_vacancy_is_rederived_after_revenue_changes() {
    let mut ledger = IncomeLedger::new("Aggregate", ReportPeriod::Monthly);
    RevenueService::add_stream(
        &mut ledger,
        "flats",
        AmountBasis::Uniform {
            amount: 1000.0,
            units: 10,
        },
    )
    .unwrap();
    VacancyService::set_aggregate_rate(&mut ledger, 0.05).unwrap();
    assert!((ledger.total_economic_vacancy() - 500.0).abs() < 1e-9);
    assert!((ledger.gross_operating_income() - 9500.0).abs() < 1e-9);

    RevenueService::add_stream(
        &mut ledger,
        "parking",
        AmountBasis::Uniform {
            amount: 100.0,
            units: 20,
        },
    )
    .unwrap();
    assert!((ledger.total_economic_vacancy() - 600.0).abs() < 1e-9);
}

#[test]
fn capacity_failure_leaves_the_ledger_unchanged() {
    let mut ledger = sample_ledger();
    let before = ledger.summarize();
    let err = VacancyService::add_stream(
        &mut ledger,
        "one_bedroom",
        AmountBasis::Uniform {
            amount: 600.0,
            units: 9,
        },
    )
    .expect_err("9 vacant units exceed the 8-unit pool");
    assert!(matches!(err, CoreError::CapacityExceeded(_)));
    assert_eq!(ledger.summarize(), before);
    assert!(matches!(ledger.vacancy_model(), VacancyModel::Itemized(_)));
}

#[test]
fn vacancy_forms_cannot_be_mixed_in_either_order() {
    let mut ledger = sample_ledger();
    VacancyService::set_aggregate_rate(&mut ledger, 0.05).unwrap();
    assert!(ledger.vacancy_model().is_aggregate());
    assert!(VacancyService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 1,
        },
    )
    .is_err());

    let mut ledger = sample_ledger();
    VacancyService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 1,
        },
    )
    .unwrap();
    assert!(VacancyService::set_aggregate_rate(&mut ledger, 0.05).is_err());
}

#[test]
fn summary_exposes_occupancy_and_stream_lines() {
    let mut ledger = sample_ledger();
    VacancyService::add_stream(
        &mut ledger,
        "studio",
        AmountBasis::Uniform {
            amount: 500.0,
            units: 2,
        },
    )
    .unwrap();

    let summary = SummaryService::income_summary(&ledger);
    assert_eq!(summary.total_units, 8);
    assert_eq!(summary.vacant_units, Some(2));
    assert_eq!(summary.revenue_lines.len(), 2);
    assert_eq!(summary.vacancy_lines.len(), 1);
    let occupancy = summary.economic_occupancy.expect("revenue exists");
    let expected = (summary.gross_operating_income / summary.gross_potential_income) * 100.0;
    assert!((occupancy - expected).abs() < 1e-9);
}
