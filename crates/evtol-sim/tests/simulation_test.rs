//! Fleet orchestration tests: validation, the end-to-end scenario,
//! and the slot-count boundary cases.

use evtol_core::{AircraftProfile, Roster};
use evtol_sim::{FleetParams, FleetSimulation, SimulationError};

fn alpha_roster() -> Roster {
    Roster::new(vec![
        AircraftProfile::new("Alpha", 120, 320, 0.6, 1.6, 4, 0.25).unwrap()
    ])
    .unwrap()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 0.02
}

#[test]
fn test_zero_units_rejected() {
    let params = FleetParams {
        unit_count: 0,
        charger_slots: 2,
        duration_minutes: 1.0,
    };
    assert!(matches!(
        FleetSimulation::new(alpha_roster(), params),
        Err(SimulationError::NoUnits)
    ));
}

#[test]
fn test_zero_charger_slots_rejected_before_launch() {
    let params = FleetParams {
        unit_count: 3,
        charger_slots: 0,
        duration_minutes: 1.0,
    };
    assert!(matches!(
        FleetSimulation::new(alpha_roster(), params),
        Err(SimulationError::NoChargerSlots)
    ));
}

#[test]
fn test_negative_duration_rejected() {
    let params = FleetParams {
        unit_count: 1,
        charger_slots: 1,
        duration_minutes: -1.0,
    };
    assert!(matches!(
        FleetSimulation::new(alpha_roster(), params),
        Err(SimulationError::InvalidDuration(_))
    ));
}

/// The end-to-end scenario: 3 units sharing 2 slots for one minute.
#[tokio::test(start_paused = true)]
async fn test_three_units_two_slots_one_minute() {
    let params = FleetParams {
        unit_count: 3,
        charger_slots: 2,
        duration_minutes: 1.0,
    };
    let report = FleetSimulation::new(alpha_roster(), params)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(report.per_unit.len(), 3);
    for unit in &report.per_unit {
        assert_eq!(unit.manufacturer, "Alpha");
        assert_eq!(unit.unit_count, 1);
        assert!(unit.flight_hours > 0.0);
        assert!(unit.charge_hours >= 0.0);
        assert!(unit.distance_miles >= 0.0);
        assert!(unit.passenger_miles >= 0.0);
    }

    assert_eq!(report.by_company.len(), 1);
    let totals = &report.by_company[0];
    assert_eq!(totals.unit_count, 3);
    let flight_sum: f64 = report.per_unit.iter().map(|u| u.flight_hours).sum();
    assert!((totals.flight_hours - flight_sum).abs() < 1e-9);
    assert!(report.finished_at >= report.started_at);
}

/// With a slot per unit nobody ever queues: charge time is an exact
/// multiple of the nominal charge duration.
#[tokio::test(start_paused = true)]
async fn test_slots_equal_units_means_no_queuing() {
    let params = FleetParams {
        unit_count: 2,
        charger_slots: 2,
        duration_minutes: 0.05, // 3000ms: one full cycle plus a partial flight
    };
    let report = FleetSimulation::new(alpha_roster(), params)
        .unwrap()
        .run()
        .await
        .unwrap();

    for unit in &report.per_unit {
        // fly 1667ms, charge 600ms, fly again until stop at 3000ms
        assert!(close(unit.charge_hours, 0.6), "got {}", unit.charge_hours);
        assert!(close(unit.flight_hours, 2.4), "got {}", unit.flight_hours);
    }
}

/// With one slot and two units the charge phases serialize: one unit
/// charges straight away, the other dwells a full extra charge.
#[tokio::test(start_paused = true)]
async fn test_single_slot_serializes_charging() {
    let params = FleetParams {
        unit_count: 2,
        charger_slots: 1,
        duration_minutes: 0.05, // 3000ms
    };
    let report = FleetSimulation::new(alpha_roster(), params)
        .unwrap()
        .run()
        .await
        .unwrap();

    let mut charge: Vec<f64> = report.per_unit.iter().map(|u| u.charge_hours).collect();
    charge.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!(close(charge[0], 0.6), "got {}", charge[0]);
    assert!(close(charge[1], 1.2), "got {}", charge[1]);
}

#[tokio::test(start_paused = true)]
async fn test_zero_duration_run_settles_immediately() {
    let params = FleetParams {
        unit_count: 3,
        charger_slots: 1,
        duration_minutes: 0.0,
    };
    let report = FleetSimulation::new(alpha_roster(), params)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(report.per_unit.len(), 3);
    for unit in &report.per_unit {
        assert!(unit.flight_hours < 0.02);
        assert!(unit.charge_hours < 0.02);
    }
}

/// Real clock, multi-threaded runtime: units genuinely run in
/// parallel and the run still settles cleanly.
#[tokio::test(flavor = "multi_thread")]
async fn test_parallel_run_settles_on_real_clock() {
    let params = FleetParams {
        unit_count: 4,
        charger_slots: 2,
        duration_minutes: 0.01, // 600ms of wall clock
    };
    let report = FleetSimulation::new(alpha_roster(), params)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(report.per_unit.len(), 4);
    assert_eq!(report.by_company[0].unit_count, 4);
    for unit in &report.per_unit {
        assert!(unit.flight_hours >= 0.0);
        assert!(unit.flight_hours < 0.7, "got {}", unit.flight_hours);
    }
}
