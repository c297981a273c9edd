//! Fixed-width table rendering for the simulation report.
//!
//! Totals only: the aggregator sums per company and this module prints
//! exactly what it is given. Times are simulated hours, distances
//! statute miles.

use std::fmt::Write;

use evtol_core::{AircraftProfile, AircraftStats, CompanyStats};
use evtol_sim::FleetReport;

const HEADER: &str = "   COMPANY   #UNITS   FLIGHT-TIME:h   CHARGE-TIME:h   DISTANCE:mi   PASSENGER-MILES   FAULTS";

fn stats_row(
    out: &mut String,
    manufacturer: &str,
    unit_count: u32,
    flight_hours: f64,
    charge_hours: f64,
    distance_miles: f64,
    passenger_miles: f64,
    fault_count: u64,
) {
    let _ = writeln!(
        out,
        "{:>10}{:>9}{:>16.3}{:>16.3}{:>14.1}{:>18.1}{:>9}",
        manufacturer, unit_count, flight_hours, charge_hours, distance_miles, passenger_miles,
        fault_count,
    );
}

fn unit_row(out: &mut String, unit: &AircraftStats) {
    stats_row(
        out,
        &unit.manufacturer,
        unit.unit_count,
        unit.flight_hours,
        unit.charge_hours,
        unit.distance_miles,
        unit.passenger_miles,
        unit.fault_count,
    );
}

fn company_row(out: &mut String, company: &CompanyStats) {
    stats_row(
        out,
        &company.manufacturer,
        company.unit_count,
        company.flight_hours,
        company.charge_hours,
        company.distance_miles,
        company.passenger_miles,
        company.fault_count,
    );
}

/// Render the per-unit table and the per-company summary.
pub fn render_report(report: &FleetReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, ">>> per-unit statistics <<<");
    let _ = writeln!(out, "{HEADER}");
    for unit in &report.per_unit {
        unit_row(&mut out, unit);
    }

    let _ = writeln!(out, "\n>>> per-company summary <<<");
    let _ = writeln!(out, "{HEADER}");
    for company in &report.by_company {
        company_row(&mut out, company);
    }
    out
}

/// Render the parsed roster, one block per profile.
pub fn render_profiles(profiles: &[std::sync::Arc<AircraftProfile>]) -> String {
    let mut out = String::new();
    for profile in profiles {
        let _ = writeln!(
            out,
            "manufacturer      : {}\n\
             cruise speed      : {} mph\n\
             battery capacity  : {} kWh\n\
             time to charge    : {} h\n\
             energy per mile   : {} kWh\n\
             passenger count   : {}\n\
             faults per hour   : {}\n\
             flight per charge : {} ms\n",
            profile.manufacturer,
            profile.cruise_speed_mph,
            profile.battery_capacity_kwh,
            profile.charge_duration_hours,
            profile.energy_per_mile_kwh,
            profile.passenger_capacity,
            profile.fault_rate_per_hour,
            profile.flight_duration_per_charge().as_millis(),
        );
    }
    out
}
