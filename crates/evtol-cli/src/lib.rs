//! Scenario loading and report rendering for the fleet simulator CLI.

pub mod report;
pub mod scenario;

pub use report::{render_profiles, render_report};
pub use scenario::{Scenario, ScenarioError};
