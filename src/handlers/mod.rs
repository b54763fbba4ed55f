//! Built-in action handlers and the process-wide registries that expose them
//!
//! - **medical** — PECARN patient data stubs (`analyze_patient_data`,
//!   `calculate_statistics`, `extract_demographics`)
//! - **wellness** — fixed fitness and diet plans
//! - **bmi** — `calculate_bmi`, registered in both groups

pub mod bmi;
pub mod medical;
pub mod wellness;

use crate::registry::{HandlerFn, HandlerRegistry};
use crate::types::Payload;
use serde_json::Value;
use std::sync::LazyLock;

static MEDICAL: LazyLock<HandlerRegistry> = LazyLock::new(|| {
    HandlerRegistry::new([
        ("analyze_patient_data", medical::analyze_patient_data as HandlerFn),
        ("calculate_statistics", medical::calculate_statistics as HandlerFn),
        ("extract_demographics", medical::extract_demographics as HandlerFn),
        ("calculate_bmi", bmi::calculate_bmi as HandlerFn),
    ])
});

static WELLNESS: LazyLock<HandlerRegistry> = LazyLock::new(|| {
    HandlerRegistry::new([
        ("get_fitness_plan", wellness::get_fitness_plan as HandlerFn),
        ("calculate_bmi", bmi::calculate_bmi as HandlerFn),
        ("get_diet_plan", wellness::get_diet_plan as HandlerFn),
    ])
});

/// Registry for the PECARN medical action group
pub fn medical_registry() -> &'static HandlerRegistry {
    &MEDICAL
}

/// Registry for the fitness/diet action group
pub fn wellness_registry() -> &'static HandlerRegistry {
    &WELLNESS
}

/// Unwrap a `json!` object literal into a payload
fn object(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}
