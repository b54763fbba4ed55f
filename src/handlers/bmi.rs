//! Body-mass-index calculation shared by both action groups
//!
//! Bad input never fails the invocation: it is reported inside the payload.

use super::object;
use crate::error::{ActionError, FailureKind, Result};
use crate::types::{Parameters, Payload};
use serde_json::{json, Value};

/// Fixed adult BMI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value: `<18.5`, `<25`, `<30`, otherwise obese
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// `weight / height²` rounded to two decimals
pub fn bmi(weight: f64, height: f64) -> f64 {
    round2(weight / (height * height))
}

/// Two-decimal rounding, exact ties to even; values too large to scale
/// are already coarser than a hundredth and pass through unchanged
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 100.0
}

/// `calculate_bmi` handler
pub fn calculate_bmi(params: &Parameters) -> Result<Payload> {
    let measurements = params
        .parse_f64_or("weight", 0.0)
        .and_then(|w| params.parse_f64_or("height", 0.0).map(|h| (w, h)));

    let (weight, height) = match measurements {
        Ok(m) => m,
        Err(err) => return Ok(invalid_values(&err)),
    };

    if weight <= 0.0 || height <= 0.0 {
        return Ok(object(json!({
            "error": "Weight and height must be positive numbers"
        })));
    }

    let bmi = bmi(weight, height);
    if !bmi.is_finite() {
        return Ok(invalid_values(&ActionError::InvalidParameter(format!(
            "BMI is not a finite number for weight {} and height {}",
            weight, height
        ))));
    }
    let category = BmiCategory::classify(bmi);

    Ok(object(json!({
        "bmi": bmi,
        "category": category.label(),
        "message": format!("BMI calculated: {} ({})", Value::from(bmi), category.label()),
        "note": "Pediatric BMI interpretation may require age and sex-specific percentiles"
    })))
}

fn invalid_values(err: &ActionError) -> Payload {
    let detail = match err {
        ActionError::InvalidParameter(detail) => detail.clone(),
        other => other.to_string(),
    };
    object(json!({
        "error": format!("Invalid weight or height values: {}", detail),
        "kind": FailureKind::InvalidParameter.as_str()
    }))
}
