//! Fitness and diet plan actions

use super::object;
use crate::error::Result;
use crate::types::{Parameters, Payload};
use serde_json::json;

/// `get_fitness_plan`
pub fn get_fitness_plan(_params: &Parameters) -> Result<Payload> {
    Ok(object(json!({
        "fitness_plan": "Here's a sample fitness plan: 30 minutes cardio, 20 minutes strength training, 3 times per week.",
        "duration": "4 weeks",
        "difficulty": "beginner"
    })))
}

/// `get_diet_plan`
pub fn get_diet_plan(_params: &Parameters) -> Result<Payload> {
    Ok(object(json!({
        "diet_plan": "Sample diet plan: Balanced meals with proteins, carbs, and vegetables.",
        "calories_per_day": 2000,
        "meals": ["Breakfast", "Lunch", "Dinner", "2 Snacks"]
    })))
}
