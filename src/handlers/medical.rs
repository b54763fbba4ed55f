//! PECARN medical data actions
//!
//! Stub answers only; these echo their inputs and do not analyse anything.

use super::object;
use crate::error::Result;
use crate::types::{timestamp, Parameters, Payload};
use serde_json::json;

/// `analyze_patient_data`
pub fn analyze_patient_data(params: &Parameters) -> Result<Payload> {
    let patient_id = params.get_or("patient_id", "unknown");
    let analysis_type = params.get_or("analysis_type", "general");

    Ok(object(json!({
        "patient_id": patient_id,
        "analysis_type": analysis_type,
        "status": "Analysis completed",
        "message": format!("Patient {} data analyzed for {}", patient_id, analysis_type),
        "timestamp": timestamp()
    })))
}

/// `calculate_statistics`
pub fn calculate_statistics(params: &Parameters) -> Result<Payload> {
    let stat_type = params.get_or("stat_type", "summary");
    let date_range = params.get_or("date_range", "last_30_days");

    Ok(object(json!({
        "statistic_type": stat_type,
        "date_range": date_range,
        "status": "Statistics calculated",
        "message": format!("Medical statistics for {} over {} calculated", stat_type, date_range),
        "timestamp": timestamp()
    })))
}

/// `extract_demographics`
pub fn extract_demographics(params: &Parameters) -> Result<Payload> {
    let record_id = params.get_or("record_id", "unknown");

    Ok(object(json!({
        "record_id": record_id,
        "demographics": {
            "age_group": "pediatric",
            "extracted": true,
            "status": "Demographics extracted successfully"
        },
        "timestamp": timestamp()
    })))
}
