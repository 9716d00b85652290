use serde::{Deserialize, Serialize};

use crate::config::constants::{
    BUFFER_RISK_THRESHOLD_MONTHS, DEFAULT_BUFFER_MONTHS, MILESTONE_WINDOW_DAYS,
    PIPELINE_TOTAL_MONTHS, REORDER_LEAD_DAYS, RFQ_DUE_SOON_DAYS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhasePlan {
    pub name: String,
    pub start_month: u32,     // offset from project start
    pub duration_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub buffer_months: u32,
    pub buffer_risk_threshold_months: u32,
    pub reorder_lead_days: i64,
    pub rfq_due_soon_days: i64,
    pub milestone_window_days: i64,
    pub pipeline_months: u32,
    pub phase_plan: Vec<PhasePlan>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            buffer_months: DEFAULT_BUFFER_MONTHS,
            buffer_risk_threshold_months: BUFFER_RISK_THRESHOLD_MONTHS,
            reorder_lead_days: REORDER_LEAD_DAYS,
            rfq_due_soon_days: RFQ_DUE_SOON_DAYS,
            milestone_window_days: MILESTONE_WINDOW_DAYS,
            pipeline_months: PIPELINE_TOTAL_MONTHS,
            phase_plan: vec![
                PhasePlan {
                    name: "Foundation & Civil Works".to_string(),
                    start_month: 0,
                    duration_months: 4,
                },
                PhasePlan {
                    name: "Tower Erection".to_string(),
                    start_month: 4,
                    duration_months: 5,
                },
                PhasePlan {
                    name: "Stringing & Commissioning".to_string(),
                    start_month: 9,
                    duration_months: 4,
                },
            ],
        }
    }
}
