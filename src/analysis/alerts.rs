use chrono::{Duration, NaiveDate};
use std::fmt;

use crate::config::workspace_config::WorkspaceConfig;
use crate::core::contingency::{BufferRisk, ContingencyTracker};
use crate::models::material::{Material, Urgency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Reorder,
    Deadline,
    Risk,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Reorder => f.write_str("Reorder"),
            AlertKind::Deadline => f.write_str("Deadline"),
            AlertKind::Risk => f.write_str("Risk"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => f.write_str("High"),
            Severity::Medium => f.write_str("Medium"),
            Severity::Low => f.write_str("Low"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
}

/// Stock and deadline warnings for the material catalog, relative to an
/// explicit `as_of` date so results stay reproducible.
pub fn material_alerts(
    materials: &[Material],
    as_of: NaiveDate,
    config: &WorkspaceConfig,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for m in materials {
        let reorder_horizon = as_of + Duration::days(config.reorder_lead_days);
        if m.predicted_exhaustion <= reorder_horizon {
            let severity = if m.urgency == Urgency::Critical {
                Severity::High
            } else {
                Severity::Medium
            };
            alerts.push(Alert {
                kind: AlertKind::Reorder,
                severity,
                message: format!("{} will exhaust by {}", m.name, m.predicted_exhaustion),
            });
        }

        let days_to_required = (m.required_by - as_of).num_days();
        if (0..=config.rfq_due_soon_days).contains(&days_to_required) {
            alerts.push(Alert {
                kind: AlertKind::Deadline,
                severity: Severity::Medium,
                message: format!(
                    "Vendor RFQ for {} due in {} days",
                    m.name, days_to_required
                ),
            });
        }
    }

    alerts
}

/// Contingency warning once the remaining buffer drops under the risk
/// threshold. No alert while the buffer is healthy.
pub fn buffer_alert(tracker: &ContingencyTracker, config: &WorkspaceConfig) -> Option<Alert> {
    match tracker.current_risk() {
        BufferRisk::High => Some(Alert {
            kind: AlertKind::Risk,
            severity: Severity::High,
            message: format!(
                "Contingency buffer down to {} months (threshold {})",
                tracker.remaining_months(),
                config.buffer_risk_threshold_months
            ),
        }),
        BufferRisk::Nominal => None,
    }
}

pub fn generate(
    materials: &[Material],
    tracker: &ContingencyTracker,
    as_of: NaiveDate,
    config: &WorkspaceConfig,
) -> Vec<Alert> {
    let mut alerts = material_alerts(materials, as_of, config);
    alerts.extend(buffer_alert(tracker, config));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::material::ConstructionPhase;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn material(id: &str, urgency: Urgency, required_by: NaiveDate, exhaustion: NaiveDate) -> Material {
        Material {
            id: id.to_string(),
            name: id.to_string(),
            phase: ConstructionPhase::Foundation,
            urgency,
            forecast_qty: 100,
            required_by,
            on_site: 10,
            predicted_exhaustion: exhaustion,
            unit_cost: 100.0,
        }
    }

    #[test]
    fn imminent_exhaustion_of_critical_material_is_high_severity() {
        let config = WorkspaceConfig::default();
        let mats = vec![material(
            "STL-ANG-90",
            Urgency::Critical,
            date(2025, 11, 1),
            date(2025, 10, 5),
        )];

        let alerts = material_alerts(&mats, date(2025, 9, 20), &config);
        let reorder: Vec<&Alert> = alerts.iter().filter(|a| a.kind == AlertKind::Reorder).collect();
        assert_eq!(reorder.len(), 1);
        assert_eq!(reorder[0].severity, Severity::High);
    }

    #[test]
    fn distant_exhaustion_raises_nothing() {
        let config = WorkspaceConfig::default();
        let mats = vec![material(
            "COND-ACSR",
            Urgency::LongTerm,
            date(2026, 2, 1),
            date(2026, 1, 10),
        )];
        assert!(material_alerts(&mats, date(2025, 9, 20), &config).is_empty());
    }

    #[test]
    fn rfq_deadline_inside_the_week_warns() {
        let config = WorkspaceConfig::default();
        let mats = vec![material(
            "TWR-BLT-M20",
            Urgency::LongTerm,
            date(2025, 9, 25),
            date(2026, 6, 1),
        )];

        let alerts = material_alerts(&mats, date(2025, 9, 20), &config);
        let deadline: Vec<&Alert> = alerts.iter().filter(|a| a.kind == AlertKind::Deadline).collect();
        assert_eq!(deadline.len(), 1);
        assert!(deadline[0].message.contains("due in 5 days"));
    }

    #[test]
    fn passed_deadlines_do_not_warn_again() {
        let config = WorkspaceConfig::default();
        let mats = vec![material(
            "TWR-BLT-M20",
            Urgency::LongTerm,
            date(2025, 9, 10),
            date(2026, 6, 1),
        )];
        let alerts = material_alerts(&mats, date(2025, 9, 20), &config);
        assert!(alerts.iter().all(|a| a.kind != AlertKind::Deadline));
    }

    #[test]
    fn buffer_alert_appears_only_under_threshold() {
        let config = WorkspaceConfig::default();
        let mut tracker = ContingencyTracker::new(9, 3);
        assert!(buffer_alert(&tracker, &config).is_none());

        tracker.consume(7);
        let alert = buffer_alert(&tracker, &config).unwrap();
        assert_eq!(alert.kind, AlertKind::Risk);
        assert_eq!(alert.severity, Severity::High);
    }

    #[test]
    fn generate_is_deterministic_for_fixed_inputs() {
        let config = WorkspaceConfig::default();
        let tracker = ContingencyTracker::new(9, 3);
        let mats = vec![material(
            "STL-ANG-90",
            Urgency::Critical,
            date(2025, 11, 1),
            date(2025, 10, 5),
        )];

        let a = generate(&mats, &tracker, date(2025, 9, 20), &config);
        let b = generate(&mats, &tracker, date(2025, 9, 20), &config);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.message, y.message);
        }
    }
}
