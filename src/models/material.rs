use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionPhase {
    Foundation,
    TowerErection,
    Stringing,
}

impl ConstructionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructionPhase::Foundation => "Foundation",
            ConstructionPhase::TowerErection => "Tower Erection",
            ConstructionPhase::Stringing => "Stringing",
        }
    }
}

impl fmt::Display for ConstructionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstructionPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "foundation" => Ok(ConstructionPhase::Foundation),
            "towererection" => Ok(ConstructionPhase::TowerErection),
            "stringing" => Ok(ConstructionPhase::Stringing),
            other => Err(format!("Unknown construction phase: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Critical,
    NextPhase,
    LongTerm,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "Critical",
            Urgency::NextPhase => "Next Phase",
            Urgency::LongTerm => "Long Term",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "critical" => Ok(Urgency::Critical),
            "nextphase" => Ok(Urgency::NextPhase),
            "longterm" => Ok(Urgency::LongTerm),
            other => Err(format!("Unknown urgency: {}", other)),
        }
    }
}

/// Procurement posture derived from urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderStatus {
    ReorderNow,
    PlanNextPhase,
    LongTerm,
}

impl ReorderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReorderStatus::ReorderNow => "Reorder Now",
            ReorderStatus::PlanNextPhase => "Plan Next Phase",
            ReorderStatus::LongTerm => "Long Term",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub phase: ConstructionPhase,
    pub urgency: Urgency,
    pub forecast_qty: u32,
    pub required_by: NaiveDate,
    pub on_site: u32,
    pub predicted_exhaustion: NaiveDate,
    pub unit_cost: f64,
}

impl Material {
    pub fn reorder_status(&self) -> ReorderStatus {
        match self.urgency {
            Urgency::Critical => ReorderStatus::ReorderNow,
            Urgency::NextPhase => ReorderStatus::PlanNextPhase,
            Urgency::LongTerm => ReorderStatus::LongTerm,
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.id.to_lowercase().contains(&q) || self.name.to_lowercase().contains(&q)
    }

    /// Records consumption against on-site stock, flooring at zero. Returns
    /// the remaining stock.
    pub fn log_usage(&mut self, qty: u32) -> u32 {
        self.on_site = self.on_site.saturating_sub(qty);
        self.on_site
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> Material {
        Material {
            id: "STL-ANG-90".to_string(),
            name: "Steel Angle 90x90x8".to_string(),
            phase: ConstructionPhase::Foundation,
            urgency: Urgency::Critical,
            forecast_qty: 800,
            required_by: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            on_site: 120,
            predicted_exhaustion: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            unit_cost: 5200.0,
        }
    }

    #[test]
    fn reorder_status_follows_urgency() {
        let mut m = steel();
        assert_eq!(m.reorder_status(), ReorderStatus::ReorderNow);
        m.urgency = Urgency::NextPhase;
        assert_eq!(m.reorder_status(), ReorderStatus::PlanNextPhase);
        m.urgency = Urgency::LongTerm;
        assert_eq!(m.reorder_status(), ReorderStatus::LongTerm);
    }

    #[test]
    fn usage_logging_floors_at_zero() {
        let mut m = steel();
        assert_eq!(m.log_usage(20), 100);
        assert_eq!(m.log_usage(500), 0);
        assert_eq!(m.on_site, 0);
    }

    #[test]
    fn query_matches_id_and_name() {
        let m = steel();
        assert!(m.matches_query("stl-ang"));
        assert!(m.matches_query("steel angle"));
        assert!(!m.matches_query("cement"));
    }
}
