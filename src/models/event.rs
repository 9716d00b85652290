use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEvent {
    pub id: u32,
    pub date: NaiveDate,
    pub description: String,
}

/// Date-ordered project event log. Manual and system entries share one
/// sequence of ids.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ProjectEvent>,
    next_id: u32,
}

impl EventLog {
    pub fn new(events: Vec<ProjectEvent>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    pub fn add(&mut self, date: NaiveDate, description: &str) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.events.push(ProjectEvent {
            id,
            date,
            description: description.to_string(),
        });
        id
    }

    /// All events ordered by date, insertion order breaking ties.
    pub fn chronological(&self) -> Vec<&ProjectEvent> {
        let mut sorted: Vec<&ProjectEvent> = self.events.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        sorted
    }

    pub fn on(&self, date: NaiveDate) -> Vec<&ProjectEvent> {
        self.chronological()
            .into_iter()
            .filter(|e| e.date == date)
            .collect()
    }

    pub fn in_month(&self, year: i32, month: u32) -> Vec<&ProjectEvent> {
        self.chronological()
            .into_iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn events_come_back_in_date_order() {
        let mut log = EventLog::default();
        log.add(date(2025, 10, 10), "Foundation phase handover");
        log.add(date(2025, 10, 1), "RFQ review meeting");

        let ordered = log.chronological();
        assert_eq!(ordered[0].description, "RFQ review meeting");
        assert_eq!(ordered[1].description, "Foundation phase handover");
    }

    #[test]
    fn month_filter_only_returns_matching_events() {
        let mut log = EventLog::default();
        log.add(date(2025, 10, 1), "RFQ review meeting");
        log.add(date(2025, 11, 3), "Tower delivery");

        let october = log.in_month(2025, 10);
        assert_eq!(october.len(), 1);
        assert_eq!(october[0].description, "RFQ review meeting");
        assert!(log.in_month(2024, 10).is_empty());
    }

    #[test]
    fn same_day_events_keep_insertion_order() {
        let mut log = EventLog::default();
        log.add(date(2025, 10, 1), "first");
        log.add(date(2025, 10, 1), "second");

        let day = log.on(date(2025, 10, 1));
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].description, "first");
        assert_eq!(day[1].description, "second");
    }
}
