use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    MissingField(&'static str),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::MissingField(field) => write!(f, "Missing member field: {}", field),
        }
    }
}

impl std::error::Error for RosterError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub email: String,
}

/// Per-project roster with sequential member ids.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
    next_id: u32,
}

impl TeamRoster {
    pub fn new(members: Vec<TeamMember>) -> Self {
        let next_id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self { members, next_id }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn add(&mut self, name: &str, role: &str, email: &str) -> Result<u32, RosterError> {
        if name.trim().is_empty() {
            return Err(RosterError::MissingField("name"));
        }
        if role.trim().is_empty() {
            return Err(RosterError::MissingField("role"));
        }
        if email.trim().is_empty() {
            return Err(RosterError::MissingField("email"));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.members.push(TeamMember {
            id,
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
        });
        Ok(id)
    }

    /// Removes a member by id, reporting whether anything was dropped.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> TeamRoster {
        TeamRoster::new(vec![TeamMember {
            id: 1,
            name: "A. Sharma".to_string(),
            role: "Project Manager".to_string(),
            email: "asharma@example.com".to_string(),
        }])
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut r = roster();
        let id = r.add("K. Iyer", "Procurement Lead", "kiyer@example.com").unwrap();
        assert_eq!(id, 2);
        assert_eq!(r.members().len(), 2);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut r = roster();
        assert_eq!(r.add("", "Engineer", "x@example.com"), Err(RosterError::MissingField("name")));
        assert_eq!(r.add("R. Singh", " ", "x@example.com"), Err(RosterError::MissingField("role")));
        assert_eq!(r.add("R. Singh", "Engineer", ""), Err(RosterError::MissingField("email")));
        assert_eq!(r.members().len(), 1);
    }

    #[test]
    fn remove_drops_the_member() {
        let mut r = roster();
        assert!(r.remove(1));
        assert!(!r.remove(1));
        assert!(r.members().is_empty());
    }
}
