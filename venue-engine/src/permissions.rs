//! Festival-level permission seam
//!
//! The engine never decides authorization itself (beyond the layout
//! element `locked` short-circuit); it forwards to a [`FestivalPolicy`]
//! supplied by the surrounding application.

use std::collections::HashMap;

use shared::models::Venue;

/// Role of an acting user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Admin,
    CommitteeMember,
    Organizer,
    Vendor,
    Guest,
}

/// An acting user, as seen by the permission seam
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: i64,
    pub role: ActorRole,
}

/// Festival-level authorization predicate
pub trait FestivalPolicy: Send + Sync {
    fn can_manage_festival(&self, actor: &Actor, festival_id: i64) -> bool;

    /// Venue-level check; delegates to the owning festival by default
    fn can_manage_venue(&self, actor: &Actor, venue: &Venue) -> bool {
        self.can_manage_festival(actor, venue.festival_id)
    }
}

/// Role-based default policy
///
/// Admins and committee members manage everything; an organizer manages
/// the festivals registered as theirs.
#[derive(Debug, Clone, Default)]
pub struct RolePolicy {
    /// festival id -> owning organizer user id
    owners: HashMap<i64, i64>,
}

impl RolePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, festival_id: i64, organizer_id: i64) -> Self {
        self.owners.insert(festival_id, organizer_id);
        self
    }
}

impl FestivalPolicy for RolePolicy {
    fn can_manage_festival(&self, actor: &Actor, festival_id: i64) -> bool {
        match actor.role {
            ActorRole::Admin | ActorRole::CommitteeMember => true,
            ActorRole::Organizer => self.owners.get(&festival_id) == Some(&actor.id),
            ActorRole::Vendor | ActorRole::Guest => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_policy() {
        let policy = RolePolicy::new().with_owner(1, 10);

        let admin = Actor { id: 1, role: ActorRole::Admin };
        let owner = Actor { id: 10, role: ActorRole::Organizer };
        let other = Actor { id: 11, role: ActorRole::Organizer };
        let vendor = Actor { id: 12, role: ActorRole::Vendor };

        assert!(policy.can_manage_festival(&admin, 1));
        assert!(policy.can_manage_festival(&owner, 1));
        assert!(!policy.can_manage_festival(&owner, 2));
        assert!(!policy.can_manage_festival(&other, 1));
        assert!(!policy.can_manage_festival(&vendor, 1));
    }
}
