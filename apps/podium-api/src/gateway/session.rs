//! Roles and rooms for live connections.

use serde::Deserialize;

/// The audience role a connection declares when joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Attendee view: raw incoming questions for one speaker.
    Guest,
    /// Moderator dashboard: every question for every speaker.
    Mod,
    /// Stage view: the approved subset for one speaker.
    Selected,
}

/// A named broadcast scope. A connection belongs to at most one room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Room {
    Moderators,
    Speaker(String),
    Selected(String),
}

impl Room {
    /// Resolve a join declaration to a room. Guest and selected joins must
    /// name a speaker; a moderator join targets the shared room.
    pub fn from_join(role: Role, speaker: Option<&str>) -> Option<Room> {
        match (role, speaker) {
            (Role::Mod, _) => Some(Room::Moderators),
            (Role::Guest, Some(s)) if !s.is_empty() => Some(Room::Speaker(s.to_string())),
            (Role::Selected, Some(s)) if !s.is_empty() => Some(Room::Selected(s.to_string())),
            _ => None,
        }
    }

    /// The rooms a mutation of one of `speaker`'s questions fans out to:
    /// moderators plus both rooms scoped to that speaker.
    pub fn fanout_targets(speaker: &str) -> Vec<Room> {
        vec![
            Room::Moderators,
            Room::Speaker(speaker.to_string()),
            Room::Selected(speaker.to_string()),
        ]
    }

    /// Stable key used in logs.
    pub fn key(&self) -> String {
        match self {
            Room::Moderators => "mod".to_string(),
            Room::Speaker(s) => format!("speaker:{s}"),
            Room::Selected(s) => format!("selected:{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_join_ignores_speaker() {
        assert_eq!(
            Room::from_join(Role::Mod, Some("alice")),
            Some(Room::Moderators)
        );
        assert_eq!(Room::from_join(Role::Mod, None), Some(Room::Moderators));
    }

    #[test]
    fn guest_and_selected_require_a_speaker() {
        assert_eq!(
            Room::from_join(Role::Guest, Some("alice")),
            Some(Room::Speaker("alice".to_string()))
        );
        assert_eq!(
            Room::from_join(Role::Selected, Some("alice")),
            Some(Room::Selected("alice".to_string()))
        );
        assert_eq!(Room::from_join(Role::Guest, None), None);
        assert_eq!(Room::from_join(Role::Selected, Some("")), None);
    }

    #[test]
    fn fanout_targets_cover_all_three_rooms() {
        let targets = Room::fanout_targets("alice");
        assert_eq!(targets.len(), 3);
        assert!(targets.contains(&Room::Moderators));
        assert!(targets.contains(&Room::Speaker("alice".to_string())));
        assert!(targets.contains(&Room::Selected("alice".to_string())));
    }

    #[test]
    fn room_keys_are_scoped_by_speaker() {
        assert_eq!(Room::Moderators.key(), "mod");
        assert_eq!(Room::Speaker("alice".to_string()).key(), "speaker:alice");
        assert_eq!(Room::Selected("alice".to_string()).key(), "selected:alice");
    }
}
