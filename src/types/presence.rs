use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresenceType {
    #[default]
    Offline,
    Online,
    InGame,
    InStudio,
    Invisible,
}

impl PresenceType {
    /// Sort weight for friend lists: people in an experience first, then
    /// online, then everyone else.
    pub fn rank(self) -> u8 {
        match self {
            Self::Invisible | Self::Offline => 0,
            Self::Online => 1,
            Self::InGame | Self::InStudio => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPresence {
    pub user_id: u64,
    pub presence_type: PresenceType,
    pub last_online: String,
    pub last_location: String,

    // Only set while the user is inside an experience.
    #[serde(default)]
    pub place_id: Option<u64>,
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub universe_id: Option<u64>,
}

impl UserPresence {
    pub fn is_in_game(&self) -> bool {
        self.presence_type == PresenceType::InGame && self.place_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_literals() {
        for (presence, literal) in [
            (PresenceType::Invisible, "Invisible"),
            (PresenceType::Offline, "Offline"),
            (PresenceType::Online, "Online"),
            (PresenceType::InGame, "InGame"),
            (PresenceType::InStudio, "InStudio"),
        ] {
            assert_eq!(serde_json::to_value(presence).unwrap(), json!(literal));
            assert_eq!(serde_json::from_value::<PresenceType>(json!(literal)).unwrap(), presence);
        }
        assert!(serde_json::from_value::<PresenceType>(json!("Away")).is_err());
    }

    #[test]
    fn test_rank_orders_friend_list() {
        let mut list = vec![
            PresenceType::Offline,
            PresenceType::InStudio,
            PresenceType::Online,
            PresenceType::Invisible,
            PresenceType::InGame,
        ];
        list.sort_by_key(|p| std::cmp::Reverse(p.rank()));
        assert_eq!(list[0].rank(), 2);
        assert_eq!(list[1].rank(), 2);
        assert_eq!(list[2], PresenceType::Online);
        assert_eq!(list[3].rank(), 0);
    }

    #[test]
    fn test_presence_in_game() {
        let presence: UserPresence = serde_json::from_value(json!({
            "user_id": 156,
            "presence_type": "InGame",
            "last_online": "2024-03-01T10:00:00Z",
            "last_location": "Natural Disaster Survival",
            "place_id": 189707,
            "game_id": "7d4c4c49-3ab4-4f1a-9ab0-fc4e4c6b1d5e",
            "universe_id": 65241
        }))
        .unwrap();
        assert!(presence.is_in_game());

        let presence: UserPresence = serde_json::from_value(json!({
            "user_id": 156,
            "presence_type": "Online",
            "last_online": "2024-03-01T10:00:00Z",
            "last_location": "Website"
        }))
        .unwrap();
        assert!(!presence.is_in_game());
        assert_eq!(presence.universe_id, None);
    }
}
