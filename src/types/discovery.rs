use serde::{Deserialize, Serialize};

/// How a recommendations shelf is laid out on the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentType {
    /// Carousel of friends
    #[default]
    FriendCarousel,

    /// Wide 16:9 cards
    Carousel,

    /// Grid of small square cards
    SortlessGrid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub universe_id: u64,
    pub root_place_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,

    pub total_up_votes: u64,
    pub total_down_votes: u64,
    pub player_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsTopic {
    #[serde(alias = "topicId")]
    pub topic_id: u64,

    /// Title
    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    pub treatment_type: TreatmentType,

    /// In display order.
    pub recommendation_list: Vec<Recommendation>,
}
