use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityPost {
    pub user: String,
    pub time: String, // relative label, "Just now" for fresh posts
    pub content: String,
}

/// Posts every new session's feed starts with.
pub fn seed_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            user: "Sarah J.".into(),
            time: "2 hours ago".into(),
            content: "Just finished a 5-minute breathing exercise in the car before picking up the kids. Small wins! 🌿".into(),
        },
        CommunityPost {
            user: "Elena M.".into(),
            time: "5 hours ago".into(),
            content: "The new Wordle completely stumped me today. Still, a good brain workout. Anyone else struggling?".into(),
        },
    ]
}
