// src/panels.rs
//! Static content of the stats panel. No logic lives here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub title: &'static str,
    pub players: &'static str,
    pub rating: &'static str,
    pub genre: &'static str,
    /// Bundled thumbnail resource id.
    pub thumbnail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPanel {
    pub performance: Vec<StatCard>,
    pub games: Vec<GameCard>,
}

impl StatsPanel {
    pub const PERFORMANCE_TITLE: &'static str = "Performance";
    pub const GAMES_TITLE: &'static str = "Games";
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self {
            performance: vec![
                StatCard { title: "Interactions", value: "1,234" },
                StatCard { title: "Engagement Time", value: "5.6 min" },
                StatCard { title: "Users Reached", value: "10,000" },
            ],
            games: vec![
                GameCard {
                    title: "Anarchy",
                    players: "80-100 daily",
                    rating: "4.7",
                    genre: "Strategy",
                    thumbnail: "anarchy",
                },
                GameCard {
                    title: "SpaceRPG",
                    players: "1000-1500 daily",
                    rating: "4.5",
                    genre: "RPG",
                    thumbnail: "space",
                },
                GameCard {
                    title: "Eutony",
                    players: "5000-7000 daily",
                    rating: "4.2",
                    genre: "Puzzle",
                    thumbnail: "eutony",
                },
            ],
        }
    }
}
