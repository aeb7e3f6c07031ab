use serde::{Deserialize, Serialize};

pub const DEFAULT_MINDFULNESS: &str = "Take a deep breath and pause.";
pub const DEFAULT_JOURNALING: &str = "Write one thing you are grateful for.";
pub const DEFAULT_EXERCISE: &str = "Stretch your arms overhead for 10 seconds.";
pub const DEFAULT_AFFIRMATION: &str = "You are strong and capable.";

/// Daily wellbeing suggestions returned by `GET /api/tips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tips {
    pub mindfulness: String,
    pub journaling: String,
    pub exercise: String,
    pub affirmation: String,
}

impl Default for Tips {
    fn default() -> Self {
        Self {
            mindfulness: DEFAULT_MINDFULNESS.to_string(),
            journaling: DEFAULT_JOURNALING.to_string(),
            exercise: DEFAULT_EXERCISE.to_string(),
            affirmation: DEFAULT_AFFIRMATION.to_string(),
        }
    }
}
