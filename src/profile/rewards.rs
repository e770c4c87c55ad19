//! Daily challenge bookkeeping and XP/star rewards.

use super::StudentProfile;
use crate::tools::ToolId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    #[error("Challenge {id} is not completed yet")]
    NotCompleted { id: String },
    #[error("Reward for challenge {id} was already claimed")]
    AlreadyClaimed { id: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub xp: u32,
    pub stars: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tool_id: ToolId,
    pub reward_xp: u32,
    pub reward_stars: u32,
    pub completed: bool,
    pub claimed: bool,
}

impl Default for DailyChallenge {
    fn default() -> Self {
        Self {
            id: "dc-001".to_string(),
            title: "Quiz Master 🧠".to_string(),
            description: "Use the Interactive Quiz tool to generate a quiz on any topic.".to_string(),
            tool_id: ToolId::InteractiveQuiz,
            reward_xp: 500,
            reward_stars: 25,
            completed: false,
            claimed: false,
        }
    }
}

impl DailyChallenge {
    /// Records a successful generation. Returns true when this call is the
    /// one that completed the challenge.
    pub fn record_use(&mut self, tool: ToolId) -> bool {
        if tool == self.tool_id && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn claim(&mut self, profile: &mut StudentProfile) -> Result<Reward, RewardError> {
        if !self.completed {
            return Err(RewardError::NotCompleted { id: self.id.clone() });
        }
        if self.claimed {
            return Err(RewardError::AlreadyClaimed { id: self.id.clone() });
        }

        profile.xp = profile.xp.saturating_add(self.reward_xp);
        profile.stars = profile.stars.saturating_add(self.reward_stars);
        self.claimed = true;

        Ok(Reward {
            xp: self.reward_xp,
            stars: self.reward_stars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_challenge_tool_completes() {
        let mut challenge = DailyChallenge::default();
        assert!(!challenge.record_use(ToolId::DoubtSolver));
        assert!(challenge.record_use(ToolId::InteractiveQuiz));
        assert!(!challenge.record_use(ToolId::InteractiveQuiz));
        assert!(challenge.completed);
    }

    #[test]
    fn test_claim_pays_out_once() {
        let mut profile = StudentProfile::default();
        let mut challenge = DailyChallenge::default();

        assert!(matches!(
            challenge.claim(&mut profile),
            Err(RewardError::NotCompleted { .. })
        ));

        challenge.record_use(ToolId::InteractiveQuiz);
        let reward = challenge.claim(&mut profile).unwrap();
        assert_eq!(reward, Reward { xp: 500, stars: 25 });
        assert_eq!(profile.xp, 1750);
        assert_eq!(profile.stars, 70);

        assert!(matches!(
            challenge.claim(&mut profile),
            Err(RewardError::AlreadyClaimed { .. })
        ));
        assert_eq!(profile.xp, 1750);
    }
}
