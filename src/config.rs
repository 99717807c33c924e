use serde::{Deserialize, Serialize};

use crate::dice::DEFAULT_MAX_REROLL;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RollConfig {
    pub max_reroll_dice: usize,
    /// 两批掷骰之间等待的动画时长（毫秒），仅异步接口使用。
    pub animation_delay_ms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RollConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_animation_delay(mut self, delay_ms: u32) -> Self {
        self.animation_delay_ms = delay_ms;
        self
    }

    pub fn with_max_reroll_dice(mut self, max: usize) -> Self {
        self.max_reroll_dice = max;
        self
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            max_reroll_dice: DEFAULT_MAX_REROLL,
            animation_delay_ms: 0,
            seed: None,
        }
    }
}
