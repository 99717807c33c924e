use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::roller::DiceRoller;
use super::tally::{clamp_face, SequenceTally};

/// 单次掷骰的骰子数上限。
pub const MAX_POOL_SIZE: i64 = 100;

/// 一次掷骰的原始结果。顺序即掷出顺序，重掷按普通骰下标定位。
///
/// 反序列化时点数会被夹到 1..=10。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DicePool {
    #[serde(default, deserialize_with = "deserialize_faces")]
    pub normal: Vec<u8>,
    #[serde(default, deserialize_with = "deserialize_faces")]
    pub hunger: Vec<u8>,
}

fn deserialize_faces<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let faces = Vec::<u8>::deserialize(deserializer)?;
    Ok(faces.into_iter().map(clamp_face).collect())
}

impl DicePool {
    pub fn new(normal: Vec<u8>, hunger: Vec<u8>) -> Self {
        Self { normal, hunger }
    }

    pub fn size(&self) -> usize {
        self.normal.len() + self.hunger.len()
    }

    pub fn has_normal_dice(&self) -> bool {
        !self.normal.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_pool(self)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub successes: u32,
    pub messy_critical: bool,
    pub bestial_failure: bool,
}

impl Verdict {
    pub fn from_pool(pool: &DicePool) -> Self {
        let normal = SequenceTally::count(&pool.normal);
        let hunger = SequenceTally::count(&pool.hunger);

        let successes = normal.successes + hunger.successes;
        // 暴击判定跨序列配对，计分则各自配对
        let combined_pairs = (normal.tens + hunger.tens) / 2;
        let messy_critical = combined_pairs > 0 && hunger.tens > 0;
        let mut verdict = Self {
            successes,
            messy_critical,
            bestial_failure: false,
        };
        verdict.bestial_failure = verdict.is_failure() && hunger.has_ones();
        verdict
    }

    pub fn is_failure(&self) -> bool {
        self.successes == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollOutcome {
    pub pool: DicePool,
    pub verdict: Verdict,
}

impl RollOutcome {
    pub fn new(pool: DicePool) -> Self {
        let verdict = pool.verdict();
        Self { pool, verdict }
    }
}

/// 将请求的骰池与饥渴值夹到 `1..=MAX_POOL_SIZE`，返回 `(普通骰数, 饥渴骰数)`。
pub fn partition(total_pool: i64, hunger_count: i64) -> (usize, usize) {
    let total = total_pool.clamp(1, MAX_POOL_SIZE);
    let hunger = hunger_count.clamp(0, total);
    let normal = usize::try_from(total - hunger).unwrap_or(0);
    let hunger = usize::try_from(hunger).unwrap_or(0);
    (normal, hunger)
}

/// 先掷全部普通骰，再掷全部饥渴骰。
pub fn resolve<R: DiceRoller + ?Sized>(
    roller: &mut R,
    total_pool: i64,
    hunger_count: i64,
) -> RollOutcome {
    let (normal_count, hunger_count) = partition(total_pool, hunger_count);

    let normal = roller.roll(normal_count);
    let hunger = roller.roll(hunger_count);
    let outcome = RollOutcome::new(DicePool::new(normal, hunger));

    debug!(
        normal = ?outcome.pool.normal,
        hunger = ?outcome.pool.hunger,
        successes = outcome.verdict.successes,
        messy = outcome.verdict.messy_critical,
        bestial = outcome.verdict.bestial_failure,
        "pool resolved"
    );

    outcome
}
