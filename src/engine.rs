use tracing::debug;

use crate::card::{RollCard, RouseCheck};
use crate::character::{compose_pool, CharacterSource, PoolRequest};
use crate::config::RollConfig;
use crate::dice::{self, DicePool, DiceRoller, RandomRoller, RerollOutcome, RollOutcome};
use crate::error::RollError;

/// 持有掷骰服务与配置的解析器。角色数据按调用传入。
#[derive(Debug, Clone)]
pub struct RollEngine<R = RandomRoller> {
    config: RollConfig,
    roller: R,
}

impl RollEngine<RandomRoller> {
    pub fn new(config: RollConfig) -> Self {
        let roller = RandomRoller::from_seed_option(config.seed);
        Self { config, roller }
    }
}

impl Default for RollEngine<RandomRoller> {
    fn default() -> Self {
        Self::new(RollConfig::default())
    }
}

impl<R: DiceRoller> RollEngine<R> {
    pub fn with_roller(config: RollConfig, roller: R) -> Self {
        Self { config, roller }
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    pub fn roller_mut(&mut self) -> &mut R {
        &mut self.roller
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    pub fn resolve(&mut self, total_pool: i64, hunger_count: i64) -> RollOutcome {
        dice::resolve(&mut self.roller, total_pool, hunger_count)
    }

    /// 对宿主已掷出的点数直接判定。
    pub fn evaluate(pool: DicePool) -> RollOutcome {
        RollOutcome::new(pool)
    }

    pub fn reroll(
        &mut self,
        pool: DicePool,
        positions: &[usize],
    ) -> Result<RerollOutcome, RollError> {
        dice::reroll(
            &mut self.roller,
            pool,
            positions,
            self.config.max_reroll_dice,
        )
    }

    /// 解析界面输入的编号（从 1 开始，逗号分隔）后重掷。
    pub fn reroll_selection(
        &mut self,
        pool: DicePool,
        selection: &str,
    ) -> Result<RerollOutcome, RollError> {
        let positions = dice::parse_selection(selection);
        self.reroll(pool, &positions)
    }

    pub fn roll_pool<S: CharacterSource + ?Sized>(
        &mut self,
        request: &PoolRequest,
        source: &S,
    ) -> RollCard {
        let composed = compose_pool(request, source);
        debug!(
            actor = ?request.actor_id,
            pool = composed.pool,
            hunger = composed.hunger,
            "pool composed"
        );
        let outcome = self.resolve(composed.pool, composed.hunger);
        RollCard::new(composed.labels, &outcome)
    }

    /// 对已有卡片执行意志力重掷，保留原标签。
    pub fn reroll_card(
        &mut self,
        card: &RollCard,
        selection: &str,
    ) -> Result<RollCard, RollError> {
        let outcome = self.reroll_selection(card.pool().clone(), selection)?;
        Ok(RollCard::rerolled(card.labels.clone(), &outcome))
    }

    pub fn rouse_check(&mut self) -> RouseCheck {
        RouseCheck::new(self.roller.roll_one())
    }
}
