//! 意志力重掷：只重掷普通骰，饥渴骰永远不参与。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::pool::{DicePool, Verdict};
use super::roller::DiceRoller;
use crate::error::RollError;

/// 单次重掷最多可选的骰子数。
pub const DEFAULT_MAX_REROLL: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RerollChange {
    pub position: usize,
    pub old_value: u8,
    pub new_value: u8,
}

pub type RerollAudit = Vec<RerollChange>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RerollOutcome {
    pub pool: DicePool,
    pub verdict: Verdict,
    #[serde(default)]
    pub audit: RerollAudit,
}

/// 解析以逗号分隔、从 1 开始的骰子编号，转换为从 0 开始的下标。
///
/// 非数字和小于 1 的条目直接丢弃；截断在 [`select_positions`] 中按合法下标进行。
pub fn parse_selection(input: &str) -> Vec<usize> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(|entry| entry.parse::<i64>().ok())
        .filter(|index| *index >= 1)
        .filter_map(|index| usize::try_from(index - 1).ok())
        .collect()
}

/// 按调用方顺序取前 `max_count` 个在范围内且不重复的下标。
pub fn select_positions(positions: &[usize], len: usize, max_count: usize) -> Vec<usize> {
    let mut selected = Vec::with_capacity(max_count.min(positions.len()));
    for &position in positions {
        if selected.len() >= max_count {
            break;
        }
        if position < len && !selected.contains(&position) {
            selected.push(position);
        }
    }
    selected
}

pub fn reroll<R: DiceRoller + ?Sized>(
    roller: &mut R,
    mut pool: DicePool,
    positions: &[usize],
    max_count: usize,
) -> Result<RerollOutcome, RollError> {
    if !pool.has_normal_dice() {
        warn!(hunger = ?pool.hunger, "reroll refused: no normal dice");
        return Err(RollError::NoEligibleDice);
    }

    let selected = select_positions(positions, pool.normal.len(), max_count);
    let mut audit = RerollAudit::with_capacity(selected.len());

    for position in selected {
        let new_value = roller.roll_one();
        let old_value = std::mem::replace(&mut pool.normal[position], new_value);
        audit.push(RerollChange {
            position,
            old_value,
            new_value,
        });
    }

    let verdict = pool.verdict();
    debug!(
        changes = audit.len(),
        successes = verdict.successes,
        messy = verdict.messy_critical,
        bestial = verdict.bestial_failure,
        "willpower reroll applied"
    );

    Ok(RerollOutcome {
        pool,
        verdict,
        audit,
    })
}
