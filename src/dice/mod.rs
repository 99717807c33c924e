//! 骰池解析核心（计数、特殊结果判定、意志力重掷）。

pub mod pool;
pub mod reroll;
pub mod roller;
pub mod tally;

pub use pool::{partition, resolve, DicePool, RollOutcome, Verdict, MAX_POOL_SIZE};
pub use reroll::{
    parse_selection, reroll, select_positions, RerollAudit, RerollChange, RerollOutcome,
    DEFAULT_MAX_REROLL,
};
pub use roller::{DiceRoller, RandomRoller, ScriptedRoller};
pub use tally::{SequenceTally, SUCCESS_THRESHOLD};
