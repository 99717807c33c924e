use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::tally::{clamp_face, CRITICAL_FACE};

/// 掷骰服务接口。实现者负责生成 1..=10 的独立均匀结果。
pub trait DiceRoller {
    fn roll_one(&mut self) -> u8;

    fn roll(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.roll_one()).collect()
    }
}

impl<R: DiceRoller + ?Sized> DiceRoller for &mut R {
    fn roll_one(&mut self) -> u8 {
        (**self).roll_one()
    }

    fn roll(&mut self, count: usize) -> Vec<u8> {
        (**self).roll(count)
    }
}

/// 基于 `SmallRng` 的默认掷骰实现。
#[derive(Debug, Clone)]
pub struct RandomRoller {
    rng: SmallRng,
}

impl RandomRoller {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// 派生一个独立的掷骰器，供异步任务持有。
    pub fn fork(&mut self) -> Self {
        Self::with_seed(self.rng.gen())
    }
}

impl Default for RandomRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller for RandomRoller {
    fn roll_one(&mut self) -> u8 {
        self.rng.gen_range(1..=CRITICAL_FACE)
    }
}

/// 按预设顺序返回点数，用于宿主已掷出的结果（例如 3D 骰子动画）以及测试。
///
/// 预设值耗尽后回退到内部的 `RandomRoller`；超出 1..=10 的值会被夹到合法范围。
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    queue: VecDeque<u8>,
    fallback: RandomRoller,
}

impl ScriptedRoller {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            fallback: RandomRoller::with_seed(0),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll_one(&mut self) -> u8 {
        match self.queue.pop_front() {
            Some(value) => clamp_face(value),
            None => self.fallback.roll_one(),
        }
    }
}
