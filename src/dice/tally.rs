use serde::{Deserialize, Serialize};

/// 达成成功所需的最小点数。
pub const SUCCESS_THRESHOLD: u8 = 6;
/// 骰子最大面值。
pub const CRITICAL_FACE: u8 = 10;
/// 每对 10 点计入的成功数。
pub const CRITICAL_PAIR_BONUS: u32 = 4;

/// 将任意点数夹到 1..=10。
pub fn clamp_face(value: u8) -> u8 {
    value.clamp(1, CRITICAL_FACE)
}

/// 单个骰子序列（普通骰或饥渴骰）的统计结果。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceTally {
    pub successes: u32,
    pub tens: u32,
    pub ones: u32,
}

impl SequenceTally {
    /// 10 点在序列内部两两配对：每对计 4，落单的计 1；6-9 各计 1。
    pub fn count(results: &[u8]) -> Self {
        let mut tally = SequenceTally::default();
        for &value in results {
            match value {
                CRITICAL_FACE => tally.tens += 1,
                SUCCESS_THRESHOLD..=9 => tally.successes += 1,
                1 => tally.ones += 1,
                _ => {}
            }
        }

        tally.successes += tally.critical_pairs() * CRITICAL_PAIR_BONUS + tally.tens % 2;
        tally
    }

    pub fn critical_pairs(&self) -> u32 {
        self.tens / 2
    }

    pub fn has_ones(&self) -> bool {
        self.ones > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_score_nothing() {
        let tally = SequenceTally::count(&[1, 2, 3, 4, 5]);
        assert_eq!(tally.successes, 0);
        assert_eq!(tally.tens, 0);
        assert_eq!(tally.ones, 1);
    }

    #[test]
    fn plain_successes_score_one_each() {
        assert_eq!(SequenceTally::count(&[6, 7, 8, 9, 2]).successes, 4);
    }

    #[test]
    fn lone_ten_scores_one() {
        let tally = SequenceTally::count(&[10, 3]);
        assert_eq!(tally.successes, 1);
        assert_eq!(tally.critical_pairs(), 0);
    }

    #[test]
    fn paired_tens_score_four_not_six() {
        let tally = SequenceTally::count(&[10, 10]);
        assert_eq!(tally.successes, 4);
        assert_eq!(tally.critical_pairs(), 1);
    }

    #[test]
    fn three_tens_score_five() {
        assert_eq!(SequenceTally::count(&[10, 10, 10]).successes, 5);
    }

    #[test]
    fn four_tens_with_extras() {
        // 两对 10 计 8，再加 6 和 9
        assert_eq!(SequenceTally::count(&[10, 6, 10, 10, 9, 10]).successes, 10);
    }

    #[test]
    fn faces_are_clamped_to_d10_range() {
        assert_eq!(clamp_face(0), 1);
        assert_eq!(clamp_face(7), 7);
        assert_eq!(clamp_face(42), 10);
    }

    #[test]
    fn empty_sequence_is_zero() {
        assert_eq!(SequenceTally::count(&[]), SequenceTally::default());
    }
}
