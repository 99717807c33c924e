//! 聊天消息载荷：界面展示所需的文本与可供之后重掷的结构化骰池。

use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, RerollAudit, RerollOutcome, RollOutcome, SUCCESS_THRESHOLD};

pub const MESSY_CRITICAL_BADGE: &str = "Messy Critical!";
pub const BESTIAL_FAILURE_BADGE: &str = "Bestial Failure!";
pub const REROLL_BUTTON_LABEL: &str = "Willpower Reroll";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollFlags {
    pub roll_data: DicePool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollCard {
    #[serde(default)]
    pub labels: Vec<String>,
    pub normal_display: String,
    pub hunger_display: String,
    pub successes: u32,
    pub messy_critical: bool,
    pub bestial_failure: bool,
    pub reroll_available: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit: RerollAudit,
    pub flags: RollFlags,
}

impl RollCard {
    pub fn new(labels: Vec<String>, outcome: &RollOutcome) -> Self {
        let pool = &outcome.pool;
        Self {
            labels,
            normal_display: join_dice(&pool.normal),
            hunger_display: join_dice(&pool.hunger),
            successes: outcome.verdict.successes,
            messy_critical: outcome.verdict.messy_critical,
            bestial_failure: outcome.verdict.bestial_failure,
            reroll_available: pool.has_normal_dice(),
            audit: RerollAudit::new(),
            flags: RollFlags {
                roll_data: pool.clone(),
            },
        }
    }

    /// 重掷后的卡片不再提供重掷按钮。
    pub fn rerolled(labels: Vec<String>, outcome: &RerollOutcome) -> Self {
        let mut card = Self::new(
            labels,
            &RollOutcome {
                pool: outcome.pool.clone(),
                verdict: outcome.verdict,
            },
        );
        card.reroll_available = false;
        card.audit = outcome.audit.clone();
        card
    }

    pub fn pool(&self) -> &DicePool {
        &self.flags.roll_data
    }

    pub fn to_html(&self) -> String {
        let labels: Vec<String> = self.labels.iter().map(|label| escape_html(label)).collect();

        let mut flavor = vec![
            format!("<strong>{}</strong>", labels.join(" — ")),
            format!("Successes: {}", self.successes),
        ];
        if self.messy_critical {
            flavor.push(format!(
                r#"<span style="color:red">{MESSY_CRITICAL_BADGE}</span>"#
            ));
        }
        if self.bestial_failure {
            flavor.push(format!(
                r#"<span style="color:red">{BESTIAL_FAILURE_BADGE}</span>"#
            ));
        }

        let button = if self.reroll_available {
            format!(r#"<div><button class="willpower-reroll">{REROLL_BUTTON_LABEL}</button></div>"#)
        } else {
            String::new()
        };

        format!(
            concat!(
                r#"<div class="vtm-roll">"#,
                "<div><strong>Normal Dice:</strong> {}</div>",
                "<div><strong>Hunger Dice:</strong> {}</div>",
                "<div>{}</div>{}</div>"
            ),
            self.normal_html(),
            self.hunger_display,
            flavor.join("<br/>"),
            button
        )
    }

    // 按下标渲染，重复点数不会互相干扰
    fn normal_html(&self) -> String {
        self.pool()
            .normal
            .iter()
            .enumerate()
            .map(|(position, value)| {
                match self.audit.iter().find(|change| change.position == position) {
                    Some(change) => format!("<del>{}</del> → {}", change.old_value, value),
                    None => value.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 唤醒检定：单个 d10，6 点及以上通过。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouseCheck {
    pub value: u8,
    pub passed: bool,
}

impl RouseCheck {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            passed: value >= SUCCESS_THRESHOLD,
        }
    }

    pub fn to_html(&self) -> String {
        let result = if self.passed { "Success" } else { "Fail" };
        format!(
            "<strong>Rouse Check</strong><br/>Roll: {} — {}",
            self.value, result
        )
    }
}

fn join_dice(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
