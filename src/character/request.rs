use serde::{Deserialize, Serialize};

use super::roster::AttributeGroup;
use super::source::CharacterSource;

/// 界面提交的掷骰请求。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub modifier: i64,
    #[serde(default)]
    pub hunger: i64,
}

impl PoolRequest {
    pub fn new(attribute: impl Into<String>, skill: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            skill: skill.into(),
            ..Self::default()
        }
    }

    pub fn for_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into()).filter(|id: &String| !id.is_empty());
        self
    }

    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn with_hunger(mut self, hunger: i64) -> Self {
        self.hunger = hunger;
        self
    }

    pub fn attribute_path(&self) -> String {
        let attribute = self.attribute.trim();
        format!("attributes.{}.{}", AttributeGroup::of(attribute).as_str(), attribute)
    }

    pub fn skill_path(&self) -> String {
        format!("skills.{}", self.skill.trim())
    }
}

/// 组装后的骰池大小与标签，尚未夹取。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposedPool {
    pub pool: i64,
    pub hunger: i64,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// 属性 + 技能 + 调整值。未指定角色时骰池为 `max(1, modifier)`；
/// 指定了但找不到的角色骰池为 0，交由解析阶段夹到 1。
pub fn compose_pool<S: CharacterSource + ?Sized>(
    request: &PoolRequest,
    source: &S,
) -> ComposedPool {
    let mut labels = Vec::new();
    let actor_id = request
        .actor_id
        .as_deref()
        .filter(|actor_id| !actor_id.is_empty());

    let pool = match actor_id {
        Some(actor_id) => match source.display_name(actor_id) {
            Some(name) => {
                let attribute = source
                    .lookup(actor_id, &request.attribute_path())
                    .unwrap_or(0);
                let skill = source.lookup(actor_id, &request.skill_path()).unwrap_or(0);
                labels.push(name);
                attribute
                    .saturating_add(skill)
                    .saturating_add(request.modifier)
            }
            None => 0,
        },
        None => request.modifier.max(1),
    };

    ComposedPool {
        pool,
        hunger: request.hunger,
        labels,
    }
}
