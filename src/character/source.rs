use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 角色数据来源。路径为点号分隔，例如 `attributes.physical.strength`。
pub trait CharacterSource {
    fn display_name(&self, actor_id: &str) -> Option<String>;

    fn lookup(&self, actor_id: &str, path: &str) -> Option<i64>;
}

impl<S: CharacterSource + ?Sized> CharacterSource for &S {
    fn display_name(&self, actor_id: &str) -> Option<String> {
        (**self).display_name(actor_id)
    }

    fn lookup(&self, actor_id: &str, path: &str) -> Option<i64> {
        (**self).lookup(actor_id, path)
    }
}

/// 没有任何角色的数据源。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCharacters;

impl CharacterSource for NoCharacters {
    fn display_name(&self, _actor_id: &str) -> Option<String> {
        None
    }

    fn lookup(&self, _actor_id: &str, _path: &str) -> Option<i64> {
        None
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActorRecord {
    pub name: String,
    #[serde(default)]
    pub system: Value,
}

impl ActorRecord {
    pub fn new(name: impl Into<String>, system: Value) -> Self {
        Self {
            name: name.into(),
            system,
        }
    }

    pub fn value_at(&self, path: &str) -> Option<i64> {
        let mut node = &self.system;
        for segment in path.split('.').filter(|segment| !segment.is_empty()) {
            node = node.get(segment)?;
        }
        numeric_leaf(node)
    }
}

fn numeric_leaf(node: &Value) -> Option<i64> {
    match node {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        // `{ "value": 3 }` 形式的字段
        Value::Object(map) => map.get("value").and_then(numeric_leaf),
        _ => None,
    }
}

/// 以角色 id 为键、JSON 文档为值的数据源。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct JsonCharacterSource {
    actors: HashMap<String, ActorRecord>,
}

impl JsonCharacterSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_actor(mut self, actor_id: impl Into<String>, record: ActorRecord) -> Self {
        self.insert(actor_id, record);
        self
    }

    pub fn insert(&mut self, actor_id: impl Into<String>, record: ActorRecord) {
        self.actors.insert(actor_id.into(), record);
    }

    pub fn get(&self, actor_id: &str) -> Option<&ActorRecord> {
        self.actors.get(actor_id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl CharacterSource for JsonCharacterSource {
    fn display_name(&self, actor_id: &str) -> Option<String> {
        self.get(actor_id).map(|record| record.name.clone())
    }

    fn lookup(&self, actor_id: &str, path: &str) -> Option<i64> {
        self.get(actor_id)?.value_at(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_source() -> JsonCharacterSource {
        JsonCharacterSource::new().with_actor(
            "a1",
            ActorRecord::new(
                "Beckett",
                json!({
                    "attributes": {
                        "physical": { "strength": 2, "dexterity": "3" },
                        "mental": { "wits": { "value": 4 } }
                    },
                    "skills": { "brawl": 3, "stealth": 1.0 }
                }),
            ),
        )
    }

    #[test]
    fn looks_up_nested_numbers() {
        let source = sample_source();
        assert_eq!(source.lookup("a1", "attributes.physical.strength"), Some(2));
        assert_eq!(source.lookup("a1", "attributes.physical.dexterity"), Some(3));
        assert_eq!(source.lookup("a1", "attributes.mental.wits"), Some(4));
        assert_eq!(source.lookup("a1", "skills.stealth"), Some(1));
    }

    #[test]
    fn missing_paths_and_actors_are_none() {
        let source = sample_source();
        assert_eq!(source.lookup("a1", "skills.melee"), None);
        assert_eq!(source.lookup("a1", "attributes.physical"), None);
        assert_eq!(source.lookup("zz", "skills.brawl"), None);
        assert_eq!(source.display_name("zz"), None);
        assert_eq!(source.display_name("a1").as_deref(), Some("Beckett"));
    }

    #[test]
    fn parses_actor_map_from_json() {
        let source = JsonCharacterSource::from_json(
            r#"{"x": {"name": "Nines", "system": {"skills": {"firearms": 4}}}}"#,
        )
        .expect("valid actor json");
        assert_eq!(source.len(), 1);
        assert_eq!(source.lookup("x", "skills.firearms"), Some(4));
    }

    #[test]
    fn empty_source_knows_nobody() {
        assert_eq!(NoCharacters.lookup("a1", "skills.brawl"), None);
        assert!(JsonCharacterSource::new().is_empty());
    }
}
