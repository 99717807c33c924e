pub mod card;
pub mod character;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod utils;

use gloo_timers::future::TimeoutFuture;
use serde_wasm_bindgen::{from_value, to_value};
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::js_sys::Promise;

pub use card::{RollCard, RollFlags, RouseCheck};
pub use character::{
    compose_pool, ActorRecord, Attribute, AttributeGroup, CharacterSource, ComposedPool,
    JsonCharacterSource, NoCharacters, PoolRequest, Roster, Skill, STANDARD_ROSTER,
};
pub use config::RollConfig;
pub use dice::{
    parse_selection, DicePool, DiceRoller, RandomRoller, RerollAudit, RerollChange,
    RerollOutcome, RollOutcome, ScriptedRoller, SequenceTally, Verdict,
};
pub use engine::RollEngine;
pub use error::RollError;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn start() {
    utils::set_panic_hook();
    tracing_wasm::set_as_global_default();
}

fn to_js_error(error: RollError) -> JsValue {
    to_value(&error).unwrap_or_else(|serialize_err| JsValue::from_str(&serialize_err.to_string()))
}

fn serde_to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    to_js_error(RollError::invalid_payload(error))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(serde_to_js_error)
}

/// 面向宿主界面的掷骰器。角色数据由宿主以 JSON 注入。
#[wasm_bindgen]
pub struct HungerRoller {
    engine: RollEngine,
    characters: JsonCharacterSource,
}

#[wasm_bindgen]
impl HungerRoller {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<HungerRoller, JsValue> {
        let config = match config_json {
            Some(json) => RollConfig::from_json(&json).map_err(serde_to_js_error)?,
            None => RollConfig::default(),
        };
        Ok(HungerRoller {
            engine: RollEngine::new(config),
            characters: JsonCharacterSource::new(),
        })
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        to_json(self.engine.config())
    }

    pub fn set_characters_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.characters = JsonCharacterSource::from_json(json).map_err(serde_to_js_error)?;
        info!(actors = self.characters.len(), "characters loaded");
        Ok(())
    }

    pub fn resolve_json(&mut self, total_pool: i32, hunger: i32) -> Result<String, JsValue> {
        let outcome = self.engine.resolve(i64::from(total_pool), i64::from(hunger));
        to_json(&outcome)
    }

    /// 返回 `RollCard` 的 JSON；其中 `flags.roll_data` 应随消息保存以便重掷。
    pub fn roll_pool_json(&mut self, request_json: &str) -> Result<String, JsValue> {
        let request: PoolRequest = serde_json::from_str(request_json).map_err(serde_to_js_error)?;
        let card = self.engine.roll_pool(&request, &self.characters);
        to_json(&card)
    }

    /// 与 `roll_pool_json` 相同，但普通骰与饥渴骰之间等待 `animation_delay_ms`。
    pub fn roll_pool_animated(&mut self, request_json: &str) -> Promise {
        let request: Result<PoolRequest, JsValue> =
            serde_json::from_str(request_json).map_err(serde_to_js_error);
        let composed = request.map(|request| compose_pool(&request, &self.characters));
        let delay = self.engine.config().animation_delay_ms;
        let mut roller = self.engine.roller_mut().fork();

        future_to_promise(async move {
            let composed = composed?;
            let (normal_count, hunger_count) = dice::partition(composed.pool, composed.hunger);

            let normal = roller.roll(normal_count);
            if delay > 0 && hunger_count > 0 {
                TimeoutFuture::new(delay).await;
            }
            let hunger = roller.roll(hunger_count);

            let outcome = RollOutcome::new(DicePool::new(normal, hunger));
            let json = to_json(&RollCard::new(composed.labels, &outcome))?;
            Ok(JsValue::from_str(&json))
        })
    }

    /// `selection` 为从 1 开始、逗号分隔的骰子编号；空串视为取消。
    pub fn reroll_json(&mut self, card_json: &str, selection: &str) -> Result<String, JsValue> {
        let card: RollCard = serde_json::from_str(card_json).map_err(serde_to_js_error)?;
        let rerolled = self
            .engine
            .reroll_card(&card, selection)
            .map_err(to_js_error)?;
        to_json(&rerolled)
    }

    pub fn reroll_pool_json(
        &mut self,
        pool_json: &str,
        selection: &str,
    ) -> Result<String, JsValue> {
        let pool: DicePool = serde_json::from_str(pool_json).map_err(serde_to_js_error)?;
        let outcome = self
            .engine
            .reroll_selection(pool, selection)
            .map_err(to_js_error)?;
        to_json(&outcome)
    }

    pub fn rouse_check_json(&mut self) -> Result<String, JsValue> {
        let check = self.engine.rouse_check();
        info!(value = check.value, passed = check.passed, "rouse check");
        to_json(&check)
    }
}

#[wasm_bindgen(js_name = "roster")]
pub fn roster() -> Result<JsValue, JsValue> {
    to_value(&*STANDARD_ROSTER).map_err(JsValue::from)
}

/// 对宿主（例如 3D 骰子模块）已掷出的点数进行判定。
#[wasm_bindgen(js_name = "evaluatePool")]
pub fn evaluate_pool(pool: JsValue) -> Result<JsValue, JsValue> {
    let pool: DicePool = from_value(pool).map_err(JsValue::from)?;
    to_value(&RollEngine::<RandomRoller>::evaluate(pool)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "parseSelection")]
pub fn parse_selection_js(input: &str) -> Result<JsValue, JsValue> {
    to_value(&parse_selection(input)).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = "renderCard")]
pub fn render_card(card: JsValue) -> Result<String, JsValue> {
    let card: RollCard = from_value(card).map_err(JsValue::from)?;
    Ok(card.to_html())
}

#[wasm_bindgen(js_name = "renderRouseCheck")]
pub fn render_rouse_check(check: JsValue) -> Result<String, JsValue> {
    let check: RouseCheck = from_value(check).map_err(JsValue::from)?;
    Ok(check.to_html())
}
