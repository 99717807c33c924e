//! 浏览器环境下的导出接口测试：`wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use hunger_dice::{DicePool, HungerRoller, RerollOutcome, RollCard, RollError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn seeded_roller() -> HungerRoller {
    HungerRoller::new(Some(r#"{"seed": 3, "animation_delay_ms": 5}"#.to_string()))
        .expect("config should parse")
}

#[wasm_bindgen_test]
fn roll_pool_from_injected_character() {
    let mut roller = seeded_roller();
    roller
        .set_characters_json(
            r#"{"a": {"name": "Lou", "system": {"attributes": {"physical": {"strength": 3}}, "skills": {"brawl": 2}}}}"#,
        )
        .expect("characters should parse");

    let json = roller
        .roll_pool_json(r#"{"actor_id": "a", "attribute": "strength", "skill": "brawl", "hunger": 2}"#)
        .expect("roll should succeed");
    let card: RollCard = serde_json::from_str(&json).expect("card json");

    assert_eq!(card.labels, vec!["Lou".to_string()]);
    assert_eq!(card.pool().normal.len(), 3);
    assert_eq!(card.pool().hunger.len(), 2);
}

#[wasm_bindgen_test]
fn reroll_refuses_all_hunger_pool() {
    let mut roller = seeded_roller();
    let error = roller
        .reroll_pool_json(r#"{"normal": [], "hunger": [1, 4]}"#, "1")
        .expect_err("reroll should be refused");
    let error: RollError = serde_wasm_bindgen::from_value(error).expect("tagged error");
    assert_eq!(error, RollError::NoEligibleDice);
}

#[wasm_bindgen_test]
fn reroll_pool_touches_selected_dice() {
    let mut roller = seeded_roller();
    let json = roller
        .reroll_pool_json(r#"{"normal": [3, 7, 9, 2], "hunger": [5]}"#, "1,3")
        .expect("reroll should succeed");
    let outcome: RerollOutcome = serde_json::from_str(&json).expect("outcome json");

    assert_eq!(outcome.audit.len(), 2);
    assert_eq!(outcome.audit[0].old_value, 3);
    assert_eq!(outcome.audit[1].old_value, 9);
    assert_eq!(outcome.pool.normal[1], 7);
    assert_eq!(outcome.pool.normal[3], 2);
    assert_eq!(outcome.pool.hunger, vec![5]);
}

#[wasm_bindgen_test]
fn malformed_request_is_rejected() {
    let mut roller = seeded_roller();
    let error = roller.roll_pool_json("not json").expect_err("should fail");
    let error: RollError = serde_wasm_bindgen::from_value(error).expect("tagged error");
    assert!(matches!(error, RollError::InvalidPayload { .. }));
}

#[wasm_bindgen_test]
fn evaluate_pool_matches_native_verdict() {
    let pool = DicePool::new(vec![10, 2], vec![10, 3]);
    let value = serde_wasm_bindgen::to_value(&pool).expect("pool to js");
    let result = hunger_dice::evaluate_pool(value).expect("evaluate");
    let outcome: hunger_dice::RollOutcome =
        serde_wasm_bindgen::from_value(result).expect("outcome from js");
    assert!(outcome.verdict.messy_critical);
    assert_eq!(outcome.verdict, pool.verdict());
}

#[wasm_bindgen_test]
async fn animated_roll_resolves_to_card() {
    let mut roller = seeded_roller();
    let promise = roller.roll_pool_animated(r#"{"modifier": 4, "hunger": 1}"#);
    let value: JsValue = JsFuture::from(promise).await.expect("promise resolves");
    let json = value.as_string().expect("card json string");
    let card: RollCard = serde_json::from_str(&json).expect("card json");

    assert_eq!(card.pool().normal.len(), 3);
    assert_eq!(card.pool().hunger.len(), 1);
}
