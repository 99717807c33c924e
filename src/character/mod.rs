//! 角色属性、技能查询与骰池组装。

pub mod request;
pub mod roster;
pub mod source;

pub use request::{compose_pool, ComposedPool, PoolRequest};
pub use roster::{Attribute, AttributeGroup, Roster, Skill, STANDARD_ROSTER};
pub use source::{ActorRecord, CharacterSource, JsonCharacterSource, NoCharacters};
