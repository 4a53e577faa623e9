//! Bestiary synergy bonuses - all tunable values in one place
//!
//! Bonuses only ever add. A trait that matches nothing scores 0.

// Attack bestiary
pub const ATTACK_DAMAGE_BUFF: u32 = 10;
pub const ATTACK_HEALING_BUFF: u32 = 5;
pub const ATTACK_BLEED_SYNERGY: u32 = 25;
pub const ATTACK_FOLLOWER_SCALING: u32 = 20;
pub const ATTACK_DEFAULT_MIN_FOLLOWERS: u32 = 2;
pub const ATTACK_RANGED_FRIENDLY: u32 = 20;
pub const ATTACK_TEAM_AOE: u32 = 15;
pub const ATTACK_CRIT_OR_SINGLE_TARGET: u32 = 15;
pub const ATTACK_TANK_SYNERGY: u32 = 10;
pub const ATTACK_RANGED_AOE_FAR: u32 = 8;
pub const ATTACK_MELEE_CLOSE: u32 = 5;

// Tank bestiary
pub const TANK_DEFENSE_BUFF: u32 = 12;
pub const TANK_DEBUFF_RESIST: u32 = 8;
pub const TANK_PARTY_SHIELD: u32 = 10;
pub const TANK_DAMAGE_REDIRECT: u32 = 10;
pub const TANK_BIG_PET_SYNERGY: u32 = 8;
pub const TANK_DEFAULT_MIN_SLOTS: u32 = 3;
pub const TANK_TEAM_SIZE_FLOOR: u32 = 2;
pub const TANK_DEFAULT_MIN_FOLLOWERS: u32 = 0;
pub const TANK_MELEE_AOE_FAR: u32 = 3;
pub const TANK_MELEE_CLOSE: u32 = 5;

// Utility bestiary
pub const UTILITY_DAMAGE_BUFF: u32 = 10;
pub const UTILITY_TAMER_DAMAGE_BUFF: u32 = 8;
pub const UTILITY_LIFESTEAL: u32 = 6;
pub const UTILITY_POISON_OR_DISEASE: u32 = 15;
pub const UTILITY_CHILL: u32 = 12;
pub const UTILITY_TEAM_SIZE_FLOOR: u32 = 2;
pub const UTILITY_DEFAULT_MIN_FOLLOWERS: u32 = 0;
pub const UTILITY_MELEE_CLOSE: u32 = 5;
pub const UTILITY_RANGED_AOE_FAR: u32 = 5;
