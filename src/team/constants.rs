//! Team scoring constants - all tunable values in one place
//!
//! Every bonus is ADDITIVE. The advisor mirrors the evaluator at a smaller
//! scale so role gaps outweigh playstyle polish.

// Evaluator: playstyle bonuses on the team's tag union
pub const AOE_TAG_BONUS: f64 = 40.0;
pub const AOE_RANGED_OR_SPELL_BONUS: f64 = 20.0;
pub const SINGLE_TARGET_BONUS: f64 = 40.0;
pub const BALANCED_TANK_AND_ATTACK_BONUS: f64 = 30.0;

// Advisor: missing roles
pub const MISSING_TANK_BONUS: f64 = 25.0;
pub const MISSING_ATTACK_BONUS: f64 = 20.0;

// Advisor: playstyle bonuses on the candidate's own tags
pub const CANDIDATE_AOE_BONUS: f64 = 20.0;
pub const CANDIDATE_RANGED_OR_SPELL_BONUS: f64 = 10.0;
pub const CANDIDATE_SINGLE_TARGET_BONUS: f64 = 20.0;
pub const CANDIDATE_BALANCED_ROLE_BONUS: f64 = 15.0;

// Advisor: weight of scalar-weighted average damage
pub const CANDIDATE_DAMAGE_WEIGHT: f64 = 0.3;
