//! Team composition: selection, aggregate profile, scoring and completion

pub mod advisor;
pub mod constants;
pub mod evaluator;
pub mod profile;
pub mod selection;

pub use advisor::{candidate_score, rank_candidates, recommend_team, recommend_team_with_config};
pub use evaluator::{score_team, score_team_with_config};
pub use profile::TeamProfile;
pub use selection::TeamSelection;
