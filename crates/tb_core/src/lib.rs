//! # tb_core - TeamBuilder player data
//!
//! Shared building blocks for the TeamBuilder test tooling.
//!
//! ## Features
//! - Player records as they appear in sign-up sheets (name, sex, SSV membership)
//! - Ordered regex taxonomy that maps free-text club names to a canonical sport
//! - Synthetic player generation, uniformly random or balanced across clubs and sexes

pub mod generator;
pub mod models;
pub mod sport;

pub use generator::{balanced_slot, generate_players, player_rng, Distribution};
pub use models::{PlayerRecord, Sex, CLUB_NAMES};
pub use sport::{parse_sport, Sport, SportClassifier, SPORT_PATTERNS};
