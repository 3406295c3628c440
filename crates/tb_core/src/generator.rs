//! Synthetic player generation for test cases
//!
//! Names are derived from sex (Alice/Bob, last name F/M) so generated sheets are
//! easy to eyeball. Clubs come from [`CLUB_NAMES`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{PlayerRecord, Sex, CLUB_NAMES};

/// How players are spread over clubs and sexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Sex and club drawn uniformly and independently per player
    #[default]
    Random,
    /// Equal share per club, split evenly by sex. Rows lost to integer
    /// division are not generated.
    Balanced,
}

/// RNG used by the generator; deterministic when `seed` is set
pub fn player_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Generate synthetic players using `distribution`
pub fn generate_players<R: Rng + ?Sized>(
    player_count: usize,
    distribution: Distribution,
    rng: &mut R,
) -> Vec<PlayerRecord> {
    match distribution {
        Distribution::Random => random_players(player_count, rng),
        Distribution::Balanced => balanced_players(player_count),
    }
}

fn random_players<R: Rng + ?Sized>(player_count: usize, rng: &mut R) -> Vec<PlayerRecord> {
    (0..player_count)
        .map(|_| {
            let sex = Sex::ALL[rng.gen_range(0..Sex::ALL.len())];
            let club = CLUB_NAMES[rng.gen_range(0..CLUB_NAMES.len())];
            PlayerRecord::new(sex, club)
        })
        .collect()
}

fn balanced_players(player_count: usize) -> Vec<PlayerRecord> {
    let per_club = player_count / CLUB_NAMES.len();
    let per_sex = per_club / 2;

    log::info!(
        "Generating {} players ({} per SSV, {} per SSV and sex)",
        player_count,
        per_club,
        per_sex
    );

    let mut slots: Vec<(usize, PlayerRecord)> =
        Vec::with_capacity(CLUB_NAMES.len() * Sex::ALL.len() * per_sex);
    for (club_idx, club) in CLUB_NAMES.iter().enumerate() {
        for (sex_idx, sex) in Sex::ALL.iter().enumerate() {
            for k in 0..per_sex {
                let slot = balanced_slot(club_idx, sex_idx, k, per_club);
                log::debug!("slot {} -> {} / {}", slot, club, sex);
                slots.push((slot, PlayerRecord::new(*sex, *club)));
            }
        }
    }

    let dropped = player_count - slots.len();
    if dropped > 0 {
        log::warn!(
            "{} of {} players not generated: count does not divide evenly over {} SSVs and {} sexes",
            dropped,
            player_count,
            CLUB_NAMES.len(),
            Sex::ALL.len()
        );
    }

    slots.sort_by_key(|(slot, _)| *slot);
    slots.into_iter().map(|(_, player)| player).collect()
}

/// Row index of the `k`-th player of `sex_idx` within club `club_idx`
pub fn balanced_slot(club_idx: usize, sex_idx: usize, k: usize, per_club: usize) -> usize {
    club_idx * per_club + sex_idx * (per_club / 2) + k
}
