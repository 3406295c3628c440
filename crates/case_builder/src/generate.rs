//! Test-case generation: synthetic players → CSV

use std::path::{Path, PathBuf};

use tb_core::models::PLAYER_COLUMNS;
use tb_core::{generate_players, player_rng, Distribution};

use crate::error::Result;
use crate::table::write_records;

/// Settings for one generated test case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub player_count: usize,
    pub distribution: Distribution,
    /// Directory the CSV is written to (created if missing)
    pub out_dir: PathBuf,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl GenerateOptions {
    pub fn new(player_count: usize, distribution: Distribution) -> Self {
        Self {
            player_count,
            distribution,
            out_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

/// `test-input-<n>-players[-balanced].csv`
pub fn test_case_file_name(player_count: usize, distribution: Distribution) -> String {
    let suffix = match distribution {
        Distribution::Random => "",
        Distribution::Balanced => "-balanced",
    };
    format!("test-input-{}-players{}.csv", player_count, suffix)
}

/// Generate players and write them to `out_dir`. Returns the written path.
pub fn build_test_case(options: &GenerateOptions) -> Result<PathBuf> {
    let mut rng = player_rng(options.seed);
    let players = generate_players(options.player_count, options.distribution, &mut rng);

    let path = output_path(&options.out_dir, options.player_count, options.distribution);
    write_records(&path, &PLAYER_COLUMNS, &players)?;

    log::info!("Wrote {} players to {}", players.len(), path.display());
    Ok(path)
}

fn output_path(out_dir: &Path, player_count: usize, distribution: Distribution) -> PathBuf {
    out_dir.join(test_case_file_name(player_count, distribution))
}
