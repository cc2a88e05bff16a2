use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 20;
pub const MIN_IMPOSTORS: usize = 1;
pub const MAX_IMPOSTORS: usize = 2;
pub const MIN_ROUND_MINS: u32 = 3;
pub const MAX_ROUND_MINS: u32 = 15;
pub const DEFAULT_ROUND_SECS: u32 = 5 * 60;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GameConfig {
	pub impostors: usize,
	pub round_secs: u32,
	/// When off, impostors are told their role but get no clue at all.
	pub clues_enabled: bool,
}

impl Default for GameConfig {
	fn default() -> Self {
		GameConfig {
			impostors: MIN_IMPOSTORS,
			round_secs: DEFAULT_ROUND_SECS,
			clues_enabled: true,
		}
	}
}

impl GameConfig {
	/// Every violation here is a configuration error the user has to fix
	/// before a game can start.
	pub fn validate(&self, player_count: usize) -> Result<()> {
		if player_count < MIN_PLAYERS {
			bail!("You need at least {} players", MIN_PLAYERS);
		}
		if player_count > MAX_PLAYERS {
			bail!("No more than {} players are supported", MAX_PLAYERS);
		}
		if self.impostors < MIN_IMPOSTORS {
			bail!("A game needs at least one impostor");
		}
		if self.impostors > MAX_IMPOSTORS {
			bail!("No more than {} impostors are supported", MAX_IMPOSTORS);
		}
		// the impostors must start out strictly outnumbered, otherwise
		// the game would be over before the first vote
		if self.impostors * 2 >= player_count {
			bail!(
				"{} impostors need at least {} players",
				self.impostors,
				self.impostors * 2 + 1
			);
		}
		if self.round_secs < MIN_ROUND_MINS * 60 || self.round_secs > MAX_ROUND_MINS * 60 {
			bail!(
				"The discussion time must be between {} and {} minutes",
				MIN_ROUND_MINS,
				MAX_ROUND_MINS
			);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_is_valid_for_a_minimal_table() {
		assert!(GameConfig::default().validate(MIN_PLAYERS).is_ok());
	}

	#[test]
	fn too_few_or_too_many_players() {
		let config = GameConfig::default();
		assert!(config.validate(2).is_err());
		assert!(config.validate(3).is_ok());
		assert!(config.validate(20).is_ok());
		assert!(config.validate(21).is_err());
	}

	#[test]
	fn impostor_count_bounds() {
		let mut config = GameConfig::default();

		config.impostors = 0;
		assert!(config.validate(5).is_err());

		config.impostors = 2;
		// three players leave only one civilian: rejected
		assert!(config.validate(3).is_err());
		// four players would start at 2 vs 2 parity, a game that's
		// already lost: rejected
		assert!(config.validate(4).is_err());
		// five players leave the impostors outnumbered: fine
		assert!(config.validate(5).is_ok());

		config.impostors = 3;
		assert!(config.validate(10).is_err());
	}

	#[test]
	fn round_length_bounds() {
		let mut config = GameConfig::default();

		config.round_secs = MIN_ROUND_MINS * 60 - 1;
		assert!(config.validate(5).is_err());
		config.round_secs = MIN_ROUND_MINS * 60;
		assert!(config.validate(5).is_ok());
		config.round_secs = MAX_ROUND_MINS * 60;
		assert!(config.validate(5).is_ok());
		config.round_secs = MAX_ROUND_MINS * 60 + 1;
		assert!(config.validate(5).is_err());
	}
}
