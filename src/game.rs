use crate::config::GameConfig;
use crate::entity::EntityList;
use crate::id::Uid;
use crate::package::{Packages, WordPair};
use crate::player::Players;
use crate::role::{assign_roles, Role};
use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Everything one game is played with. The word pair and the package it
/// came from are picked once at setup and never change afterwards.
#[derive(Debug)]
pub struct GameState {
	pub players: Players,
	pub order: Vec<Uid>,
	pub package_name: String,
	pub pair: WordPair,
	pub config: GameConfig,
}

impl GameState {
	pub fn setup(
		roster: &Players,
		packages: &Packages,
		selected: &[Uid],
		config: &GameConfig,
		rng: &mut impl Rng,
	) -> Result<GameState> {
		config.validate(roster.len())?;

		if selected.is_empty() {
			bail!("Select at least one word package first");
		}
		// a selected package may have been deleted since
		let package = match selected.choose(rng).and_then(|id| packages.get(*id)) {
			Some(package) => package,
			None => bail!("A selected word package no longer exists"),
		};
		let pair = package.draw_pair(rng)?;

		let mut players = roster.clone();
		assign_roles(&mut players, config.impostors, rng)?;
		let order = players.ids();

		log::info!(
			"Starting a game: {} players, {} impostors, package \"{}\"",
			players.len(),
			config.impostors,
			package.name
		);
		Ok(GameState {
			players,
			order,
			package_name: package.name.clone(),
			pair,
			config: config.clone(),
		})
	}

	/// What a player of the given role gets to see during the reveal:
	/// civilians the word, impostors the clue, or nothing at all when
	/// clues are turned off.
	pub fn secret_for(&self, role: Role) -> Option<&str> {
		match role {
			Role::Civilian => Some(self.pair.word.as_str()),
			Role::Impostor if self.config.clues_enabled => Some(self.pair.clue.as_str()),
			Role::Impostor => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::package::{default_packages, WordPackage};
	use crate::player::Player;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn roster(n: usize) -> Players {
		let mut players = Players::default();
		for i in 0..n {
			players.push(Player::new(format!("Player {}", i)));
		}
		players
	}

	#[test]
	fn setup_assigns_roles_and_fixes_a_pair() {
		let mut rng = StdRng::seed_from_u64(0);
		let packages = default_packages();
		let selected = packages.ids();
		let game = GameState::setup(
			&roster(5),
			&packages,
			&selected,
			&GameConfig::default(),
			&mut rng,
		)
		.unwrap();

		assert_eq!(game.order.len(), 5);
		assert_eq!(
			game.players
				.iter()
				.filter(|(_, p)| p.role == Role::Impostor)
				.count(),
			1
		);

		// the pair stays whatever it was at setup
		let package = packages
			.iter()
			.find(|(_, p)| p.name == game.package_name)
			.map(|(_, p)| p)
			.unwrap();
		assert_eq!(package.words.get(&game.pair.word), Some(&game.pair.clue));
	}

	#[test]
	fn nothing_selected_is_a_config_error() {
		let mut rng = StdRng::seed_from_u64(1);
		let packages = default_packages();
		assert!(
			GameState::setup(&roster(5), &packages, &[], &GameConfig::default(), &mut rng).is_err()
		);
	}

	#[test]
	fn dangling_selection_is_a_config_error() {
		let mut rng = StdRng::seed_from_u64(2);
		let packages = default_packages();
		assert!(GameState::setup(
			&roster(5),
			&packages,
			&[Uid(999)],
			&GameConfig::default(),
			&mut rng
		)
		.is_err());
	}

	#[test]
	fn empty_selected_package_is_a_config_error() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut packages = Packages::default();
		let id = packages.push(WordPackage::new("Empty"));
		assert!(GameState::setup(
			&roster(5),
			&packages,
			&[id],
			&GameConfig::default(),
			&mut rng
		)
		.is_err());
	}

	#[test]
	fn too_few_players_is_a_config_error() {
		let mut rng = StdRng::seed_from_u64(4);
		let packages = default_packages();
		let selected = packages.ids();
		assert!(GameState::setup(
			&roster(2),
			&packages,
			&selected,
			&GameConfig::default(),
			&mut rng
		)
		.is_err());
	}

	#[test]
	fn secrets_follow_the_role_and_the_clue_toggle() {
		let mut rng = StdRng::seed_from_u64(5);
		let packages = default_packages();
		let selected = packages.ids();
		let mut game = GameState::setup(
			&roster(5),
			&packages,
			&selected,
			&GameConfig::default(),
			&mut rng,
		)
		.unwrap();

		assert_eq!(game.secret_for(Role::Civilian), Some(game.pair.word.as_str()));
		assert_eq!(game.secret_for(Role::Impostor), Some(game.pair.clue.as_str()));

		game.config.clues_enabled = false;
		assert_eq!(game.secret_for(Role::Impostor), None);
		assert_eq!(game.secret_for(Role::Civilian), Some(game.pair.word.as_str()));
	}
}
