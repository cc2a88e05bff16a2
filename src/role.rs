use crate::entity::EntityList;
use crate::player::Players;
use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Role {
	Civilian,
	Impostor,
}

impl Default for Role {
	fn default() -> Self {
		Role::Civilian
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Role::Civilian => "Civilian",
				Role::Impostor => "Impostor",
			}
		)
	}
}

/// Marks exactly `impostor_count` players as impostors, chosen uniformly,
/// and everyone else as a civilian. An impostor count outside of
/// `1..players.len()` is rejected, never clamped.
pub fn assign_roles(
	players: &mut Players,
	impostor_count: usize,
	rng: &mut impl Rng,
) -> Result<()> {
	if impostor_count < 1 {
		bail!("A game needs at least one impostor");
	}
	if impostor_count >= players.len() {
		bail!(
			"Can't have {} impostors with only {} players",
			impostor_count,
			players.len()
		);
	}

	let mut ids = players.ids();
	ids.shuffle(rng);

	for (num, id) in ids.into_iter().enumerate() {
		// every id came from the list itself just above
		let player = players.get_mut(id).unwrap();
		player.role = if num < impostor_count {
			Role::Impostor
		} else {
			Role::Civilian
		};
	}

	log::debug!(
		"Assigned roles: {} impostors among {} players",
		impostor_count,
		players.len()
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
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

	fn impostor_count(players: &Players) -> usize {
		players
			.iter()
			.filter(|(_, p)| p.role == Role::Impostor)
			.count()
	}

	#[test]
	fn exactly_k_impostors_every_call() {
		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..100 {
			let mut players = roster(5);
			assign_roles(&mut players, 2, &mut rng).unwrap();
			assert_eq!(impostor_count(&players), 2);
		}
	}

	#[test]
	fn five_players_one_impostor() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut players = roster(5);
		assign_roles(&mut players, 1, &mut rng).unwrap();
		assert_eq!(impostor_count(&players), 1);
		assert_eq!(
			players
				.iter()
				.filter(|(_, p)| p.role == Role::Civilian)
				.count(),
			4
		);
	}

	#[test]
	fn zero_impostors_rejected() {
		let mut rng = StdRng::seed_from_u64(2);
		let mut players = roster(5);
		assert!(assign_roles(&mut players, 0, &mut rng).is_err());
	}

	#[test]
	fn as_many_impostors_as_players_rejected() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut players = roster(4);
		assert!(assign_roles(&mut players, 4, &mut rng).is_err());
		assert!(assign_roles(&mut players, 5, &mut rng).is_err());
		// the boundary itself is still fine for the assigner; the config
		// layer narrows it further
		assert!(assign_roles(&mut players, 3, &mut rng).is_ok());
	}

	#[test]
	fn reassignment_overwrites_old_roles() {
		let mut rng = StdRng::seed_from_u64(4);
		let mut players = roster(6);
		assign_roles(&mut players, 2, &mut rng).unwrap();
		assign_roles(&mut players, 1, &mut rng).unwrap();
		assert_eq!(impostor_count(&players), 1);
	}

	#[test]
	fn assignment_is_roughly_uniform() {
		const TRIALS: usize = 10_000;
		let mut rng = StdRng::seed_from_u64(5);
		let mut players = roster(5);
		let ids = players.ids();
		let mut hits: Vec<usize> = vec![0; ids.len()];

		for _ in 0..TRIALS {
			assign_roles(&mut players, 1, &mut rng).unwrap();
			for (num, id) in ids.iter().enumerate() {
				if players.get(*id).unwrap().role == Role::Impostor {
					hits[num] += 1;
				}
			}
		}

		// expected frequency is K/N = 1/5; allow a generous margin
		for count in hits {
			assert!(
				(1600..=2400).contains(&count),
				"impostor frequency {}/{} is way off 1/5",
				count,
				TRIALS
			);
		}
	}
}
