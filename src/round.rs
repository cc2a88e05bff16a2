use crate::entity::EntityList;
use crate::id::Uid;
use crate::player::{Player, Players};
use crate::role::Role;
use anyhow::{bail, Result};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
	Ongoing,
	CiviliansWin,
	ImpostorsWin,
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Outcome::Ongoing => "Ongoing",
				Outcome::CiviliansWin => "Civilians win",
				Outcome::ImpostorsWin => "Impostors win",
			}
		)
	}
}

/// Pure win-condition check over the currently active players. Recomputed
/// from scratch on every call.
pub fn evaluate(active: &Players) -> Outcome {
	if active.is_empty() {
		// the caller is supposed to stop eliminating long before this point
		log::error!("Asked for the outcome of a round with no players left in it");
		return Outcome::Ongoing;
	}

	let impostors = active
		.iter()
		.filter(|(_, player)| player.role == Role::Impostor)
		.count();
	let civilians = active.len() - impostors;

	if impostors == 0 {
		Outcome::CiviliansWin
	} else if impostors >= civilians {
		Outcome::ImpostorsWin
	} else {
		Outcome::Ongoing
	}
}

/// The elimination phase: the set of still-active players, shrinking one
/// vote at a time until `evaluate` stops saying `Ongoing`.
#[derive(Debug)]
pub struct Round {
	active: Players,
}

impl Round {
	pub fn new(players: Players) -> Round {
		Round { active: players }
	}

	pub fn active(&self) -> &Players {
		&self.active
	}

	pub fn outcome(&self) -> Outcome {
		evaluate(&self.active)
	}

	/// Votes a player out and hands them back so the caller can reveal
	/// what they were.
	pub fn eliminate(&mut self, id: Uid) -> Result<Player> {
		if self.outcome() != Outcome::Ongoing {
			bail!("The round is already over");
		}
		let (_, eliminated) = match self.active.remove(id) {
			Some(removed) => removed,
			None => bail!("No active player with id {}", id),
		};
		log::debug!(
			"{} was eliminated, {} players left",
			eliminated.name,
			self.active.len()
		);
		Ok(eliminated)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::player::Player;

	fn active(roles: &[Role]) -> Players {
		let mut players = Players::default();
		for (i, role) in roles.iter().enumerate() {
			let id = players.push(Player::new(format!("Player {}", i)));
			players.get_mut(id).unwrap().role = *role;
		}
		players
	}

	use Role::{Civilian as C, Impostor as I};

	#[test]
	fn evaluate_is_deterministic() {
		let players = active(&[I, C, C, C]);
		assert_eq!(evaluate(&players), Outcome::Ongoing);
		assert_eq!(evaluate(&players), Outcome::Ongoing);
	}

	#[test]
	fn no_impostors_left_means_civilians_win() {
		assert_eq!(evaluate(&active(&[C, C, C, C])), Outcome::CiviliansWin);
	}

	#[test]
	fn impostor_parity_means_impostors_win() {
		assert_eq!(evaluate(&active(&[I, C])), Outcome::ImpostorsWin);
		assert_eq!(evaluate(&active(&[I, I, C])), Outcome::ImpostorsWin);
	}

	#[test]
	fn empty_round_is_treated_as_ongoing() {
		assert_eq!(evaluate(&Players::default()), Outcome::Ongoing);
	}

	#[test]
	fn civilians_get_whittled_down() {
		// N=5, K=1: eliminating civilians one by one ends in an impostor
		// win at 1 vs 1
		let mut round = Round::new(active(&[I, C, C, C, C]));

		for expected_outcome in [Outcome::Ongoing, Outcome::Ongoing, Outcome::ImpostorsWin].iter() {
			let victim = round
				.active()
				.iter()
				.find(|(_, p)| p.role == C)
				.map(|(id, _)| *id)
				.unwrap();
			let eliminated = round.eliminate(victim).unwrap();
			assert_eq!(eliminated.role, C);
			assert_eq!(round.outcome(), *expected_outcome);
		}
	}

	#[test]
	fn eliminating_the_impostor_ends_the_game() {
		let mut round = Round::new(active(&[I, C, C, C, C]));
		let impostor = round
			.active()
			.iter()
			.find(|(_, p)| p.role == I)
			.map(|(id, _)| *id)
			.unwrap();
		round.eliminate(impostor).unwrap();
		assert_eq!(round.outcome(), Outcome::CiviliansWin);
	}

	#[test]
	fn no_eliminations_after_the_round_is_over() {
		let mut round = Round::new(active(&[I, C]));
		assert_eq!(round.outcome(), Outcome::ImpostorsWin);
		let someone = round.active().ids()[0];
		assert!(round.eliminate(someone).is_err());
		assert_eq!(round.active().len(), 2);
	}

	#[test]
	fn unknown_player_cant_be_eliminated() {
		let mut round = Round::new(active(&[I, C, C]));
		assert!(round.eliminate(crate::id::Uid(999)).is_err());
	}
}
