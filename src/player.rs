use crate::entity::{Entity, EntityList};
use crate::id::Uid;
use crate::impl_default_entitylist;
use crate::impl_entity;
use crate::role::Role;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosmetic only, never consulted by the game logic.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum PlayerColor {
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	White,
	Gray,
}

impl PlayerColor {
	pub const ALL: [PlayerColor; 8] = [
		PlayerColor::Red,
		PlayerColor::Green,
		PlayerColor::Yellow,
		PlayerColor::Blue,
		PlayerColor::Magenta,
		PlayerColor::Cyan,
		PlayerColor::White,
		PlayerColor::Gray,
	];
}

impl Default for PlayerColor {
	fn default() -> Self {
		PlayerColor::Gray
	}
}

impl fmt::Display for PlayerColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}",
			match self {
				PlayerColor::Red => "Red",
				PlayerColor::Green => "Green",
				PlayerColor::Yellow => "Yellow",
				PlayerColor::Blue => "Blue",
				PlayerColor::Magenta => "Magenta",
				PlayerColor::Cyan => "Cyan",
				PlayerColor::White => "White",
				PlayerColor::Gray => "Gray",
			}
		)
	}
}

#[derive(Clone, Serialize, Deserialize, Default, Debug)]
pub struct Player {
	id: Option<Uid>,
	pub name: String,
	pub color: PlayerColor,

	// only meaningful while a game is running
	#[serde(skip)]
	pub role: Role,
}
impl_entity!(Player);

impl Player {
	pub fn new(name: impl Into<String>) -> Player {
		Player {
			id: None,
			name: name.into(),
			color: PlayerColor::default(),
			role: Role::default(),
		}
	}

	pub fn with_color(name: impl Into<String>, color: PlayerColor) -> Player {
		Player {
			color,
			..Player::new(name)
		}
	}
}

#[derive(Default, Serialize, Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct Players {
	map: IndexMap<Uid, Player>,
}

impl EntityList for Players {
	impl_default_entitylist!(Player);
	fn sort(&mut self) {
		self.map.sort_by(|_, a, _, b| a.name.cmp(&b.name));
	}
}

impl Players {
	pub fn name_taken(&self, name: &str) -> bool {
		self.map
			.values()
			.any(|player| player.name.eq_ignore_ascii_case(name))
	}

	/// First palette entry no one uses yet. Falls back to gray when the
	/// roster is bigger than the palette.
	pub fn free_color(&self) -> PlayerColor {
		PlayerColor::ALL
			.iter()
			.copied()
			.find(|color| !self.color_taken(*color))
			.unwrap_or(PlayerColor::Gray)
	}

	pub fn color_taken(&self, color: PlayerColor) -> bool {
		self.map.values().any(|player| player.color == color)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_checked_case_insensitively() {
		let mut players = Players::default();
		players.push(Player::new("Alice"));
		assert!(players.name_taken("alice"));
		assert!(players.name_taken("ALICE"));
		assert!(!players.name_taken("Bob"));
	}

	#[test]
	fn colors_are_handed_out_in_palette_order() {
		let mut players = Players::default();
		assert_eq!(players.free_color(), PlayerColor::Red);
		players.push(Player::with_color("Alice", PlayerColor::Red));
		assert_eq!(players.free_color(), PlayerColor::Green);
		players.push(Player::with_color("Bob", PlayerColor::Green));
		assert_eq!(players.free_color(), PlayerColor::Yellow);
	}

	#[test]
	fn roster_stays_sorted_by_name() {
		let mut players = Players::default();
		players.push(Player::new("Carol"));
		players.push(Player::new("Alice"));
		players.push(Player::new("Bob"));
		let names: Vec<&str> = players.iter().map(|(_, p)| p.name.as_str()).collect();
		assert_eq!(names, ["Alice", "Bob", "Carol"]);
	}

	#[test]
	fn role_survives_clone_but_not_serialization() {
		let mut players = Players::default();
		let id = players.push(Player::new("Alice"));
		players.get_mut(id).unwrap().role = crate::role::Role::Impostor;

		let cloned = players.clone();
		assert_eq!(cloned.get(id).unwrap().role, crate::role::Role::Impostor);

		let json = serde_json::to_string(&players).unwrap();
		let restored: Players = serde_json::from_str(&json).unwrap();
		assert_eq!(restored.get(id).unwrap().role, crate::role::Role::Civilian);
	}
}
