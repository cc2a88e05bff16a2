use crate::config::GameConfig;
use crate::entity::EntityList;
use crate::id::Uid;
use crate::package::{default_packages, Packages};
use crate::player::Players;
use anyhow::Result;
use serde::{Deserialize, Serialize};

const DB_PATH: &str = "impostor.json";

#[derive(Default, Serialize, Deserialize, Debug)]
struct StoreData {
	players: Players,
	packages: Packages,
	selected: Vec<Uid>,
	config: GameConfig,
}

/// The app's whole persistent state, owned and passed around explicitly.
/// Loaded from and saved to a serde_json db next to the binary.
pub struct Store {
	data: StoreData,
}

impl Store {
	pub fn new() -> Result<Store> {
		let file_contents = std::fs::read_to_string(DB_PATH);
		let data = if let Ok(json) =
			file_contents.map_err(|e| log::info!("{} could not be read: {}", DB_PATH, e))
		{
			match serde_json::from_str(&json) {
				Ok(data) => {
					log::debug!("Read from the db: {:#?}", data);
					data
				}
				Err(e) => {
					log::error!("The database is corrupted: {}", e);
					return Err(e.into());
				}
			}
		} else {
			// first run: seed the built-in packages and select them all
			let packages = default_packages();
			let selected = packages.ids();
			StoreData {
				players: Players::default(),
				packages,
				selected,
				config: GameConfig::default(),
			}
		};

		Ok(Store { data })
	}

	pub fn players(&self) -> &Players {
		&self.data.players
	}

	pub fn players_mut(&mut self) -> &mut Players {
		&mut self.data.players
	}

	pub fn packages(&self) -> &Packages {
		&self.data.packages
	}

	pub fn packages_mut(&mut self) -> &mut Packages {
		&mut self.data.packages
	}

	pub fn config(&self) -> &GameConfig {
		&self.data.config
	}

	pub fn config_mut(&mut self) -> &mut GameConfig {
		&mut self.data.config
	}

	pub fn selected(&self) -> &[Uid] {
		&self.data.selected
	}

	pub fn is_selected(&self, id: Uid) -> bool {
		self.data.selected.contains(&id)
	}

	pub fn toggle_selected(&mut self, id: Uid) {
		if let Some(num) = self.data.selected.iter().position(|&x| x == id) {
			self.data.selected.remove(num);
		} else if self.data.packages.get(id).is_some() {
			self.data.selected.push(id);
		}
	}

	pub fn remove_package(&mut self, id: Uid) {
		self.data.packages.remove(id);
		self.data.selected.retain(|&x| x != id);
	}

	pub fn save(&self) -> Result<()> {
		log::debug!("Saving game data to the db");
		std::fs::write(DB_PATH, serde_json::to_string(&self.data)?).map_err(|e| {
			log::error!("Error saving game data to the db: {}", e);
			e
		})?;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::player::Player;

	fn fresh_store() -> Store {
		let packages = default_packages();
		let selected = packages.ids();
		Store {
			data: StoreData {
				players: Players::default(),
				packages,
				selected,
				config: GameConfig::default(),
			},
		}
	}

	#[test]
	fn toggling_selection() {
		let mut store = fresh_store();
		let id = store.packages().ids()[0];
		assert!(store.is_selected(id));
		store.toggle_selected(id);
		assert!(!store.is_selected(id));
		store.toggle_selected(id);
		assert!(store.is_selected(id));
	}

	#[test]
	fn unknown_packages_cant_be_selected() {
		let mut store = fresh_store();
		store.toggle_selected(Uid(999));
		assert!(!store.is_selected(Uid(999)));
	}

	#[test]
	fn removing_a_package_deselects_it() {
		let mut store = fresh_store();
		let id = store.packages().ids()[0];
		store.remove_package(id);
		assert!(store.packages().get(id).is_none());
		assert!(!store.is_selected(id));
	}

	#[test]
	fn store_data_round_trips_through_json() {
		let mut store = fresh_store();
		store.players_mut().push(Player::new("Alice"));
		store.config_mut().impostors = 2;

		let json = serde_json::to_string(&store.data).unwrap();
		let restored: StoreData = serde_json::from_str(&json).unwrap();
		assert_eq!(restored.players.len(), 1);
		assert_eq!(restored.packages.len(), store.packages().len());
		assert_eq!(restored.selected, store.data.selected);
		assert_eq!(restored.config.impostors, 2);
	}
}
