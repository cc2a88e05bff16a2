use crate::entity::{Entity, EntityList};
use crate::id::Uid;
use crate::impl_default_entitylist;
use crate::impl_entity;
use anyhow::{bail, Result};
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The one (word, clue) combination a whole game is played with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WordPair {
	pub word: String,
	pub clue: String,
}

#[derive(Default, Clone, Serialize, Deserialize, Debug)]
pub struct WordPackage {
	id: Option<Uid>,
	pub name: String,
	// secret word -> the clue impostors get instead
	pub words: IndexMap<String, String>,
}
impl_entity!(WordPackage);

impl WordPackage {
	pub fn new(name: impl Into<String>) -> WordPackage {
		WordPackage {
			id: None,
			name: name.into(),
			words: IndexMap::new(),
		}
	}

	pub fn draw_pair(&self, rng: &mut impl Rng) -> Result<WordPair> {
		if self.words.is_empty() {
			bail!("The word package \"{}\" has no words in it", self.name);
		}

		let num = rng.gen_range(0..self.words.len());
		let (word, clue) = self.words.get_index(num).unwrap();
		Ok(WordPair {
			word: word.clone(),
			clue: clue.clone(),
		})
	}
}

#[derive(Default, Serialize, Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct Packages {
	map: IndexMap<Uid, WordPackage>,
}

impl EntityList for Packages {
	impl_default_entitylist!(WordPackage);
	fn sort(&mut self) {
		self.map.sort_by(|_, a, _, b| a.name.cmp(&b.name));
	}
}

impl Packages {
	pub fn name_taken(&self, name: &str) -> bool {
		self.map
			.values()
			.any(|package| package.name.eq_ignore_ascii_case(name))
	}
}

/// The packages every fresh install starts out with, translated over from
/// the original party game's data set.
pub fn default_packages() -> Packages {
	let mut packages = Packages::default();

	let mut nature = WordPackage::new("Nature");
	for (word, clue) in [
		("Photosynthesis", "Chlorophyll"),
		("Ecosystem", "Habitat"),
		("Rain", "Clouds"),
		("Tree", "Roots"),
		("Biodiversity", "Life"),
		("Atmosphere", "Air"),
		("Ocean", "Water"),
		("Volcano", "Magma"),
		("Glacier", "Ice"),
		("Desert", "Sand"),
	]
	.iter()
	{
		nature.words.insert(word.to_string(), clue.to_string());
	}
	packages.push(nature);

	let mut video_games = WordPackage::new("Video Games");
	for (word, clue) in [
		("Multiplayer", "Server"),
		("Console", "Controller"),
		("Graphics", "Rendering"),
		("Character", "Avatar"),
		("Quest", "Objective"),
		("Adventure", "Exploration"),
		("E-Sports", "Tournament"),
		("Virtual Reality", "Headset"),
		("Indie", "Developer"),
		("Map", "Navigation"),
	]
	.iter()
	{
		video_games.words.insert(word.to_string(), clue.to_string());
	}
	packages.push(video_games);

	let mut movies = WordPackage::new("Movies & TV");
	for (word, clue) in [
		("Director", "Camera"),
		("Script", "Dialogue"),
		("Premiere", "Billboard"),
		("Sequel", "Original"),
		("Theater", "Stage"),
		("Streaming", "Platform"),
		("Oscar", "Statue"),
		("Soundtrack", "Music"),
		("Special Effects", "CGI"),
		("Documentary", "Reality"),
	]
	.iter()
	{
		movies.words.insert(word.to_string(), clue.to_string());
	}
	packages.push(movies);

	let mut food = WordPackage::new("Food");
	for (word, clue) in [
		("Chef", "Recipe"),
		("Ingredient", "Flavor"),
		("Vegetarian", "Vegetable"),
		("Spices", "Aroma"),
		("Breakfast", "Morning"),
		("Dessert", "Sweet"),
		("Dinner", "Evening"),
		("Marinade", "Meat"),
		("Allergen", "Risk"),
		("Diet", "Health"),
	]
	.iter()
	{
		food.words.insert(word.to_string(), clue.to_string());
	}
	packages.push(food);

	packages
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn small_package() -> WordPackage {
		let mut package = WordPackage::new("Test");
		package.words.insert("Sun".into(), "Light".into());
		package.words.insert("Moon".into(), "Night".into());
		package.words.insert("Star".into(), "Sky".into());
		package
	}

	#[test]
	fn empty_package_fails_fast() {
		let mut rng = StdRng::seed_from_u64(0);
		let package = WordPackage::new("Empty");
		assert!(package.draw_pair(&mut rng).is_err());
	}

	#[test]
	fn drawn_clue_belongs_to_the_drawn_word() {
		let mut rng = StdRng::seed_from_u64(1);
		let package = small_package();
		for _ in 0..50 {
			let pair = package.draw_pair(&mut rng).unwrap();
			assert_eq!(package.words.get(&pair.word), Some(&pair.clue));
		}
	}

	#[test]
	fn draw_is_roughly_uniform() {
		const TRIALS: usize = 9_000;
		let mut rng = StdRng::seed_from_u64(2);
		let package = small_package();
		let mut hits: IndexMap<String, usize> = IndexMap::new();

		for _ in 0..TRIALS {
			let pair = package.draw_pair(&mut rng).unwrap();
			*hits.entry(pair.word).or_insert(0) += 1;
		}

		assert_eq!(hits.len(), 3);
		// expected 3000 each
		for (word, count) in hits {
			assert!(
				(2400..=3600).contains(&count),
				"{} was drawn {} times out of {}",
				word,
				count,
				TRIALS
			);
		}
	}

	#[test]
	fn default_packages_are_usable() {
		let packages = default_packages();
		assert!(!packages.is_empty());
		for (_, package) in packages.iter() {
			assert!(!package.words.is_empty());
		}
		assert!(packages.name_taken("nature"));
	}
}
