use crate::ui::{term::Term, Ui};
use anyhow::Result;
use impostor::{
	action_enums::{
		MainMenuAction, PackagesAction, PairAction, RevealAction, RosterAction, SettingsAction,
		VoteAction,
	},
	config::{MAX_IMPOSTORS, MAX_PLAYERS, MAX_ROUND_MINS, MIN_IMPOSTORS, MIN_ROUND_MINS},
	entity::EntityList,
	game::GameState,
	id::Uid,
	package::WordPackage,
	player::Player,
	reveal::{RevealFlow, RevealStep},
	role::Role,
	round::{Outcome, Round},
	store::Store,
	timer::Countdown,
};
use rand::thread_rng;

pub fn run() -> Result<()> {
	let ui = Term::new()?;
	let mut store = Store::new()?;

	loop {
		match ui.draw_main_menu(&store)? {
			MainMenuAction::Play => play(&ui, &store)?,
			MainMenuAction::EditRoster => edit_roster(&ui, &mut store)?,
			MainMenuAction::EditPackages => edit_packages(&ui, &mut store)?,
			MainMenuAction::Settings => edit_settings(&ui, &mut store)?,
			MainMenuAction::Quit => break,
		}
	}

	store.save()
}

fn play(ui: &impl Ui, store: &Store) -> Result<()> {
	let game = match GameState::setup(
		store.players(),
		store.packages(),
		store.selected(),
		store.config(),
		&mut thread_rng(),
	) {
		Ok(game) => game,
		// a configuration error: tell the user and refuse to start
		Err(e) => {
			ui.messagebox(e.to_string())?;
			return Ok(());
		}
	};

	let mut flow = RevealFlow::new(game.order.clone())?;
	while let Some(id) = flow.current() {
		let player = game.players.get(id).unwrap();
		let action = match flow.step() {
			RevealStep::Hidden(_) => ui.draw_turn_hidden(player)?,
			RevealStep::Revealed(_) => {
				ui.draw_turn_revealed(player, game.secret_for(player.role))?
			}
			RevealStep::Done => unreachable!(),
		};
		match action {
			RevealAction::Proceed => {
				flow.advance();
			}
			RevealAction::Quit => {
				if ui.messagebox_yn("Abandon the game?")? {
					return Ok(());
				}
			}
		}
	}

	ui.messagebox("Everyone has seen their word. Let the discussion begin!")?;

	let mut round = Round::new(game.players.clone());
	let countdown = Countdown::start(game.config.round_secs);
	let outcome = loop {
		match ui.draw_discussion(&round, &countdown)? {
			VoteAction::Eliminate(num) => {
				let (id, name) = match round.active().get_by_index(num) {
					Some((id, player)) => (*id, player.name.clone()),
					None => continue,
				};
				if !ui.messagebox_yn(format!(
					"Vote {} out? There's no coming back!",
					name.to_uppercase()
				))? {
					continue;
				}

				let eliminated = round.eliminate(id)?;
				ui.messagebox(format!(
					"{} was {}",
					eliminated.name,
					match eliminated.role {
						Role::Impostor => "an IMPOSTOR",
						Role::Civilian => "a CIVILIAN",
					}
				))?;

				match round.outcome() {
					Outcome::Ongoing => (),
					outcome => break outcome,
				}
			}
			VoteAction::Quit => {
				if ui.messagebox_yn("Abandon the game?")? {
					return Ok(());
				}
			}
		}
	};

	log::info!("Game over: {}", outcome);
	ui.draw_game_over(outcome, round.active())
}

fn edit_roster(ui: &impl Ui, store: &mut Store) -> Result<()> {
	loop {
		match ui.draw_roster_menu(store.players())? {
			RosterAction::Add => {
				if store.players().len() >= MAX_PLAYERS {
					ui.messagebox(format!(
						"No more than {} players are supported",
						MAX_PLAYERS
					))?;
					continue;
				}
				let name = ui.messagebox_with_input_field("New player's name")?;
				let name = name.trim();
				if name.is_empty() {
					continue;
				}
				if store.players().name_taken(name) {
					ui.messagebox("There already is a player with that name")?;
					continue;
				}
				let color = store.players().free_color();
				store.players_mut().push(Player::with_color(name, color));
			}
			RosterAction::Rename(num) => {
				let (id, old_name) = match store.players().get_by_index(num) {
					Some((id, player)) => (*id, player.name.clone()),
					None => continue,
				};
				let name = ui.messagebox_with_input_field("New name")?;
				let name = name.trim().to_string();
				if name.is_empty() {
					continue;
				}
				// renaming a player to themselves is fine
				if !old_name.eq_ignore_ascii_case(&name) && store.players().name_taken(&name) {
					ui.messagebox("There already is a player with that name")?;
					continue;
				}
				log::debug!("Renaming player #{}: {} -> {}", id, old_name, name);
				if let Some(player) = store.players_mut().get_mut(id) {
					player.name = name;
				}
				store.players_mut().sort();
			}
			RosterAction::Recolor(num) => {
				let (id, current) = match store.players().get_by_index(num) {
					Some((id, player)) => (*id, player.color),
					None => continue,
				};
				if let Some(color) = ui.pick_color(store.players(), current)? {
					if let Some(player) = store.players_mut().get_mut(id) {
						player.color = color;
					}
				}
			}
			RosterAction::Delete(num) => {
				let (id, name) = match store.players().get_by_index(num) {
					Some((id, player)) => (*id, player.name.clone()),
					None => continue,
				};
				if ui.messagebox_yn(format!("Remove {}?", name))? {
					store.players_mut().remove(id);
				}
			}
			RosterAction::Quit => break,
		}
	}

	Ok(())
}

fn edit_packages(ui: &impl Ui, store: &mut Store) -> Result<()> {
	loop {
		match ui.draw_packages_menu(store)? {
			PackagesAction::ToggleSelected(num) => {
				if let Some((id, _)) = store.packages().get_by_index(num) {
					let id = *id;
					store.toggle_selected(id);
				}
			}
			PackagesAction::Add => {
				let name = ui.messagebox_with_input_field("New package's name")?;
				let name = name.trim();
				if name.is_empty() {
					continue;
				}
				if store.packages().name_taken(name) {
					ui.messagebox("There already is a package with that name")?;
					continue;
				}
				let id = store.packages_mut().push(WordPackage::new(name));
				// a brand new package is most likely meant to be played with
				store.toggle_selected(id);
				edit_package(ui, store, id)?;
			}
			PackagesAction::Edit(num) => {
				if let Some((id, _)) = store.packages().get_by_index(num) {
					let id = *id;
					edit_package(ui, store, id)?;
				}
			}
			PackagesAction::Delete(num) => {
				let (id, name) = match store.packages().get_by_index(num) {
					Some((id, package)) => (*id, package.name.clone()),
					None => continue,
				};
				if ui.messagebox_yn(format!("Delete the package \"{}\"?", name))? {
					store.remove_package(id);
				}
			}
			PackagesAction::Quit => break,
		}
	}

	Ok(())
}

fn edit_package(ui: &impl Ui, store: &mut Store, id: Uid) -> Result<()> {
	loop {
		let package = match store.packages().get(id) {
			Some(package) => package,
			None => break,
		};
		match ui.draw_package_editor(package)? {
			PairAction::Add => {
				let word = ui.messagebox_with_input_field("The secret word")?;
				let word = word.trim().to_string();
				if word.is_empty() {
					continue;
				}
				let clue = ui.messagebox_with_input_field("The clue impostors get")?;
				let clue = clue.trim().to_string();
				if clue.is_empty() {
					continue;
				}
				if let Some(package) = store.packages_mut().get_mut(id) {
					if package.words.insert(word.clone(), clue).is_some() {
						ui.messagebox(format!("Replaced the old clue for \"{}\"", word))?;
					}
				}
			}
			PairAction::Delete(num) => {
				if let Some(package) = store.packages_mut().get_mut(id) {
					let word = package.words.get_index(*num).map(|(word, _)| word.clone());
					if let Some(word) = word {
						package.words.shift_remove(&word);
					}
				}
			}
			PairAction::Quit => break,
		}
	}

	Ok(())
}

fn edit_settings(ui: &impl Ui, store: &mut Store) -> Result<()> {
	loop {
		match ui.draw_settings_menu(store.config())? {
			SettingsAction::SetImpostors => {
				let options: Vec<String> = (MIN_IMPOSTORS..=MAX_IMPOSTORS)
					.map(|n| n.to_string())
					.collect();
				if let Some(num) =
					ui.messagebox_with_options("How many impostors?", &options, true)?
				{
					store.config_mut().impostors = MIN_IMPOSTORS + *num;
				}
			}
			SettingsAction::SetRoundLength => {
				let input = ui.messagebox_with_input_field(format!(
					"Discussion time in minutes ({}-{})",
					MIN_ROUND_MINS, MAX_ROUND_MINS
				))?;
				let input = input.trim();
				if input.is_empty() {
					continue;
				}
				match input.parse::<u32>() {
					Ok(mins) if (MIN_ROUND_MINS..=MAX_ROUND_MINS).contains(&mins) => {
						store.config_mut().round_secs = mins * 60;
					}
					_ => {
						ui.messagebox(format!(
							"\"{}\" is not a number of minutes between {} and {}",
							input, MIN_ROUND_MINS, MAX_ROUND_MINS
						))?;
					}
				}
			}
			SettingsAction::ToggleClues => {
				let clues_enabled = !store.config().clues_enabled;
				store.config_mut().clues_enabled = clues_enabled;
			}
			SettingsAction::GoBack => break,
		}
	}

	Ok(())
}
