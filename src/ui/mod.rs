pub mod list_state_ext;
pub mod term;

use anyhow::Result;
use impostor::{
	action_enums::{
		MainMenuAction, PackagesAction, PairAction, RevealAction, RosterAction, SettingsAction,
		VoteAction,
	},
	config::GameConfig,
	package::WordPackage,
	player::{Player, PlayerColor, Players},
	round::{Outcome, Round},
	store::Store,
	timer::Countdown,
};

pub trait Ui {
	fn draw_main_menu(&self, store: &Store) -> Result<MainMenuAction>;
	fn draw_settings_menu(&self, config: &GameConfig) -> Result<SettingsAction>;

	fn draw_roster_menu(&self, players: &Players) -> Result<RosterAction>;
	fn draw_packages_menu(&self, store: &Store) -> Result<PackagesAction>;
	fn draw_package_editor(&self, package: &WordPackage) -> Result<PairAction>;

	/// The hand-off screen: the named player takes the device, their word
	/// still covered.
	fn draw_turn_hidden(&self, player: &Player) -> Result<RevealAction>;
	/// The uncovered screen: role plus whatever `secret` the role gets to
	/// see, waiting for the device to be passed on.
	fn draw_turn_revealed(&self, player: &Player, secret: Option<&str>) -> Result<RevealAction>;

	fn draw_discussion(&self, round: &Round, countdown: &Countdown) -> Result<VoteAction>;
	fn draw_game_over(&self, outcome: Outcome, survivors: &Players) -> Result<()>;

	fn pick_color(&self, players: &Players, current: PlayerColor) -> Result<Option<PlayerColor>>;

	fn messagebox_with_options(
		&self,
		desc: impl AsRef<str>,
		options: &[impl AsRef<str>],
		is_vertical: bool,
	) -> Result<Option<impostor::id::OrderNum>>;
	fn messagebox_with_input_field(&self, desc: impl AsRef<str>) -> Result<String>;
	fn messagebox_yn(&self, desc: impl AsRef<str>) -> Result<bool>;
	fn messagebox(&self, desc: impl AsRef<str>) -> Result<()>;
}
