use crate::id::OrderNum;

pub enum MainMenuAction {
	Play,
	EditRoster,
	EditPackages,
	Settings,
	Quit,
}

pub enum SettingsAction {
	SetImpostors,
	SetRoundLength,
	ToggleClues,
	GoBack,
}

pub enum RosterAction {
	Add,
	Rename(OrderNum),
	Recolor(OrderNum),
	Delete(OrderNum),
	Quit,
}

pub enum PackagesAction {
	ToggleSelected(OrderNum),
	Add,
	Edit(OrderNum),
	Delete(OrderNum),
	Quit,
}

pub enum PairAction {
	Add,
	Delete(OrderNum),
	Quit,
}

pub enum RevealAction {
	Proceed,
	Quit,
}

pub enum VoteAction {
	Eliminate(OrderNum),
	Quit,
}
