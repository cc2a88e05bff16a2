use crate::ui::list_state_ext::ListStateExt;
use crate::ui::Ui;
use impostor::{
	action_enums::{
		MainMenuAction, PackagesAction, PairAction, RevealAction, RosterAction, SettingsAction,
		VoteAction,
	},
	config::GameConfig,
	entity::EntityList,
	id::OrderNum,
	package::WordPackage,
	player::{Player, PlayerColor, Players},
	role::Role,
	round::{Outcome, Round},
	store::Store,
	timer::{format_mmss, Countdown},
};

use anyhow::Result;
use crossterm::event::{poll as poll_event, read as read_event, Event, KeyCode};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::io::{stdout, Stdout};
use std::time::Duration;
use tui::{
	backend::CrosstermBackend,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style},
	text::{Span, Spans},
	widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
	Terminal,
};

static STYLE_SELECTED: Lazy<Style> =
	Lazy::new(|| Style::default().bg(Color::White).fg(Color::Black));
static STYLE_IMPOSTOR: Lazy<Style> = Lazy::new(|| {
	Style::default()
		.fg(Color::Red)
		.add_modifier(Modifier::BOLD)
});
static STYLE_CIVILIAN: Lazy<Style> = Lazy::new(|| {
	Style::default()
		.fg(Color::Green)
		.add_modifier(Modifier::BOLD)
});

enum StatusBarType {
	Normal,
	Error,
}

fn term_color(color: PlayerColor) -> Color {
	match color {
		PlayerColor::Red => Color::Red,
		PlayerColor::Green => Color::Green,
		PlayerColor::Yellow => Color::Yellow,
		PlayerColor::Blue => Color::Blue,
		PlayerColor::Magenta => Color::Magenta,
		PlayerColor::Cyan => Color::Cyan,
		PlayerColor::White => Color::White,
		PlayerColor::Gray => Color::Gray,
	}
}

pub struct Term {
	term: RefCell<Terminal<CrosstermBackend<Stdout>>>,
}

impl Term {
	pub fn new() -> Result<Term> {
		crossterm::terminal::enable_raw_mode()?;
		Ok(Term {
			term: RefCell::new(Terminal::new(CrosstermBackend::new(stdout()))?),
		})
	}

	fn get_window_size(&self, window: Rect) -> (Rect, Rect) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(10), Constraint::Length(1)].as_ref())
			.split(window);

		(layout[0], layout[1])
	}

	fn stylize_statusbar<'a, T: Into<tui::text::Text<'a>>>(
		text: T,
		sbtype: StatusBarType,
	) -> Paragraph<'a> {
		let style = match sbtype {
			StatusBarType::Normal => Style::default().bg(Color::Gray).fg(Color::Black),
			StatusBarType::Error => Style::default().bg(Color::Red).fg(Color::White),
		};
		Paragraph::new(text.into()).style(style)
	}

	fn get_centered_box(frame: Rect, width: u16, height: u16) -> Rect {
		let offset_x = frame.width.saturating_sub(width) / 2;
		let offset_y = frame.height.saturating_sub(height) / 2;

		let layout_y = Layout::default()
			.direction(Direction::Vertical)
			.constraints(
				[
					Constraint::Length(offset_y),
					Constraint::Length(height),
					Constraint::Length(offset_y),
				]
				.as_ref(),
			)
			.split(frame);

		Layout::default()
			.direction(Direction::Horizontal)
			.constraints(
				[
					Constraint::Length(offset_x),
					Constraint::Length(width),
					Constraint::Length(offset_x),
				]
				.as_ref(),
			)
			.split(layout_y[1])[1]
	}

	fn get_messagebox_text_input_locations(messagebox: Rect) -> (Rect, Rect) {
		let layout_y = Layout::default()
			.direction(Direction::Vertical)
			.constraints(
				[
					Constraint::Length(2), // border + space
					Constraint::Length(1), // the text
					Constraint::Length(1), // space
					Constraint::Length(1), // buttons
					Constraint::Length(2), // space + border
				]
				.as_ref(),
			)
			.split(messagebox);

		let centered = |rect: Rect| {
			// 4 = 2 borders + 2 margins
			Layout::default()
				.direction(Direction::Horizontal)
				.constraints(
					[
						Constraint::Length(2),
						Constraint::Length(messagebox.width.saturating_sub(4)),
						Constraint::Length(2),
					]
					.as_ref(),
				)
				.split(rect)[1]
		};

		(centered(layout_y[1]), centered(layout_y[3]))
	}

	fn messagebox_with_options_immediate(
		&self,
		desc: impl AsRef<str>,
		options: &[impl AsRef<str>],
		selected: Option<OrderNum>,
		is_vertical: bool,
	) -> Result<KeyCode> {
		const OFFSET_BETWEEN_BUTTONS: u16 = 3;
		let desc = desc.as_ref();
		self.term.borrow_mut().clear()?;
		if options.is_empty() {
			panic!("Can't show a dialog with no buttons");
		}

		let width = {
			let desc_width = desc.chars().count() as u16 + 4;
			let button_width = if !is_vertical {
				options
					.iter()
					.map(|item| item.as_ref().chars().count() as u16)
					.sum::<u16>() + OFFSET_BETWEEN_BUTTONS * (options.len() as u16 - 1)
					+ 4
			} else {
				options
					.iter()
					.map(|item| item.as_ref().chars().count() as u16)
					.max()
					.unwrap_or(0) + 4
			};

			desc_width.max(button_width)
		};
		let height = if !is_vertical {
			7
		} else {
			6 + options.len() as u16
		};

		let mut state = ListState::default();
		state.select_onum(selected);
		loop {
			self.term.borrow_mut().draw(|frame| {
				let block_rect = Term::get_centered_box(frame.size(), width, height);
				let (desc_rect, buttons_rect) =
					Term::get_messagebox_text_input_locations(block_rect);

				let block = Block::default().borders(Borders::ALL);
				let desc = Paragraph::new(desc).alignment(Alignment::Center);
				frame.render_widget(block, block_rect);
				frame.render_widget(desc, desc_rect);

				if !is_vertical {
					let mut button_rect = buttons_rect;
					button_rect.x += {
						let all_buttons_width = options
							.iter()
							.map(|item| item.as_ref().chars().count() as u16)
							.sum::<u16>() + OFFSET_BETWEEN_BUTTONS
							* (options.len() as u16 - 1);
						buttons_rect.width.saturating_sub(all_buttons_width) / 2
					};

					for (i, option) in options.iter().enumerate() {
						let button_style = if i == state.selected().unwrap_or(0) {
							*STYLE_SELECTED
						} else {
							Style::default()
						};

						button_rect.width = option.as_ref().chars().count() as u16;
						frame.render_widget(
							Paragraph::new(option.as_ref()).style(button_style),
							button_rect,
						);
						button_rect.x += button_rect.width + OFFSET_BETWEEN_BUTTONS;
					}
				} else {
					for (i, option) in options.iter().enumerate() {
						let button_style = if i == state.selected().unwrap_or(0) {
							*STYLE_SELECTED
						} else {
							Style::default()
						};

						let mut rect = buttons_rect;
						rect.y += i as u16;
						rect.width = option.as_ref().chars().count() as u16;
						frame.render_widget(
							Paragraph::new(option.as_ref()).style(button_style),
							rect,
						);
					}
				}
			})?;

			if let Event::Key(key) = read_event()? {
				return Ok(key.code);
			}
		}
	}

	fn draw_menu(
		&self,
		items: &[impl AsRef<str>],
		statusbar_text: impl AsRef<str>,
	) -> Result<Option<usize>> {
		self.term.borrow_mut().clear()?;

		let mut list_state = ListState::default();
		list_state.select(Some(0));
		loop {
			self.term.borrow_mut().draw(|frame| {
				let longest_len = items
					.iter()
					.map(|item| item.as_ref().chars().count())
					.max()
					.unwrap_or(0);
				let list = List::new(
					items
						.iter()
						.map(|item| ListItem::new(item.as_ref()))
						.collect::<Vec<ListItem>>(),
				)
				.highlight_style(*STYLE_SELECTED);

				let (win_rect, statusbar_rect) = self.get_window_size(frame.size());
				let menu_location = Term::get_centered_box(
					win_rect,
					longest_len as u16 + 4,
					items.len() as u16 + 4,
				);
				frame.render_stateful_widget(list, menu_location, &mut list_state);
				frame.render_widget(
					Term::stylize_statusbar(statusbar_text.as_ref(), StatusBarType::Normal),
					statusbar_rect,
				);
			})?;

			if let Event::Key(key) = read_event()? {
				match key.code {
					KeyCode::Esc => return Ok(None),
					KeyCode::Char(ch) => match ch {
						'1'..='9' => {
							let num = ch.to_digit(10).unwrap() as usize - 1;
							if num < items.len() {
								return Ok(Some(num));
							}
						}
						'q' => return Ok(None),
						_ => (),
					},
					KeyCode::Down => {
						list_state.next(items.len());
					}
					KeyCode::Up => {
						list_state.prev(items.len());
					}
					KeyCode::Enter => {
						if let Some(num) = list_state.selected() {
							return Ok(Some(num));
						}
					}
					_ => (),
				}
			}
		}
	}

	/// A full-window selectable list with a hint statusbar. Selection is
	/// handled in here; everything else is handed back through `on_key`.
	fn draw_list_screen<'a, T>(
		&self,
		title: impl AsRef<str>,
		items: &[ListItem<'a>],
		statusbar: Spans,
		on_key: impl Fn(KeyCode, Option<OrderNum>) -> Option<T>,
	) -> Result<T> {
		let mut list_state = ListState::default();
		list_state.next(items.len());
		self.term.borrow_mut().clear()?;
		loop {
			self.term.borrow_mut().draw(|frame| {
				let (content_rect, statusbar_rect) = self.get_window_size(frame.size());

				let list = List::new(items.to_vec())
					.highlight_symbol(">> ")
					.block(
						Block::default()
							.borders(Borders::ALL)
							.title(title.as_ref().to_string()),
					);
				frame.render_stateful_widget(list, content_rect, &mut list_state);
				frame.render_widget(
					Term::stylize_statusbar(statusbar.clone(), StatusBarType::Normal),
					statusbar_rect,
				);
			})?;

			if let Event::Key(key) = read_event()? {
				match key.code {
					KeyCode::Down => {
						list_state.next(items.len());
					}
					KeyCode::Up => {
						list_state.prev(items.len());
					}
					code => {
						if let Some(action) = on_key(code, list_state.selected_onum()) {
							return Ok(action);
						}
					}
				}
			}
		}
	}

	fn hint_statusbar(hints: &[(&'static str, &'static str)]) -> Spans<'static> {
		static STYLE_UNDERLINED: Lazy<Style> =
			Lazy::new(|| Style::default().add_modifier(Modifier::UNDERLINED));

		let mut spans: Vec<Span> = vec![" ".into()];
		for (i, (key, rest)) in hints.iter().enumerate() {
			if i > 0 {
				spans.push(Span::raw(" | "));
			}
			spans.push(Span::styled(*key, *STYLE_UNDERLINED));
			spans.push(Span::raw(*rest));
		}
		Spans::from(spans)
	}
}

impl Drop for Term {
	fn drop(&mut self) {
		let _ = self.term.borrow_mut().clear();
		let _ = crossterm::terminal::disable_raw_mode();
	}
}

impl Ui for Term {
	fn draw_main_menu(&self, store: &Store) -> Result<MainMenuAction> {
		let items = [
			"Play",
			"Edit players",
			"Word packages",
			"Settings",
			"Save and quit",
		];

		let statusbar_text = format!(
			" impostor v{} | {} players | {} impostors | {} | {} packages selected",
			env!("CARGO_PKG_VERSION"),
			store.players().len(),
			store.config().impostors,
			format_mmss(store.config().round_secs),
			store.selected().len(),
		);

		loop {
			return Ok(match self.draw_menu(&items, statusbar_text.as_str())? {
				Some(0) => MainMenuAction::Play,
				Some(1) => MainMenuAction::EditRoster,
				Some(2) => MainMenuAction::EditPackages,
				Some(3) => MainMenuAction::Settings,
				Some(4) | None => {
					if self.messagebox_yn("Are you sure you want to quit?")? {
						MainMenuAction::Quit
					} else {
						continue;
					}
				}
				_ => unreachable!(),
			});
		}
	}

	fn draw_settings_menu(&self, config: &GameConfig) -> Result<SettingsAction> {
		let items = [
			format!("Impostors: {}", config.impostors),
			format!("Discussion time: {}", format_mmss(config.round_secs)),
			format!(
				"Clues for impostors: {}",
				if config.clues_enabled { "on" } else { "off" }
			),
			"Go back...".to_string(),
		];

		Ok(match self.draw_menu(&items, " Settings")? {
			Some(0) => SettingsAction::SetImpostors,
			Some(1) => SettingsAction::SetRoundLength,
			Some(2) => SettingsAction::ToggleClues,
			Some(3) | None => SettingsAction::GoBack,
			_ => unreachable!(),
		})
	}

	fn draw_roster_menu(&self, players: &Players) -> Result<RosterAction> {
		let items: Vec<ListItem> = players
			.iter()
			.map(|(_, player)| {
				ListItem::new(Span::styled(
					player.name.clone(),
					Style::default().fg(term_color(player.color)),
				))
			})
			.collect();

		let statusbar = Term::hint_statusbar(&[
			("A", "dd"),
			("R", "ename"),
			("C", "olor"),
			("D", "elete"),
			("Q", "uit"),
		]);

		self.draw_list_screen("Players", &items, statusbar, |code, selected| {
			match code {
				KeyCode::Char('a') => Some(RosterAction::Add),
				KeyCode::Char('r') => selected.map(RosterAction::Rename),
				KeyCode::Char('c') => selected.map(RosterAction::Recolor),
				KeyCode::Char('d') | KeyCode::Delete => selected.map(RosterAction::Delete),
				KeyCode::Char('q') | KeyCode::Esc => Some(RosterAction::Quit),
				_ => None,
			}
		})
	}

	fn draw_packages_menu(&self, store: &Store) -> Result<PackagesAction> {
		let items: Vec<ListItem> = store
			.packages()
			.iter()
			.map(|(id, package)| {
				ListItem::new(format!(
					"[{}] {} ({} words)",
					if store.is_selected(*id) { "x" } else { " " },
					package.name,
					package.words.len()
				))
			})
			.collect();

		let statusbar = Term::hint_statusbar(&[
			("Space", ": select"),
			("A", "dd"),
			("E", "dit"),
			("D", "elete"),
			("Q", "uit"),
		]);

		self.draw_list_screen("Word packages", &items, statusbar, |code, selected| {
			match code {
				KeyCode::Char(' ') | KeyCode::Enter => {
					selected.map(PackagesAction::ToggleSelected)
				}
				KeyCode::Char('a') => Some(PackagesAction::Add),
				KeyCode::Char('e') => selected.map(PackagesAction::Edit),
				KeyCode::Char('d') | KeyCode::Delete => selected.map(PackagesAction::Delete),
				KeyCode::Char('q') | KeyCode::Esc => Some(PackagesAction::Quit),
				_ => None,
			}
		})
	}

	fn draw_package_editor(&self, package: &WordPackage) -> Result<PairAction> {
		let items: Vec<ListItem> = package
			.words
			.iter()
			.map(|(word, clue)| ListItem::new(format!("{} / {}", word, clue)))
			.collect();

		let statusbar =
			Term::hint_statusbar(&[("A", "dd a word"), ("D", "elete"), ("Q", "uit")]);

		self.draw_list_screen(
			package.name.as_str(),
			&items,
			statusbar,
			|code, selected| match code {
				KeyCode::Char('a') => Some(PairAction::Add),
				KeyCode::Char('d') | KeyCode::Delete => selected.map(PairAction::Delete),
				KeyCode::Char('q') | KeyCode::Esc => Some(PairAction::Quit),
				_ => None,
			},
		)
	}

	fn draw_turn_hidden(&self, player: &Player) -> Result<RevealAction> {
		self.term.borrow_mut().clear()?;
		loop {
			self.term.borrow_mut().draw(|frame| {
				let rect = Term::get_centered_box(frame.size(), 46, 8);
				let block = Block::default().borders(Borders::ALL).title("Your turn");
				let inner = block.inner(rect);
				frame.render_widget(block, rect);

				let lines = Layout::default()
					.direction(Direction::Vertical)
					.constraints(
						[
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Min(0),
						]
						.as_ref(),
					)
					.split(inner);

				frame.render_widget(
					Paragraph::new(Span::styled(
						format!("Pass the device to {}", player.name.to_uppercase()),
						Style::default().fg(term_color(player.color)),
					))
					.alignment(Alignment::Center),
					lines[1],
				);
				frame.render_widget(
					Paragraph::new("Press Enter once no one else can see the screen")
						.alignment(Alignment::Center),
					lines[3],
				);
			})?;

			if let Event::Key(key) = read_event()? {
				match key.code {
					KeyCode::Esc => return Ok(RevealAction::Quit),
					_ => return Ok(RevealAction::Proceed),
				}
			}
		}
	}

	fn draw_turn_revealed(&self, player: &Player, secret: Option<&str>) -> Result<RevealAction> {
		self.term.borrow_mut().clear()?;
		loop {
			self.term.borrow_mut().draw(|frame| {
				let rect = Term::get_centered_box(frame.size(), 46, 10);
				let block = Block::default()
					.borders(Borders::ALL)
					.title(player.name.as_str());
				let inner = block.inner(rect);
				frame.render_widget(block, rect);

				let lines = Layout::default()
					.direction(Direction::Vertical)
					.constraints(
						[
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Length(1),
							Constraint::Min(0),
						]
						.as_ref(),
					)
					.split(inner);

				let (role_style, role_text) = match player.role {
					Role::Impostor => (*STYLE_IMPOSTOR, "You are the IMPOSTOR"),
					Role::Civilian => (*STYLE_CIVILIAN, "You are a CIVILIAN"),
				};
				frame.render_widget(
					Paragraph::new(Span::styled(role_text, role_style))
						.alignment(Alignment::Center),
					lines[1],
				);

				let secret_text = match (player.role, secret) {
					(Role::Civilian, Some(word)) => format!("The word is: {}", word.to_uppercase()),
					(Role::Impostor, Some(clue)) => format!("Your clue is: {}", clue.to_uppercase()),
					// clues are disabled
					(_, None) => "Listen carefully and blend in".to_string(),
				};
				frame.render_widget(
					Paragraph::new(secret_text).alignment(Alignment::Center),
					lines[3],
				);

				frame.render_widget(
					Paragraph::new("Press Enter and pass the device on")
						.alignment(Alignment::Center),
					lines[5],
				);
			})?;

			if let Event::Key(key) = read_event()? {
				match key.code {
					KeyCode::Esc => return Ok(RevealAction::Quit),
					_ => return Ok(RevealAction::Proceed),
				}
			}
		}
	}

	fn draw_discussion(&self, round: &Round, countdown: &Countdown) -> Result<VoteAction> {
		let mut list_state = ListState::default();
		list_state.next(round.active().len());
		self.term.borrow_mut().clear()?;
		loop {
			self.term.borrow_mut().draw(|frame| {
				let (content_rect, statusbar_rect) = self.get_window_size(frame.size());
				let layout = Layout::default()
					.direction(Direction::Vertical)
					.constraints([Constraint::Length(3), Constraint::Min(5)].as_ref())
					.split(content_rect);

				let timer_block = Block::default().borders(Borders::ALL).title("Discussion");
				let timer_text = if countdown.is_over() {
					Span::styled(
						"00:00 - TIME'S UP, vote someone out",
						Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
					)
				} else {
					Span::raw(format_mmss(countdown.remaining_secs()))
				};
				frame.render_widget(
					Paragraph::new(timer_text)
						.block(timer_block)
						.alignment(Alignment::Center),
					layout[0],
				);

				let items: Vec<ListItem> = round
					.active()
					.iter()
					.map(|(_, player)| {
						ListItem::new(Span::styled(
							player.name.clone(),
							Style::default().fg(term_color(player.color)),
						))
					})
					.collect();
				let list = List::new(items)
					.highlight_symbol(">> ")
					.block(Block::default().borders(Borders::ALL).title("Who goes?"));
				frame.render_stateful_widget(list, layout[1], &mut list_state);

				let statusbar_text = " Enter: eliminate the selected player | Q: abandon the game";
				frame.render_widget(
					Term::stylize_statusbar(
						statusbar_text,
						if countdown.is_over() {
							StatusBarType::Error
						} else {
							StatusBarType::Normal
						},
					),
					statusbar_rect,
				);
			})?;

			// keep ticking the countdown even when no one touches the keys
			if !poll_event(Duration::from_millis(250))? {
				continue;
			}

			if let Event::Key(key) = read_event()? {
				match key.code {
					KeyCode::Down => {
						list_state.next(round.active().len());
					}
					KeyCode::Up => {
						list_state.prev(round.active().len());
					}
					KeyCode::Enter | KeyCode::Char('e') => {
						if let Some(num) = list_state.selected_onum() {
							return Ok(VoteAction::Eliminate(num));
						}
					}
					KeyCode::Char('q') | KeyCode::Esc => return Ok(VoteAction::Quit),
					_ => (),
				}
			}
		}
	}

	fn draw_game_over(&self, outcome: Outcome, survivors: &Players) -> Result<()> {
		let (title, subtitle, style) = match outcome {
			Outcome::CiviliansWin => (
				"CIVILIANS WIN",
				"Every impostor has been voted out.",
				*STYLE_CIVILIAN,
			),
			Outcome::ImpostorsWin => (
				"IMPOSTORS WIN",
				"The impostors are no longer outnumbered.",
				*STYLE_IMPOSTOR,
			),
			// can't happen, the caller only gets here on a terminal outcome
			Outcome::Ongoing => ("GAME OVER", "", Style::default()),
		};

		self.term.borrow_mut().clear()?;
		loop {
			self.term.borrow_mut().draw(|frame| {
				let height = 8 + survivors.len() as u16;
				let rect = Term::get_centered_box(frame.size(), 50, height);
				let block = Block::default().borders(Borders::ALL);
				let inner = block.inner(rect);
				frame.render_widget(block, rect);

				let mut constraints = vec![
					Constraint::Length(1),
					Constraint::Length(1),
					Constraint::Length(1),
					Constraint::Length(1),
				];
				constraints.push(Constraint::Length(survivors.len() as u16));
				constraints.push(Constraint::Min(0));
				let lines = Layout::default()
					.direction(Direction::Vertical)
					.constraints(constraints)
					.split(inner);

				frame.render_widget(
					Paragraph::new(Span::styled(title, style)).alignment(Alignment::Center),
					lines[0],
				);
				frame.render_widget(
					Paragraph::new(subtitle).alignment(Alignment::Center),
					lines[2],
				);

				let survivor_items: Vec<ListItem> = survivors
					.iter()
					.map(|(_, player)| {
						ListItem::new(Spans::from(vec![
							Span::styled(
								player.name.clone(),
								Style::default().fg(term_color(player.color)),
							),
							Span::raw(" - "),
							Span::styled(
								player.role.to_string(),
								match player.role {
									Role::Impostor => *STYLE_IMPOSTOR,
									Role::Civilian => *STYLE_CIVILIAN,
								},
							),
						]))
					})
					.collect();
				frame.render_widget(List::new(survivor_items), lines[4]);
			})?;

			if let Event::Key(_) = read_event()? {
				return Ok(());
			}
		}
	}

	fn pick_color(&self, players: &Players, current: PlayerColor) -> Result<Option<PlayerColor>> {
		let options: Vec<String> = PlayerColor::ALL
			.iter()
			.map(|color| {
				if *color == current {
					format!("{} (current)", color)
				} else if players.color_taken(*color) {
					format!("{} (taken)", color)
				} else {
					color.to_string()
				}
			})
			.collect();

		loop {
			let num = match self.messagebox_with_options("Pick a color", &options, true)? {
				Some(num) => num,
				None => return Ok(None),
			};
			let color = PlayerColor::ALL[*num];
			if color != current && players.color_taken(color) {
				self.messagebox("That color is already in use")?;
				continue;
			}
			return Ok(Some(color));
		}
	}

	fn messagebox_with_options(
		&self,
		desc: impl AsRef<str>,
		options: &[impl AsRef<str>],
		is_vertical: bool,
	) -> Result<Option<OrderNum>> {
		let desc = desc.as_ref();
		let mut state = ListState::default();
		state.select(Some(0));
		loop {
			match self.messagebox_with_options_immediate(
				desc,
				options,
				state.selected_onum(),
				is_vertical,
			)? {
				KeyCode::Enter => return Ok(Some(state.selected_onum().unwrap_or(0.into()))),
				KeyCode::Char(ch) => {
					if let Some(num) = ch.to_digit(10) {
						let num: OrderNum = (num as usize).wrapping_sub(1).into();
						if num < options.len().into() {
							return Ok(Some(num));
						}
					}
				}
				KeyCode::Esc => return Ok(None),
				KeyCode::Right if !is_vertical => {
					state.next(options.len());
				}
				KeyCode::Left if !is_vertical => {
					state.prev(options.len());
				}
				KeyCode::Down if is_vertical => {
					state.next(options.len());
				}
				KeyCode::Up if is_vertical => {
					state.prev(options.len());
				}
				_ => (),
			}
		}
	}

	fn messagebox_with_input_field(&self, desc: impl AsRef<str>) -> Result<String> {
		let desc = desc.as_ref();
		self.term.borrow_mut().clear()?;
		let width = desc.chars().count() as u16 + 4;
		let height = 7;
		let mut buffer = String::new();

		loop {
			self.term.borrow_mut().draw(|frame| {
				let block_rect = Term::get_centered_box(frame.size(), width, height);
				let (desc_rect, input_rect) = Term::get_messagebox_text_input_locations(block_rect);

				let block = Block::default().borders(Borders::ALL);
				let desc = Paragraph::new(desc).alignment(Alignment::Center);
				let input = Paragraph::new(buffer.as_str());
				frame.render_widget(block, block_rect);
				frame.render_widget(desc, desc_rect);
				frame.render_widget(input, input_rect);
			})?;

			if let Event::Key(key) = read_event()? {
				match key.code {
					KeyCode::Char(ch) => buffer.push(ch),
					KeyCode::Backspace => {
						buffer.pop();
					}
					KeyCode::Enter => {
						return Ok(buffer);
					}
					KeyCode::Esc => {
						return Ok(String::new());
					}
					_ => (),
				}
			}
		}
	}

	fn messagebox_yn(&self, desc: impl AsRef<str>) -> Result<bool> {
		Ok(matches!(
			self.messagebox_with_options(desc, &["Yes", "No"], false)?,
			Some(OrderNum(0))
		))
	}

	fn messagebox(&self, desc: impl AsRef<str>) -> Result<()> {
		self.messagebox_with_options(desc.as_ref(), &["OK"], false)?;
		Ok(())
	}
}
