use impostor::id::OrderNum;
use tui::widgets::ListState;

/// Wrapping selection helpers on top of tui's ListState.
pub trait ListStateExt {
	fn next(&mut self, len: usize) -> Option<usize>;
	fn prev(&mut self, len: usize) -> Option<usize>;
	fn selected_onum(&self) -> Option<OrderNum>;
	fn select_onum(&mut self, num: Option<OrderNum>);
}

impl ListStateExt for ListState {
	fn next(&mut self, len: usize) -> Option<usize> {
		let next_num = if len == 0 {
			None
		} else {
			match self.selected() {
				Some(num) => Some((num + 1) % len),
				None => Some(0),
			}
		};

		self.select(next_num);
		next_num
	}

	fn prev(&mut self, len: usize) -> Option<usize> {
		let prev_num = if len == 0 {
			None
		} else {
			match self.selected() {
				Some(0) => Some(len - 1),
				Some(num) => Some(num - 1),
				None => Some(0),
			}
		};

		self.select(prev_num);
		prev_num
	}

	fn selected_onum(&self) -> Option<OrderNum> {
		self.selected().map(Into::into)
	}

	fn select_onum(&mut self, num: Option<OrderNum>) {
		self.select(num.map(|x| *x))
	}
}
