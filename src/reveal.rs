use crate::id::{OrderNum, Uid};
use anyhow::{bail, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealStep {
	/// The player's turn has come up but their word is still covered.
	Hidden(OrderNum),
	/// The word is on screen, waiting for the device to be handed on.
	Revealed(OrderNum),
	Done,
}

/// Walks the turn order during the reveal phase. A single user action
/// drives the whole thing: the first press uncovers the current player's
/// word, the next press covers it back up and moves to the next player.
#[derive(Debug)]
pub struct RevealFlow {
	order: Vec<Uid>,
	step: RevealStep,
}

impl RevealFlow {
	pub fn new(order: Vec<Uid>) -> Result<RevealFlow> {
		if order.is_empty() {
			bail!("Can't reveal roles to an empty table");
		}
		Ok(RevealFlow {
			order,
			step: RevealStep::Hidden(OrderNum(0)),
		})
	}

	pub fn step(&self) -> RevealStep {
		self.step
	}

	/// The player whose turn it currently is, if anyone's.
	pub fn current(&self) -> Option<Uid> {
		match self.step {
			RevealStep::Hidden(num) | RevealStep::Revealed(num) => Some(self.order[*num]),
			RevealStep::Done => None,
		}
	}

	pub fn advance(&mut self) -> RevealStep {
		self.step = match self.step {
			RevealStep::Hidden(num) => RevealStep::Revealed(num),
			RevealStep::Revealed(num) if *num + 1 < self.order.len() => {
				RevealStep::Hidden(OrderNum(*num + 1))
			}
			RevealStep::Revealed(_) | RevealStep::Done => RevealStep::Done,
		};
		self.step
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_order_is_rejected() {
		assert!(RevealFlow::new(Vec::new()).is_err());
	}

	#[test]
	fn walks_the_whole_order() {
		let order = vec![Uid(10), Uid(20), Uid(30)];
		let mut flow = RevealFlow::new(order).unwrap();

		assert_eq!(flow.step(), RevealStep::Hidden(OrderNum(0)));
		assert_eq!(flow.current(), Some(Uid(10)));

		assert_eq!(flow.advance(), RevealStep::Revealed(OrderNum(0)));
		assert_eq!(flow.current(), Some(Uid(10)));

		assert_eq!(flow.advance(), RevealStep::Hidden(OrderNum(1)));
		assert_eq!(flow.current(), Some(Uid(20)));

		flow.advance();
		assert_eq!(flow.advance(), RevealStep::Hidden(OrderNum(2)));
		flow.advance();
		assert_eq!(flow.current(), Some(Uid(30)));

		assert_eq!(flow.advance(), RevealStep::Done);
		assert_eq!(flow.current(), None);
	}

	#[test]
	fn done_is_absorbing() {
		let mut flow = RevealFlow::new(vec![Uid(1)]).unwrap();
		flow.advance();
		flow.advance();
		assert_eq!(flow.step(), RevealStep::Done);
		assert_eq!(flow.advance(), RevealStep::Done);
	}
}
