use derive_more::{Add, Deref, Display, From};
use serde::{Deserialize, Serialize};

#[derive(
	Serialize, Deserialize, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, From, Add,
	Display, Deref,
)]
pub struct Uid(pub usize);

#[derive(
	Serialize, Deserialize, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, From, Add,
	Display, Deref,
)]
pub struct OrderNum(pub usize);
