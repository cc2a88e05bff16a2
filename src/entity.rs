use crate::id::{OrderNum, Uid};
use indexmap::IndexMap;

pub trait Entity {
	fn id(&mut self) -> &mut Option<Uid>;
}

#[macro_export]
macro_rules! impl_entity {
	($i:ident) => {
		impl Entity for $i {
			fn id(&mut self) -> &mut Option<Uid> {
				&mut self.id
			}
		}
	};
}

pub trait EntityList {
	type Entity: Entity;

	fn new(map: IndexMap<Uid, Self::Entity>) -> Self;
	fn get_map(&self) -> &IndexMap<Uid, Self::Entity>;
	fn get_map_mut(&mut self) -> &mut IndexMap<Uid, Self::Entity>;

	fn sort(&mut self);

	fn get(&self, id: Uid) -> Option<&Self::Entity> {
		self.get_map().get(&id)
	}

	fn get_mut(&mut self, id: Uid) -> Option<&mut Self::Entity> {
		self.get_map_mut().get_mut(&id)
	}

	fn get_by_index(&self, num: OrderNum) -> Option<(&Uid, &Self::Entity)> {
		self.get_map().get_index(*num)
	}

	fn get_index_of(&self, id: Uid) -> Option<OrderNum> {
		self.get_map().get_index_of(&id).map(OrderNum)
	}

	fn iter(&self) -> indexmap::map::Iter<Uid, Self::Entity> {
		self.get_map().iter()
	}

	fn ids(&self) -> Vec<Uid> {
		self.get_map().keys().copied().collect()
	}

	fn push(&mut self, new_val: Self::Entity) -> Uid {
		let next_id = match self.get_map().keys().max() {
			Some(num) => *num + 1.into(),
			None => 0.into(),
		};

		self.insert(next_id, new_val);
		next_id
	}

	fn insert(&mut self, id: Uid, mut new_val: Self::Entity) {
		*new_val.id() = Some(id);
		self.get_map_mut().insert(id, new_val);
		self.sort();
	}

	fn remove(&mut self, id: Uid) -> Option<(Uid, Self::Entity)> {
		let removed = self.get_map_mut().remove_entry(&id);
		self.sort();
		removed
	}

	fn clear(&mut self) {
		self.get_map_mut().clear();
	}

	fn len(&self) -> usize {
		self.get_map().len()
	}

	fn is_empty(&self) -> bool {
		self.get_map().is_empty()
	}
}

#[macro_export]
macro_rules! impl_default_entitylist {
	($entity:ident) => {
		type Entity = $entity;

		fn new(map: IndexMap<Uid, Self::Entity>) -> Self {
			Self { map }
		}

		fn get_map(&self) -> &IndexMap<Uid, Self::Entity> {
			&self.map
		}

		fn get_map_mut(&mut self) -> &mut IndexMap<Uid, Self::Entity> {
			&mut self.map
		}
	};
}
