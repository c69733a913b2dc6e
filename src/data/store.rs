use super::{Record, RecordId};
use crate::config::{DEFAULT_RATING, MAX_RATING, MIN_RATING};

/// An operator-entered score between one and five stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rating(f32);
impl Rating {
	pub fn new(value: f32) -> Self {
		Self(value.clamp(MIN_RATING as f32, MAX_RATING as f32))
	}

	pub fn stars(count: u8) -> Self {
		Self::new(count as f32)
	}

	pub fn value(self) -> f32 {
		self.0
	}

	/// Number of filled stars to draw; there are no partial stars.
	pub fn filled_stars(self) -> u8 {
		self.0.round() as u8
	}
}
impl Default for Rating {
	fn default() -> Self {
		Self::stars(DEFAULT_RATING)
	}
}
impl std::fmt::Display for Rating {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Store {
	pub id: RecordId,
	pub name: String,
	/// Free text, not checked against the users list.
	pub owner: String,
	pub rating: Rating,
}
impl Record for Store {
	fn id(&self) -> RecordId {
		self.id
	}
}
impl Store {
	pub fn seed() -> Vec<Self> {
		vec![
			Self {
				id: 1,
				name: "Tech Store".into(),
				owner: "Alice Smith".into(),
				rating: Rating::new(4.2),
			},
			Self {
				id: 2,
				name: "Gadget Hub".into(),
				owner: "John Doe".into(),
				rating: Rating::new(3.8),
			},
		]
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreDraft {
	pub name: String,
	pub owner: String,
	pub rating: Rating,
}
