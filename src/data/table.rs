pub type RecordId = u32;

pub trait Record {
	fn id(&self) -> RecordId;
}

/// An ordered list of records whose ids come from a counter that only ever grows,
/// so an id is never handed out twice even after deletions.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<T> {
	rows: Vec<T>,
	next_id: RecordId,
}
impl<T> Default for Table<T> {
	fn default() -> Self {
		Self {
			rows: Vec::new(),
			next_id: 1,
		}
	}
}
impl<T: Record> Table<T> {
	pub fn seeded(rows: Vec<T>) -> Self {
		let next_id = rows.iter().map(Record::id).max().map_or(1, |id| id + 1);
		Self { rows, next_id }
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.rows.iter()
	}

	pub fn get(&self, id: RecordId) -> Option<&T> {
		self.rows.iter().find(|row| row.id() == id)
	}

	/// Appends the record built from the next free id.
	pub fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
		let id = self.next_id;
		self.next_id += 1;
		self.rows.push(build(id));
		id
	}

	/// Swaps in `row` where the record with the same id sits. Returns false if there is none.
	pub fn replace(&mut self, row: T) -> bool {
		match self.rows.iter_mut().find(|existing| existing.id() == row.id()) {
			Some(existing) => {
				*existing = row;
				true
			}
			None => false,
		}
	}

	pub fn remove(&mut self, id: RecordId) -> Option<T> {
		let idx = self.rows.iter().position(|row| row.id() == id)?;
		Some(self.rows.remove(idx))
	}
}
