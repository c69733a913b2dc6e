use super::{Rating, RecordId, Store, StoreDraft, Table, User, UserDraft, UserRole};
use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserSaved {
	Added(RecordId),
	Updated(RecordId),
}
impl UserSaved {
	pub fn message(self) -> &'static str {
		match self {
			Self::Added(_) => "User added successfully!",
			Self::Updated(_) => "User updated successfully!",
		}
	}
}

/// Everything the admin dashboard holds. Nothing here outlives the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
	pub users: Table<User>,
	pub stores: Table<Store>,
	/// `None` shows every user.
	pub role_filter: Option<UserRole>,
	/// The user modal is open while this is set.
	pub user_editor: Option<UserDraft>,
	/// The store modal is open while this is set.
	pub store_editor: Option<StoreDraft>,
}
impl Default for Dashboard {
	fn default() -> Self {
		Self {
			users: Table::seeded(User::seed()),
			stores: Table::seeded(Store::seed()),
			role_filter: None,
			user_editor: None,
			store_editor: None,
		}
	}
}

impl Dashboard {
	pub fn filtered_users(&self) -> impl Iterator<Item = &User> + '_ {
		let filter = self.role_filter;
		self.users.iter().filter(move |user| filter.map_or(true, |role| user.role == role))
	}

	pub fn open_user_editor(&mut self) {
		self.user_editor = Some(UserDraft::default());
	}

	/// Loads the user into the modal. Returns false if no user has that id.
	pub fn begin_edit(&mut self, id: RecordId) -> bool {
		let Some(user) = self.users.get(id) else {
			return false;
		};
		self.user_editor = Some(UserDraft::from(user));
		true
	}

	pub fn add_or_update_user(&mut self, draft: UserDraft) -> Result<UserSaved, ValidationError> {
		let role = match draft.role {
			Some(role) if !draft.name.is_empty() => role,
			_ => return Err(ValidationError::IncompleteDraft),
		};
		let saved = match draft.id {
			Some(id) => {
				let replaced = self.users.replace(User {
					id,
					name: draft.name,
					role,
				});
				if !replaced {
					log::warn!(target: "dashboard", "User {id} was removed before the edit was saved");
				}
				UserSaved::Updated(id)
			}
			None => UserSaved::Added(self.users.insert_with(|id| User {
				id,
				name: draft.name,
				role,
			})),
		};
		self.user_editor = None;
		Ok(saved)
	}

	/// Commits the open user modal. The draft stays open when it is rejected.
	pub fn save_user_editor(&mut self) -> Result<UserSaved, ValidationError> {
		let draft = self.user_editor.clone().unwrap_or_default();
		self.add_or_update_user(draft)
	}

	pub fn delete_user(&mut self, id: RecordId) -> Option<User> {
		self.users.remove(id)
	}

	pub fn open_store_editor(&mut self) {
		self.store_editor = Some(StoreDraft::default());
	}

	/// Clicking star `count` in the store modal.
	pub fn rate_draft(&mut self, count: u8) {
		if let Some(draft) = &mut self.store_editor {
			draft.rating = Rating::stars(count);
		}
	}

	pub fn add_store(&mut self, draft: StoreDraft) -> Result<RecordId, ValidationError> {
		if draft.name.is_empty() || draft.owner.is_empty() {
			return Err(ValidationError::IncompleteDraft);
		}
		let id = self.stores.insert_with(|id| Store {
			id,
			name: draft.name,
			owner: draft.owner,
			rating: draft.rating,
		});
		self.store_editor = None;
		Ok(id)
	}

	pub fn save_store_editor(&mut self) -> Result<RecordId, ValidationError> {
		let draft = self.store_editor.clone().unwrap_or_default();
		self.add_store(draft)
	}

	pub fn delete_store(&mut self, id: RecordId) -> Option<Store> {
		self.stores.remove(id)
	}

	pub fn close_editors(&mut self) {
		self.user_editor = None;
		self.store_editor = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Record;

	fn user_ids(dashboard: &Dashboard) -> Vec<RecordId> {
		dashboard.users.iter().map(Record::id).collect()
	}

	fn draft(name: &str, role: Option<UserRole>) -> UserDraft {
		UserDraft {
			id: None,
			name: name.into(),
			role,
		}
	}

	#[test]
	fn adding_user_without_role_is_rejected() {
		let mut dashboard = Dashboard::default();
		dashboard.open_user_editor();
		let result = dashboard.add_or_update_user(draft("X", None));
		assert_eq!(result, Err(ValidationError::IncompleteDraft));
		assert_eq!(dashboard.users.len(), 3);
		assert!(dashboard.user_editor.is_some());

		let result = dashboard.add_or_update_user(draft("", Some(UserRole::User)));
		assert_eq!(result, Err(ValidationError::IncompleteDraft));
	}

	#[test]
	fn adding_user_appends_next_id_and_closes_editor() {
		let mut dashboard = Dashboard::default();
		dashboard.open_user_editor();
		let result = dashboard.add_or_update_user(draft("X", Some(UserRole::User)));
		assert_eq!(result, Ok(UserSaved::Added(4)));
		assert_eq!(user_ids(&dashboard), vec![1, 2, 3, 4]);
		assert_eq!(dashboard.users.get(4).map(|u| u.name.as_str()), Some("X"));
		assert_eq!(dashboard.user_editor, None);
	}

	#[test]
	fn deleting_user_keeps_remaining_order() {
		let mut dashboard = Dashboard::default();
		assert_eq!(dashboard.delete_user(2).map(|u| u.name), Some("Alice Smith".to_owned()));
		assert_eq!(user_ids(&dashboard), vec![1, 3]);
		assert_eq!(dashboard.delete_user(2), None);
		assert_eq!(user_ids(&dashboard), vec![1, 3]);
	}

	#[test]
	fn add_after_delete_does_not_duplicate_ids() {
		let mut dashboard = Dashboard::default();
		dashboard.delete_user(1);
		let saved = dashboard.add_or_update_user(draft("X", Some(UserRole::Admin))).unwrap();
		assert_eq!(saved, UserSaved::Added(4));
		assert_eq!(user_ids(&dashboard), vec![2, 3, 4]);
	}

	#[test]
	fn editing_user_replaces_in_place() {
		let mut dashboard = Dashboard::default();
		assert!(dashboard.begin_edit(1));
		let editor = dashboard.user_editor.as_mut().unwrap();
		assert_eq!(editor.name, "John Doe");
		editor.name = "Y".into();
		editor.role = Some(UserRole::Admin);

		assert_eq!(dashboard.save_user_editor(), Ok(UserSaved::Updated(1)));
		let users: Vec<_> = dashboard.users.iter().map(|u| (u.id, u.name.as_str(), u.role)).collect();
		assert_eq!(
			users,
			vec![
				(1, "Y", UserRole::Admin),
				(2, "Alice Smith", UserRole::StoreOwner),
				(3, "Bob Johnson", UserRole::Admin),
			]
		);
		assert_eq!(dashboard.user_editor, None);
	}

	#[test]
	fn editing_unknown_user_does_not_open_editor() {
		let mut dashboard = Dashboard::default();
		assert!(!dashboard.begin_edit(42));
		assert_eq!(dashboard.user_editor, None);
	}

	#[test]
	fn saving_edit_of_deleted_user_changes_nothing() {
		let mut dashboard = Dashboard::default();
		dashboard.begin_edit(3);
		dashboard.delete_user(3);
		assert_eq!(dashboard.save_user_editor(), Ok(UserSaved::Updated(3)));
		assert_eq!(user_ids(&dashboard), vec![1, 2]);
	}

	#[test]
	fn filter_selects_matching_role() {
		let mut dashboard = Dashboard::default();
		dashboard.role_filter = Some(UserRole::StoreOwner);
		let names: Vec<_> = dashboard.filtered_users().map(|u| u.name.as_str()).collect();
		assert_eq!(names, vec!["Alice Smith"]);

		dashboard.role_filter = None;
		let all: Vec<_> = dashboard.filtered_users().cloned().collect();
		assert_eq!(all, User::seed());
		assert_eq!(dashboard.users.len(), 3);
	}

	#[test]
	fn adding_store_requires_name_and_owner() {
		let mut dashboard = Dashboard::default();
		dashboard.open_store_editor();
		let missing_owner = StoreDraft {
			name: "Corner Shop".into(),
			..Default::default()
		};
		assert_eq!(dashboard.add_store(missing_owner), Err(ValidationError::IncompleteDraft));
		assert_eq!(dashboard.stores.len(), 2);
		assert!(dashboard.store_editor.is_some());
	}

	#[test]
	fn store_rating_comes_from_clicked_star() {
		let mut dashboard = Dashboard::default();
		dashboard.open_store_editor();
		assert_eq!(dashboard.store_editor.as_ref().map(|d| d.rating), Some(Rating::stars(5)));
		{
			let editor = dashboard.store_editor.as_mut().unwrap();
			editor.name = "Corner Shop".into();
			editor.owner = "Alice Smith".into();
		}
		dashboard.rate_draft(2);
		dashboard.rate_draft(3);

		assert_eq!(dashboard.save_store_editor(), Ok(3));
		let store = dashboard.stores.get(3).unwrap();
		assert_eq!(store.rating.filled_stars(), 3);
		assert_eq!(dashboard.store_editor, None);

		dashboard.open_store_editor();
		assert_eq!(dashboard.store_editor, Some(StoreDraft::default()));
	}

	#[test]
	fn deleting_store_is_a_no_op_when_absent() {
		let mut dashboard = Dashboard::default();
		assert!(dashboard.delete_store(1).is_some());
		assert!(dashboard.delete_store(1).is_none());
		let names: Vec<_> = dashboard.stores.iter().map(|s| s.name.as_str()).collect();
		assert_eq!(names, vec!["Gadget Hub"]);
	}

	#[test]
	fn closing_editors_discards_drafts() {
		let mut dashboard = Dashboard::default();
		dashboard.begin_edit(2);
		dashboard.open_store_editor();
		dashboard.close_editors();
		assert_eq!(dashboard.user_editor, None);
		assert_eq!(dashboard.store_editor, None);
		assert_eq!(dashboard, Dashboard::default());
	}
}
