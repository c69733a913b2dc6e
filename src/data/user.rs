use super::{Record, RecordId};

/// The role a managed account holds, as shown in the users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
	User,
	StoreOwner,
	Admin,
}
impl UserRole {
	pub fn all() -> &'static [Self] {
		&[Self::User, Self::StoreOwner, Self::Admin]
	}

	pub fn value(self) -> &'static str {
		match self {
			Self::User => "User",
			Self::StoreOwner => "Store Owner",
			Self::Admin => "Admin",
		}
	}

	pub fn from_value(s: &str) -> Option<Self> {
		Self::all().iter().copied().find(|role| role.value() == s)
	}
}
impl std::fmt::Display for UserRole {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.value())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
	pub id: RecordId,
	pub name: String,
	pub role: UserRole,
}
impl Record for User {
	fn id(&self) -> RecordId {
		self.id
	}
}
impl User {
	pub fn seed() -> Vec<Self> {
		vec![
			Self::new(1, "John Doe", UserRole::User),
			Self::new(2, "Alice Smith", UserRole::StoreOwner),
			Self::new(3, "Bob Johnson", UserRole::Admin),
		]
	}

	fn new(id: RecordId, name: &str, role: UserRole) -> Self {
		Self {
			id,
			name: name.to_owned(),
			role,
		}
	}
}

/// Form state of the add/edit user modal. `id` is set when editing an existing user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
	pub id: Option<RecordId>,
	pub name: String,
	pub role: Option<UserRole>,
}
impl From<&User> for UserDraft {
	fn from(user: &User) -> Self {
		Self {
			id: Some(user.id),
			name: user.name.clone(),
			role: Some(user.role),
		}
	}
}
impl UserDraft {
	pub fn is_editing(&self) -> bool {
		self.id.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn role_values_round_trip() {
		for role in UserRole::all() {
			assert_eq!(UserRole::from_value(role.value()), Some(*role));
		}
		assert_eq!(UserRole::from_value("Store Owner"), Some(UserRole::StoreOwner));
		assert_eq!(UserRole::from_value("store owner"), None);
		assert_eq!(UserRole::from_value(""), None);
	}

	#[test]
	fn draft_from_user_is_in_edit_mode() {
		let user = &User::seed()[1];
		let draft = UserDraft::from(user);
		assert!(draft.is_editing());
		assert_eq!(draft.name, "Alice Smith");
		assert_eq!(draft.role, Some(UserRole::StoreOwner));
		assert!(!UserDraft::default().is_editing());
	}
}
