use crate::{
	error::{AuthError, LoginError, ValidationError},
	session::{Session, SessionStore},
	Route,
};
use enum_map::{enum_map, Enum, EnumMap};
use enumset::{EnumSet, EnumSetType};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// The account kinds that can sign in to the console.
#[derive(Debug, Enum, EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Admin,
	User,
	Owner,
}
impl Role {
	pub fn all() -> EnumSet<Self> {
		EnumSet::all()
	}

	pub fn id(self) -> &'static str {
		match self {
			Self::Admin => "admin",
			Self::User => "user",
			Self::Owner => "owner",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Admin => "System Administrator",
			Self::User => "Normal User",
			Self::Owner => "Store Owner",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::all().iter().find(|role| role.id() == id)
	}

	/// Where a freshly logged-in account of this role lands.
	pub fn destination(self) -> Route {
		DESTINATIONS[self]
	}

	pub fn credential(self) -> &'static Credential {
		&CREDENTIALS[self]
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
	pub name: &'static str,
	pub email: &'static str,
	pub password: &'static str,
}
impl Credential {
	fn matches(&self, name: &str, email: &str, password: &str) -> bool {
		self.name == name && self.email == email && self.password == password
	}
}

lazy_static! {
	static ref CREDENTIALS: EnumMap<Role, Credential> = enum_map! {
		Role::Admin => Credential { name: "AdminUser", email: "admin@gmail.com", password: "admin123" },
		Role::User => Credential { name: "NormalUser", email: "user@gmail.com", password: "user123" },
		Role::Owner => Credential { name: "StoreOwner", email: "owner@gmail.com", password: "owner123" },
	};
	static ref DESTINATIONS: EnumMap<Role, Route> = enum_map! {
		Role::Admin => Route::AdminDashboard,
		Role::User => Route::UserDashboard,
		Role::Owner => Route::OwnerDashboard,
	};
}

/// Contents of the login form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
	pub name: String,
	pub email: String,
	pub password: String,
	pub role: Option<Role>,
}
impl LoginForm {
	pub fn authenticate(&self) -> Result<Session, LoginError> {
		let role = match self.role {
			Some(role) if !self.name.is_empty() && !self.email.is_empty() && !self.password.is_empty() => role,
			_ => return Err(ValidationError::AllFieldsRequired.into()),
		};
		if !role.credential().matches(&self.name, &self.email, &self.password) {
			return Err(AuthError::InvalidCredentials.into());
		}
		Ok(Session {
			name: self.name.clone(),
			email: self.email.clone(),
			role,
		})
	}

	/// Checks the form, stores the resulting session and returns the route to navigate to.
	pub fn submit(&self, sessions: &SessionStore) -> Result<Route, LoginError> {
		let session = self.authenticate()?;
		let destination = session.role.destination();
		sessions.login(&session)?;
		log::info!(target: "auth", "{} logged in as {}", session.name, session.role.id());
		Ok(destination)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::session::MemoryBackend;
	use std::rc::Rc;

	fn admin_form() -> LoginForm {
		LoginForm {
			name: "AdminUser".into(),
			email: "admin@gmail.com".into(),
			password: "admin123".into(),
			role: Some(Role::Admin),
		}
	}

	fn memory_store() -> SessionStore {
		SessionStore::new(Rc::new(MemoryBackend::default()))
	}

	#[test]
	fn any_empty_field_is_a_validation_error() {
		let blanks: [fn(&mut LoginForm); 4] = [
			|form| form.name.clear(),
			|form| form.email.clear(),
			|form| form.password.clear(),
			|form| form.role = None,
		];
		for blank in blanks {
			let sessions = memory_store();
			let mut form = admin_form();
			blank(&mut form);
			let result = form.submit(&sessions);
			assert!(matches!(result, Err(LoginError::Validation(ValidationError::AllFieldsRequired))));
			assert_eq!(sessions.current(), None);
		}
	}

	#[test]
	fn admin_login_writes_session_and_routes_to_dashboard() {
		let sessions = memory_store();
		let route = admin_form().submit(&sessions).unwrap();
		assert_eq!(route, Route::AdminDashboard);
		assert_eq!(
			sessions.current(),
			Some(Session {
				name: "AdminUser".into(),
				email: "admin@gmail.com".into(),
				role: Role::Admin,
			})
		);
	}

	#[test]
	fn mismatched_field_is_an_auth_error() {
		let sessions = memory_store();
		let mut form = admin_form();
		form.password = "wrong".into();
		assert!(matches!(form.submit(&sessions), Err(LoginError::Auth(AuthError::InvalidCredentials))));
		assert_eq!(sessions.current(), None);

		let mut form = admin_form();
		form.name = "adminuser".into();
		assert!(matches!(form.authenticate(), Err(LoginError::Auth(_))));
	}

	#[test]
	fn credentials_are_bound_to_their_role() {
		let mut form = admin_form();
		form.role = Some(Role::User);
		assert!(matches!(form.authenticate(), Err(LoginError::Auth(_))));

		let form = LoginForm {
			name: "StoreOwner".into(),
			email: "owner@gmail.com".into(),
			password: "owner123".into(),
			role: Some(Role::Owner),
		};
		assert_eq!(form.authenticate().unwrap().role, Role::Owner);
	}

	#[test]
	fn every_role_has_a_distinct_destination() {
		let routes: Vec<Route> = Role::all().iter().map(Role::destination).collect();
		assert_eq!(routes, vec![Route::AdminDashboard, Route::UserDashboard, Route::OwnerDashboard]);
	}

	#[test]
	fn role_ids_round_trip() {
		for role in Role::all() {
			assert_eq!(Role::from_id(role.id()), Some(role));
		}
		assert_eq!(Role::from_id(""), None);
		assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
	}
}
