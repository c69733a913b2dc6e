use crate::{
	auth::{LoginForm, Role},
	error::{AccessDenied, LoginError, SessionError},
	Route,
};
use derivative::Derivative;
use enumset::EnumSet;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::rc::Rc;
use yew::{html::ChildrenProps, prelude::*};

/// The identity of whoever is logged in to this browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
	pub name: String,
	pub email: String,
	pub role: Role,
}
impl SessionValue for Session {
	fn id() -> &'static str {
		crate::config::SESSION_KEY
	}
}

/// Raw string storage that session values are written to.
pub trait SessionBackend {
	fn read(&self, key: &str) -> Result<Option<String>, SessionError>;
	fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;
	fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// The browser's `localStorage`.
pub struct LocalBackend;
impl SessionBackend for LocalBackend {
	fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
		LocalStorage::raw().get_item(key).map_err(storage_error)
	}

	fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
		LocalStorage::raw().set_item(key, value).map_err(storage_error)
	}

	fn remove(&self, key: &str) -> Result<(), SessionError> {
		LocalStorage::raw().remove_item(key).map_err(storage_error)
	}
}

fn storage_error(err: wasm_bindgen::JsValue) -> SessionError {
	SessionError::Storage(format!("{err:?}"))
}

pub trait SessionValue {
	fn id() -> &'static str;

	fn load(backend: &dyn SessionBackend) -> Result<Option<Self>, SessionError>
	where
		Self: DeserializeOwned,
	{
		match backend.read(Self::id())? {
			Some(json) => Ok(Some(serde_json::from_str(&json)?)),
			None => Ok(None),
		}
	}

	fn save(&self, backend: &dyn SessionBackend) -> Result<(), SessionError>
	where
		Self: Serialize,
	{
		backend.write(Self::id(), &serde_json::to_string(self)?)
	}

	fn delete(backend: &dyn SessionBackend) -> Result<(), SessionError> {
		backend.remove(Self::id())
	}
}

#[derive(Clone)]
pub struct SessionStore {
	backend: Rc<dyn SessionBackend>,
}
impl SessionStore {
	pub fn new(backend: Rc<dyn SessionBackend>) -> Self {
		Self { backend }
	}

	/// Replaces whatever session was stored before.
	pub fn login(&self, session: &Session) -> Result<(), SessionError> {
		session.save(&*self.backend)
	}

	pub fn current(&self) -> Option<Session> {
		match Session::load(&*self.backend) {
			Ok(session) => session,
			Err(err) => {
				log::warn!(target: "session", "Ignoring stored session: {err}");
				None
			}
		}
	}

	pub fn logout(&self) -> Result<(), SessionError> {
		Session::delete(&*self.backend)
	}
}

pub fn authorize(session: Option<&Session>, allowed: EnumSet<Role>) -> Result<&Session, AccessDenied> {
	let Some(session) = session else {
		return Err(AccessDenied::Anonymous);
	};
	match allowed.contains(session.role) {
		true => Ok(session),
		false => Err(AccessDenied::Role(session.role)),
	}
}

pub fn is_allowed(session: Option<&Session>, allowed: EnumSet<Role>) -> bool {
	authorize(session, allowed).is_ok()
}

/// Context handed to every view; re-renders consumers when the session changes.
#[derive(Clone, Derivative)]
#[derivative(PartialEq)]
pub struct SessionHandle {
	#[derivative(PartialEq = "ignore")]
	store: SessionStore,
	current: UseStateHandle<Option<Session>>,
}
impl std::fmt::Debug for SessionHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionHandle").field("current", &*self.current).finish()
	}
}
impl SessionHandle {
	pub fn current(&self) -> Option<&Session> {
		(*self.current).as_ref()
	}

	pub fn authorize(&self, allowed: EnumSet<Role>) -> Result<&Session, AccessDenied> {
		authorize(self.current(), allowed)
	}

	pub fn submit(&self, form: &LoginForm) -> Result<Route, LoginError> {
		let route = form.submit(&self.store)?;
		self.current.set(self.store.current());
		Ok(route)
	}

	pub fn logout(&self) -> Result<(), SessionError> {
		self.store.logout()?;
		self.current.set(None);
		Ok(())
	}
}

#[hook]
fn use_handle(store: Rc<SessionStore>) -> SessionHandle {
	let current = use_state_eq({
		let store = store.clone();
		move || store.current()
	});
	SessionHandle {
		store: (*store).clone(),
		current,
	}
}

#[function_component]
pub fn Provider(props: &ChildrenProps) -> Html {
	let store = use_memo((), |_| SessionStore::new(Rc::new(LocalBackend)));
	let handle = use_handle(store);
	html! {
		<ContextProvider<SessionHandle> context={handle}>
			{props.children.clone()}
		</ContextProvider<SessionHandle>>
	}
}

#[hook]
pub fn use_session() -> SessionHandle {
	use_context::<SessionHandle>().expect("session::Provider must wrap the app")
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryBackend(std::cell::RefCell<std::collections::HashMap<String, String>>);
#[cfg(test)]
impl SessionBackend for MemoryBackend {
	fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
		Ok(self.0.borrow().get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), SessionError> {
		self.0.borrow_mut().remove(key);
		Ok(())
	}
}

#[cfg(test)]
#[derive(Properties, PartialEq)]
pub struct MemoryProviderProps {
	pub session: Option<Session>,
	pub children: Html,
}

/// Provides a session kept in memory, already logged in as `session`.
#[cfg(test)]
#[function_component]
pub fn MemoryProvider(MemoryProviderProps { session, children }: &MemoryProviderProps) -> Html {
	let store = use_memo(session.clone(), |session| {
		let store = SessionStore::new(Rc::new(MemoryBackend::default()));
		if let Some(session) = session {
			store.login(session).unwrap();
		}
		store
	});
	let handle = use_handle(store);
	html! {
		<ContextProvider<SessionHandle> context={handle}>
			{children.clone()}
		</ContextProvider<SessionHandle>>
	}
}
