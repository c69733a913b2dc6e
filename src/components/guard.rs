use crate::{
	auth::Role,
	error::AccessDenied,
	notify,
	session::{is_allowed, use_session},
	Route,
};
use enumset::EnumSet;
use yew::prelude::*;
use yew_router::prelude::Redirect;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
	pub allowed: EnumSet<Role>,
	pub children: Html,
}

/// Renders its children only for a session whose role is allowed; everyone else is sent to the login page.
#[function_component]
pub fn Guard(GuardProps { allowed, children }: &GuardProps) -> Html {
	let session = use_session();
	let denied = session.authorize(*allowed).err();
	use_effect_with(denied, |denied| {
		if let Some(reason) = denied {
			log::warn!(target: "guard", "Blocked protected route: {reason}");
			// Logging out also lands here, which is not worth a toast.
			if matches!(reason, AccessDenied::Role(_)) {
				notify::error("You do not have access to that page.");
			}
		}
	});
	match is_allowed(session.current(), *allowed) {
		true => children.clone(),
		false => html!(<Redirect<Route> to={Route::Login} />),
	}
}
