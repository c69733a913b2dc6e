use crate::{auth::Role, components::Guard, page};
use enumset::{enum_set, EnumSet};
use yew::{html, Html};
use yew_router::Routable;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Login,
	#[at("/admin-dashboard")]
	AdminDashboard,
	#[at("/user-dashboard")]
	UserDashboard,
	#[at("/owner-dashboard")]
	OwnerDashboard,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	/// Roles that may view this route, or `None` when it is public.
	pub fn allowed_roles(self) -> Option<EnumSet<Role>> {
		match self {
			Self::Login | Self::NotFound => None,
			Self::AdminDashboard => Some(enum_set!(Role::Admin)),
			Self::UserDashboard => Some(enum_set!(Role::User)),
			Self::OwnerDashboard => Some(enum_set!(Role::Owner)),
		}
	}

	pub fn html(self) -> Html {
		let content = match self {
			Self::Login => html!(<page::Login />),
			Self::AdminDashboard => html!(<page::admin::Dashboard />),
			Self::UserDashboard => html!(<page::Elsewhere title="User Dashboard" />),
			Self::OwnerDashboard => html!(<page::Elsewhere title="Owner Dashboard" />),
			Self::NotFound => html!(<h1>{"404: Page not found"}</h1>),
		};
		match self.allowed_roles() {
			None => content,
			Some(allowed) => html! {
				<Guard {allowed}>{content}</Guard>
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_match_the_console_urls() {
		assert_eq!(Route::Login.to_path(), "/");
		assert_eq!(Route::AdminDashboard.to_path(), "/admin-dashboard");
		assert_eq!(Route::UserDashboard.to_path(), "/user-dashboard");
		assert_eq!(Route::OwnerDashboard.to_path(), "/owner-dashboard");
	}

	#[test]
	fn only_the_login_page_is_public() {
		assert_eq!(Route::Login.allowed_roles(), None);
		assert_eq!(Route::AdminDashboard.allowed_roles(), Some(enum_set!(Role::Admin)));
	}

	#[test]
	fn each_role_may_open_its_own_landing_route() {
		for role in Role::all() {
			let allowed = role.destination().allowed_roles().unwrap();
			assert_eq!(allowed, EnumSet::only(role));
		}
	}
}
