use crate::{
	config::LOGOUT_DELAY_MS,
	data::{self, UserRole},
	error::SessionError,
	notify,
	session::use_session,
	util::{self, web_ext::InputExt},
	Route,
};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

mod stores;
use stores::*;
mod users;
use users::*;

struct DashboardState(data::Dashboard);
impl Reducible for DashboardState {
	type Action = Box<dyn FnOnce(&mut data::Dashboard) + 'static>;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut data = self.0.clone();
		action(&mut data);
		match data != self.0 {
			true => Rc::new(Self(data)),
			false => self,
		}
	}
}
impl PartialEq for DashboardState {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

/// Shared with the tables and modals so they can read and change the dashboard.
#[derive(Clone, PartialEq)]
struct DashboardHandle(UseReducerHandle<DashboardState>);
impl std::ops::Deref for DashboardHandle {
	type Target = data::Dashboard;

	fn deref(&self) -> &Self::Target {
		&self.0.0
	}
}
impl DashboardHandle {
	fn mutate<F>(&self, mutator: F)
	where
		F: FnOnce(&mut data::Dashboard) + 'static,
	{
		self.0.dispatch(Box::new(mutator));
	}

	fn callback<T, F>(&self, mutator: F) -> Callback<T>
	where
		F: Fn(&mut data::Dashboard, T) + 'static,
		T: 'static,
	{
		let handle = self.clone();
		let mutator = Rc::new(mutator);
		Callback::from(move |value: T| {
			let mutator = mutator.clone();
			handle.mutate(move |dashboard| mutator(dashboard, value));
		})
	}
}

#[function_component]
pub fn Dashboard() -> Html {
	let dashboard = DashboardHandle(use_reducer(|| DashboardState(data::Dashboard::default())));
	let session = use_session();
	let navigator = use_navigator().unwrap();

	let logout = Callback::from(move |_: MouseEvent| {
		notify::info("Logout successful!");
		let session = session.clone();
		let navigator = navigator.clone();
		util::spawn_local("logout", async move {
			TimeoutFuture::new(LOGOUT_DELAY_MS).await;
			navigator.push(&Route::Login);
			session.logout()?;
			Ok::<(), SessionError>(())
		});
	});
	let add_user = dashboard.callback(|dashboard, _: MouseEvent| dashboard.open_user_editor());
	let add_store = dashboard.callback(|dashboard, _: MouseEvent| dashboard.open_store_editor());
	let set_filter = dashboard.callback(|dashboard, value: String| {
		dashboard.role_filter = UserRole::from_value(&value);
	});

	html! {
		<ContextProvider<DashboardHandle> context={dashboard.clone()}>
			<div class="dashboard-container container py-4">
				<div class="header-container d-flex align-items-center mb-3">
					<h2 class="dashboard-title me-auto">{"Admin Dashboard"}</h2>
					<button class="btn btn-outline-danger" onclick={logout}>{"Logout"}</button>
				</div>
				<div class="dashboard-summary d-flex gap-4">
					<p>{format!("Total Users: {}", dashboard.users.len())}</p>
					<p>{format!("Total Stores: {}", dashboard.stores.len())}</p>
				</div>
				<div class="dashboard-actions d-flex gap-2 mb-3">
					<button class="btn btn-success" onclick={add_user}>
						<i class="bi bi-person-plus me-1" />
						{"Add User"}
					</button>
					<button class="btn btn-success" onclick={add_store}>
						<i class="bi bi-shop me-1" />
						{"Add Store"}
					</button>
				</div>
				<div class="dashboard-filter d-flex align-items-center gap-2 mb-3">
					<label class="form-label mb-0">{"Filter by Role:"}</label>
					<select class="form-select w-auto" onchange={set_filter.reform(|ev: Event| ev.select_value().unwrap_or_default())}>
						<option value="" selected={dashboard.role_filter.is_none()}>{"All"}</option>
						{UserRole::all().iter().map(|role| html! {
							<option value={role.value()} selected={dashboard.role_filter == Some(*role)}>{role.value()}</option>
						}).collect::<Vec<_>>()}
					</select>
				</div>
				<UsersTable />
				<StoresTable />
				<UserEditor />
				<StoreEditor />
			</div>
		</ContextProvider<DashboardHandle>>
	}
}
