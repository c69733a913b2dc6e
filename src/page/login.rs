use crate::{auth::{LoginForm, Role}, notify, session::use_session, util::web_ext::InputExt};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn text_input(form: &UseStateHandle<LoginForm>, apply: fn(&mut LoginForm, String)) -> Callback<InputEvent> {
	let form = form.clone();
	Callback::from(move |ev: InputEvent| {
		let Some(value) = ev.input_value() else {
			return;
		};
		let mut next = (*form).clone();
		apply(&mut next, value);
		form.set(next);
	})
}

#[function_component]
pub fn Login() -> Html {
	let session = use_session();
	let navigator = use_navigator().unwrap();
	let form = use_state_eq(LoginForm::default);

	let select_role = {
		let form = form.clone();
		Callback::from(move |ev: Event| {
			let Some(value) = ev.select_value() else {
				return;
			};
			let mut next = (*form).clone();
			next.role = Role::from_id(&value);
			form.set(next);
		})
	};
	let submit = {
		let form = form.clone();
		Callback::from(move |ev: SubmitEvent| {
			ev.prevent_default();
			match session.submit(&form) {
				Ok(route) => {
					notify::success("Login successful!");
					navigator.push(&route);
				}
				Err(err) => {
					log::debug!(target: "auth", "Login rejected: {err:?}");
					notify::error(err.to_string());
				}
			}
		})
	};

	html! {
		<div class="login-container d-flex justify-content-center align-items-center min-vh-100">
			<div class="card login-body p-4" style="min-width: 22rem;">
				<h2 class="login-title text-center mb-3">{"Login"}</h2>
				<form class="d-grid gap-3" onsubmit={submit}>
					<input
						type="text" class="form-control" name="name"
						placeholder="Ex: AdminUser, NormalUser, StoreOwner"
						value={form.name.clone()}
						oninput={text_input(&form, |form, value| form.name = value)}
					/>
					<input
						type="email" class="form-control" name="email"
						placeholder="Ex: admin, user, owner@gmail.com"
						value={form.email.clone()}
						oninput={text_input(&form, |form, value| form.email = value)}
					/>
					<input
						type="password" class="form-control" name="password"
						placeholder="Ex: admin123, user123, owner123"
						value={form.password.clone()}
						oninput={text_input(&form, |form, value| form.password = value)}
					/>
					<select class="form-select" name="role" onchange={select_role}>
						<option value="" selected={form.role.is_none()}>{"Select a Role"}</option>
						{Role::all().iter().map(|role| html! {
							<option value={role.id()} selected={form.role == Some(role)}>{role.label()}</option>
						}).collect::<Vec<_>>()}
					</select>
					<button type="submit" class="btn btn-primary">{"Login"}</button>
				</form>
			</div>
		</div>
	}
}
