use super::DashboardHandle;
use crate::{
	components::Modal,
	data::{RecordId, UserRole},
	notify,
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[function_component]
pub fn UsersTable() -> Html {
	let dashboard = use_context::<DashboardHandle>().unwrap();
	let edit = dashboard.callback(|dashboard, id: RecordId| {
		dashboard.begin_edit(id);
	});
	let delete = dashboard.callback(|dashboard, id: RecordId| {
		if dashboard.delete_user(id).is_none() {
			log::debug!(target: "dashboard", "User {id} was already gone");
		}
		notify::success("User deleted successfully!");
	});

	let rows = dashboard
		.filtered_users()
		.map(|user| {
			let id = user.id;
			html! {
				<tr key={id}>
					<td>{&user.name}</td>
					<td>{user.role.value()}</td>
					<td>
						<button class="btn btn-sm btn-primary me-2" onclick={edit.reform(move |_| id)}>{"Update"}</button>
						<button class="btn btn-sm btn-danger" onclick={delete.reform(move |_| id)}>{"Delete"}</button>
					</td>
				</tr>
			}
		})
		.collect::<Vec<_>>();

	html! {
		<div class="users-list-container mb-4">
			<h3>{"Users List"}</h3>
			<table class="table">
				<thead>
					<tr>
						<th>{"Name"}</th>
						<th>{"Role"}</th>
						<th>{"Actions"}</th>
					</tr>
				</thead>
				<tbody>
					if rows.is_empty() {
						<tr><td colspan="3" class="text-center text-body-secondary">{"No users"}</td></tr>
					}
					{rows}
				</tbody>
			</table>
		</div>
	}
}

/// Add/edit modal, shown while the dashboard holds a user draft.
#[function_component]
pub fn UserEditor() -> Html {
	let dashboard = use_context::<DashboardHandle>().unwrap();
	let Some(draft) = dashboard.user_editor.clone() else {
		return html!();
	};

	let set_name = dashboard.callback(|dashboard, name: String| {
		if let Some(draft) = &mut dashboard.user_editor {
			draft.name = name;
		}
	});
	let set_role = dashboard.callback(|dashboard, value: String| {
		if let Some(draft) = &mut dashboard.user_editor {
			draft.role = UserRole::from_value(&value);
		}
	});
	let save = dashboard.callback(|dashboard, _: MouseEvent| match dashboard.save_user_editor() {
		Ok(saved) => notify::success(saved.message()),
		Err(err) => notify::error(err.to_string()),
	});
	let close = dashboard.callback(|dashboard, _: ()| dashboard.close_editors());

	let (title, action) = match draft.is_editing() {
		true => ("Edit User", "Update"),
		false => ("Add User", "Add"),
	};
	html! {
		<Modal {title} on_close={close}>
			<div class="admin-modals d-grid gap-3">
				<input
					type="text" class="form-control" placeholder="Name"
					value={draft.name.clone()}
					oninput={set_name.reform(|ev: InputEvent| ev.input_value().unwrap_or_default())}
				/>
				<select class="form-select" onchange={set_role.reform(|ev: Event| ev.select_value().unwrap_or_default())}>
					<option value="" selected={draft.role.is_none()}>{"Select Role"}</option>
					{UserRole::all().iter().map(|role| html! {
						<option value={role.value()} selected={draft.role == Some(*role)}>{role.value()}</option>
					}).collect::<Vec<_>>()}
				</select>
				<button class="btn btn-primary" onclick={save}>{action}</button>
			</div>
		</Modal>
	}
}
