use super::DashboardHandle;
use crate::{
	components::{Modal, StarPicker, Stars},
	data::RecordId,
	notify,
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[function_component]
pub fn StoresTable() -> Html {
	let dashboard = use_context::<DashboardHandle>().unwrap();
	let delete = dashboard.callback(|dashboard, id: RecordId| {
		dashboard.delete_store(id);
		notify::success("Store deleted successfully!");
	});

	html! {
		<div class="stores-list-container mb-4">
			<h3>{"Stores List"}</h3>
			<table class="table">
				<thead>
					<tr>
						<th>{"Name"}</th>
						<th>{"Owner"}</th>
						<th>{"Rating"}</th>
						<th>{"Actions"}</th>
					</tr>
				</thead>
				<tbody>
					if dashboard.stores.is_empty() {
						<tr><td colspan="4" class="text-center text-body-secondary">{"No stores"}</td></tr>
					}
					{dashboard.stores.iter().map(|store| {
						let id = store.id;
						html! {
							<tr key={id}>
								<td>{&store.name}</td>
								<td>{&store.owner}</td>
								<td title={store.rating.to_string()}><Stars filled={store.rating.filled_stars()} /></td>
								<td>
									<button class="btn btn-sm btn-danger" onclick={delete.reform(move |_| id)}>{"Delete"}</button>
								</td>
							</tr>
						}
					}).collect::<Vec<_>>()}
				</tbody>
			</table>
		</div>
	}
}

#[function_component]
pub fn StoreEditor() -> Html {
	let dashboard = use_context::<DashboardHandle>().unwrap();
	let Some(draft) = dashboard.store_editor.clone() else {
		return html!();
	};

	let set_name = dashboard.callback(|dashboard, name: String| {
		if let Some(draft) = &mut dashboard.store_editor {
			draft.name = name;
		}
	});
	let set_owner = dashboard.callback(|dashboard, owner: String| {
		if let Some(draft) = &mut dashboard.store_editor {
			draft.owner = owner;
		}
	});
	let rate = dashboard.callback(|dashboard, stars: u8| dashboard.rate_draft(stars));
	let save = dashboard.callback(|dashboard, _: MouseEvent| match dashboard.save_store_editor() {
		Ok(_) => notify::success("Store added successfully!"),
		Err(err) => notify::error(err.to_string()),
	});
	let close = dashboard.callback(|dashboard, _: ()| dashboard.close_editors());

	html! {
		<Modal title="Add Store" on_close={close}>
			<div class="admin-modals d-grid gap-3">
				<input
					type="text" class="form-control" placeholder="Store Name"
					value={draft.name.clone()}
					oninput={set_name.reform(|ev: InputEvent| ev.input_value().unwrap_or_default())}
				/>
				<input
					type="text" class="form-control" placeholder="Owner"
					value={draft.owner.clone()}
					oninput={set_owner.reform(|ev: InputEvent| ev.input_value().unwrap_or_default())}
				/>
				<StarPicker value={draft.rating.filled_stars()} on_select={rate} />
				<button class="btn btn-success" onclick={save}>{"Add Store"}</button>
			</div>
		</Modal>
	}
}
