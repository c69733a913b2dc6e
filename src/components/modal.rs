use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
	pub title: AttrValue,
	pub on_close: Callback<()>,
	pub children: Html,
}

/// A dialog drawn over the page. Clicking the backdrop or the close button emits `on_close`.
#[function_component]
pub fn Modal(ModalProps { title, on_close, children }: &ModalProps) -> Html {
	let close = on_close.reform(|_: MouseEvent| ());
	let keep_open = Callback::from(|ev: MouseEvent| ev.stop_propagation());
	html! {<>
		<div class="modal-backdrop fade show" />
		<div class="modal fade show d-block" tabindex="-1" onclick={close.clone()}>
			<div class="modal-dialog modal-dialog-centered" onclick={keep_open}>
				<div class="modal-content">
					<div class="modal-header">
						<h2 class="modal-title fs-5">{title.clone()}</h2>
						<button type="button" class="btn-close" aria-label="Close" onclick={close} />
					</div>
					<div class="modal-body">
						{children.clone()}
					</div>
				</div>
			</div>
		</div>
	</>}
}
