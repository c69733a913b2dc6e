use crate::{
	config::TOAST_LIFETIME_MS,
	notify::{Toast, Toasts},
};
use yew::prelude::*;
use yew_hooks::use_timeout;
use yewdux::prelude::{use_store_value, Dispatch};

#[function_component]
pub fn Toaster() -> Html {
	let toasts = use_store_value::<Toasts>();
	html! {
		<div class="toast-container position-fixed top-0 end-0 p-3">
			{toasts.entries().iter().map(|toast| html! {
				<ToastView key={toast.id} toast={toast.clone()} />
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct ToastProps {
	toast: Toast,
}

#[function_component]
fn ToastView(ToastProps { toast }: &ToastProps) -> Html {
	let dispatch = Dispatch::<Toasts>::new();
	let id = toast.id;
	use_timeout(
		{
			let dispatch = dispatch.clone();
			move || {
				dispatch.reduce_mut(|toasts| toasts.dismiss(id));
			}
		},
		TOAST_LIFETIME_MS,
	);
	let close = dispatch.reduce_mut_callback(move |toasts| toasts.dismiss(id));
	html! {
		<div class={classes!("toast", "show", "align-items-center", "border-0", toast.level.classes())} role="alert">
			<div class="d-flex">
				<div class="toast-body">{toast.message.clone()}</div>
				<button type="button" class="btn-close me-2 m-auto" aria-label="Close" onclick={close} />
			</div>
		</div>
	}
}
