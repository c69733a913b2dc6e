// The components are only reachable from the wasm entry point.
#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

pub mod auth;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod notify;
pub mod page;
pub mod route;
pub mod session;
#[cfg(test)]
mod test_support;
pub mod util;

pub use route::Route;

#[cfg(target_family = "wasm")]
fn main() {
	if let Err(err) = logging::init(logging::Config::default().prefer_target()) {
		web_sys::console::error_1(&format!("Failed to install logger: {err}").into());
	}
	log::info!(target: env!("CARGO_PKG_NAME"), "Starting v{}", env!("CARGO_PKG_VERSION"));
	yew::Renderer::<App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	eprintln!("{} runs in the browser; build it for wasm32 with `trunk serve`.", env!("CARGO_PKG_NAME"));
}

#[function_component]
fn App() -> Html {
	html! {
		<BrowserRouter>
			<session::Provider>
				<components::Toaster />
				<Switch<Route> render={Route::html} />
			</session::Provider>
		</BrowserRouter>
	}
}
