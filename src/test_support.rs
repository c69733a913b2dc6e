use yew::{BaseComponent, ServerRenderer};

/// Renders a component to an html string on the host, without hydration markers.
pub fn render<C, F>(props: F) -> String
where
	C: BaseComponent,
	F: FnOnce() -> C::Properties + Send + 'static,
{
	let renderer = ServerRenderer::<C>::with_props(props).hydratable(false);
	futures::executor::block_on(renderer.render())
}
