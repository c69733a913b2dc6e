use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ElsewhereProps {
	pub title: AttrValue,
}

/// Landing page for roles whose dashboard is not part of this console.
#[function_component]
pub fn Elsewhere(ElsewhereProps { title }: &ElsewhereProps) -> Html {
	html! {
		<div class="container py-5">
			<h2>{title.clone()}</h2>
			<p class="text-body-secondary">{"This dashboard is served by another application."}</p>
		</div>
	}
}
