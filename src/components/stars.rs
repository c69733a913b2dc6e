use crate::config::MAX_RATING;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarsProps {
	pub filled: u8,
}

/// Read-only rating: one gold star per point, nothing for the remainder.
#[function_component]
pub fn Stars(StarsProps { filled }: &StarsProps) -> Html {
	html! {
		<span class="stars">
			{(0..*filled).map(|_| html!(<i class="bi bi-star-fill" style="color: gold;" />)).collect::<Vec<_>>()}
		</span>
	}
}

#[derive(Properties, PartialEq)]
pub struct StarPickerProps {
	pub value: u8,
	pub on_select: Callback<u8>,
}

#[function_component]
pub fn StarPicker(StarPickerProps { value, on_select }: &StarPickerProps) -> Html {
	html! {
		<div class="star-rating d-flex align-items-center">
			<label class="form-label me-2 mb-0">{format!("Rating: {value}")}</label>
			{(1..=MAX_RATING).map(|star| {
				let color = match star <= *value {
					true => "gold",
					false => "#ccc",
				};
				let onclick = on_select.reform(move |_: MouseEvent| star);
				html! {
					<i
						class="bi bi-star-fill me-1"
						style={format!("color: {color}; cursor: pointer;")}
						{onclick}
					/>
				}
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{data::Rating, test_support::render};

	#[test]
	fn renders_one_icon_per_filled_star() {
		let html = render::<Stars, _>(|| StarsProps { filled: 3 });
		assert_eq!(html.matches("bi-star-fill").count(), 3);

		let html = render::<Stars, _>(|| StarsProps { filled: 0 });
		assert_eq!(html.matches("bi-star-fill").count(), 0);
	}

	#[test]
	fn store_rating_rounds_to_whole_stars() {
		let filled = Rating::new(3.8).filled_stars();
		let html = render::<Stars, _>(move || StarsProps { filled });
		assert_eq!(html.matches("bi-star-fill").count(), 4);
	}

	#[test]
	fn picker_highlights_stars_up_to_the_value() {
		let html = render::<StarPicker, _>(|| StarPickerProps {
			value: 2,
			on_select: Callback::noop(),
		});
		assert!(html.contains("Rating: 2"));
		assert_eq!(html.matches("bi-star-fill").count(), 5);
		assert_eq!(html.matches("color: gold").count(), 2);
		assert_eq!(html.matches("color: #ccc").count(), 3);
	}
}
