use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;

pub trait InputExt {
	/// Current value of the `<input>` that fired this event.
	fn input_value(&self) -> Option<String>;
	/// Current value of the `<select>` that fired this event.
	fn select_value(&self) -> Option<String>;
}
impl<T> InputExt for T
where
	T: TargetCast,
{
	fn input_value(&self) -> Option<String> {
		self.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
	}

	fn select_value(&self) -> Option<String> {
		self.target_dyn_into::<HtmlSelectElement>().map(|select| select.value())
	}
}
