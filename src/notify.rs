use yew::virtual_dom::AttrValue;
use yewdux::{dispatch::Dispatch, store::Store};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
	Success,
	Error,
	Info,
}
impl Level {
	pub fn classes(self) -> &'static str {
		match self {
			Self::Success => "text-bg-success",
			Self::Error => "text-bg-danger",
			Self::Info => "text-bg-info",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub id: usize,
	pub level: Level,
	pub message: AttrValue,
}

/// Transient messages shown in the corner of the page.
#[derive(Default, Clone, Debug, PartialEq, Store)]
pub struct Toasts {
	next_id: usize,
	entries: Vec<Toast>,
}
impl Toasts {
	pub fn push(&mut self, level: Level, message: AttrValue) -> usize {
		let id = self.next_id;
		self.next_id += 1;
		self.entries.push(Toast { id, level, message });
		id
	}

	pub fn dismiss(&mut self, id: usize) {
		self.entries.retain(|toast| toast.id != id);
	}

	pub fn entries(&self) -> &[Toast] {
		&self.entries
	}
}

fn show(level: Level, message: AttrValue) {
	log::debug!(target: "notify", "{level:?}: {message}");
	Dispatch::<Toasts>::new().reduce_mut(move |toasts| {
		toasts.push(level, message);
	});
}

pub fn success(message: impl Into<AttrValue>) {
	show(Level::Success, message.into());
}

pub fn error(message: impl Into<AttrValue>) {
	show(Level::Error, message.into());
}

pub fn info(message: impl Into<AttrValue>) {
	show(Level::Info, message.into());
}
