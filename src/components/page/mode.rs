//! Light/dark mode toggle.

use leptos::prelude::*;

use crate::dom;

/// Page color scheme. Dark mode is the `dark` class on `<body>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
	#[default]
	Light,
	Dark,
}

impl ColorMode {
	pub fn toggled(self) -> Self {
		match self {
			ColorMode::Light => ColorMode::Dark,
			ColorMode::Dark => ColorMode::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == ColorMode::Dark
	}

	pub fn label(self) -> &'static str {
		match self {
			ColorMode::Light => "Light mode",
			ColorMode::Dark => "Dark mode",
		}
	}
}

/// Button that flips the page between light and dark.
#[component]
pub fn ModeToggle() -> impl IntoView {
	let (mode, set_mode) = signal(ColorMode::default());

	Effect::new(move |_| {
		let dark = mode.get().is_dark();
		if let Some(body) = dom::body() {
			let _ = body.class_list().toggle_with_force("dark", dark);
		}
	});

	view! {
		<button
			id="modeToggle"
			class="mode-toggle"
			on:click=move |_| set_mode.update(|m| *m = m.toggled())
		>
			{move || mode.get().label()}
		</button>
	}
}
