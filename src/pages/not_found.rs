use leptos::prelude::*;

/// 404 - Not Found page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"This page drifted off the map."</p>
			<a href="/">"Back to the ecosystem"</a>
		</div>
	}
}
