use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::nano_catalog;
use crate::components::ecosystem_map::{EcosystemMapCanvas, LayoutParams, compute_layout};

/// Landing page: computes the positioned map once and hands it to the
/// viewport component by prop, so nothing downstream recomputes (or
/// re-jitters) it.
#[component]
pub fn Home() -> impl IntoView {
	// Seeded from the wall clock: jitter varies per visit, fixed per session.
	let seed = js_sys::Date::now() as u64;
	let mut rng = StdRng::seed_from_u64(seed);
	let map = compute_layout(&nano_catalog(), &LayoutParams::default(), &mut rng);
	log::info!(
		"ecosystem map ready: {} categories, {} services",
		map.categories.len(),
		map.nodes.len()
	);
	let (map, _) = signal(map);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="map-page">
				<header class="map-header">
					<h1>"NanoMap \u{1f5fa}\u{fe0f}"</h1>
					<p>"Interact with the map to explore the Nano ecosystem."</p>
				</header>
				<EcosystemMapCanvas data=map />
				<footer class="map-footer">
					<p>
						"Made with \u{1f499} by "
						<a href="https://github.com/BrazyDevelopment">"Brazy"</a>
						" at "
						<a href="https://armour.dev">"Armour Solutions"</a>
					</p>
					<p>
						"Contribute "
						<a href="https://github.com/BrazyDevelopment/nanomap">"here"</a>
					</p>
				</footer>
			</div>
		</ErrorBoundary>
	}
}
