//! WASM entry point; Trunk mounts the app to the document body.

use nanomap::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
