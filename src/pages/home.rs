use leptos::prelude::*;

use crate::components::tree_canvas::{TreeCanvas, TreeConfig};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
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

			<div class="fullscreen-tree">
				<TreeCanvas config=TreeConfig::default() fullscreen=true />
				<div class="tree-caption">
					"Drag blocks • Click " <span class="tree-caption-key">"+"</span> " to add a child"
				</div>
			</div>
		</ErrorBoundary>
	}
}
