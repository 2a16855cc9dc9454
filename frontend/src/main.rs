use gloo_net::http::Request;
use shared_data::EventDetails;
use yew::prelude::*;
use countdown::Countdown;
use gallery::Gallery;

mod countdown;
mod gallery;

// the server renders a plain version of the invitation inside of this; we take it over once loaded
const ROOT_ID: &str = "invite";

pub fn get_event(state: UseStateHandle<Option<Result<EventDetails, String>>>) {
	wasm_bindgen_futures::spawn_local(async move {
		let res = match Request::get("/api/event").send().await {
			Ok(res) => if res.ok() {
				res.json::<EventDetails>().await
					.map_err(|e| format!("There was an error while decoding: {e:?}"))
			} else {
				Err(match res.text().await {
					Err(err) => format!("There was an error getting the response: {err:?}"),
					Ok(text) => format!("Request returned {}: {text}", res.status())
				})
			},
			Err(err) => Err(format!("{err:?}"))
		};

		if let Err(ref err) = res {
			gloo_console::error!(format!("Couldn't load event details: {err}"));
		}

		state.set(Some(res));
	});
}

#[function_component(Invite)]
pub fn invite() -> Html {
	let event = use_state(|| None);

	{
		let state = event.clone();
		use_effect(move || {
			if state.is_none() {
				get_event(state);
			}

			|| ()
		});
	}

	match event.as_ref() {
		None => html! { <p>{ "Cargando invitación..." }</p> },
		Some(Err(err)) => html! { <><h1>{ "Couldn't load the invitation" }</h1><p>{ err }</p></> },
		Some(Ok(event)) => html! {
			<>
				<Countdown target={ event.target } />
				<Gallery photos={ event.photos.clone() } />
			</>
		}
	}
}

fn main() {
	let root = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|doc| doc.get_element_by_id(ROOT_ID));

	match root {
		Some(root) => {
			root.set_inner_html("");
			yew::Renderer::<Invite>::with_root(root).render();
		},
		None => {
			yew::Renderer::<Invite>::new().render();
		}
	}
}
