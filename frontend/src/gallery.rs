use std::rc::Rc;
use shared_data::GallerySelection;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub struct GalleryProps {
	pub photos: Vec<String>
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
	Open(usize),
	Close,
	Next,
	Previous
}

// GallerySelection lives in shared_data, so it needs a local wrapper to be Reducible
#[derive(Debug, PartialEq, Eq)]
pub struct Lightbox(pub GallerySelection);

impl Reducible for Lightbox {
	type Action = LightboxAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut selection = self.0;
		match action {
			LightboxAction::Open(idx) => selection.open(idx),
			LightboxAction::Close => selection.close(),
			LightboxAction::Next => selection.next(),
			LightboxAction::Previous => selection.previous(),
		}
		Rc::new(Self(selection))
	}
}

fn alt_text(idx: usize) -> String {
	format!("Foto del bebé {}", idx + 1)
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
	let lightbox = use_reducer(|| Lightbox(GallerySelection::new(props.photos.len())));

	// `stop` keeps a click on the controls from also reaching the backdrop, which closes it
	let on = |action: LightboxAction, stop: bool| {
		let lightbox = lightbox.clone();
		Callback::from(move |ev: MouseEvent| {
			if stop {
				ev.stop_propagation();
			}
			lightbox.dispatch(action);
		})
	};

	let selection = lightbox.0;
	let overlay = match (selection.selected().and_then(|idx| props.photos.get(idx).map(|p| (idx, p))), selection.caption()) {
		(Some((idx, photo)), Some(caption)) => html! {
			<div id="lightbox" onclick={ on(LightboxAction::Close, false) }>
				<button id="lightbox-close" onclick={ on(LightboxAction::Close, true) }>{ "×" }</button>
				<button id="lightbox-prev" onclick={ on(LightboxAction::Previous, true) }>{ "‹" }</button>
				<button id="lightbox-next" onclick={ on(LightboxAction::Next, true) }>{ "›" }</button>
				<img
					src={ photo.clone() }
					alt={ alt_text(idx) }
					onclick={ Callback::from(|ev: MouseEvent| ev.stop_propagation()) }
				/>
				<div id="lightbox-caption">{ caption }</div>
			</div>
		},
		_ => html! {}
	};

	html! {
		<section id="gallery-section">
			<h2>{ "Momentos Especiales" }</h2>
			<p>{ "Un vistazo a la vida de nuestro angelito" }</p>
			<div id="gallery">
				{ for props.photos.iter().enumerate().map(|(idx, photo)| html! {
					<img
						key={ idx }
						src={ photo.clone() }
						alt={ alt_text(idx) }
						onclick={ on(LightboxAction::Open(idx), false) }
					/>
				}) }
			</div>
			{ overlay }
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reduce_all(len: usize, actions: &[LightboxAction]) -> GallerySelection {
		actions.iter()
			.fold(Rc::new(Lightbox(GallerySelection::new(len))), |lb, action| lb.reduce(*action))
			.0
	}

	#[test]
	fn actions_drive_the_selection() {
		use LightboxAction::*;

		assert_eq!(reduce_all(6, &[Open(0), Previous]).selected(), Some(5));
		assert_eq!(reduce_all(6, &[Open(5), Next, Next]).selected(), Some(1));
		assert_eq!(reduce_all(6, &[Open(2), Close, Next]).selected(), None);
		assert_eq!(reduce_all(6, &[Open(9)]).selected(), None);
	}
}
