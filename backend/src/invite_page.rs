use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::Html};
use build_info::{VersionControl, GitInfo};
use chrono::Utc;
use horrorshow::{html, Raw, RenderOnce, TemplateBuffer, Template, helper::doctype};
use shared_data::{EventDetails, TimeRemaining};

// the frontend replaces everything inside #invite once it loads, so this is only what people see
// without javascript (or before the wasm shows up)
const MOUNT_SCRIPT: &str = r#"<script type="module">import init from "/pkg/frontend.js"; init();</script>"#;

build_info::build_info!(pub fn build);

pub async fn get_invite_page(
	State(event): State<Arc<EventDetails>>
) -> Result<Html<String>, (StatusCode, String)> {
	let remaining = event.remaining_at(&Utc::now());

	InvitePage { event, remaining }
		.into_string()
		.map(Html)
		.map_err(|e| {
			tracing::error!("Couldn't render invitation page: {e:?}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't render invitation: {e}"))
		})
}

pub struct InvitePage {
	pub event: Arc<EventDetails>,
	pub remaining: TimeRemaining
}

impl RenderOnce for InvitePage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { event, remaining } = self;

		tmpl << html! {
			: doctype::HTML;
			html(lang = "es") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : "Mi Bautizo";
					style : Raw(shared_data::BASE_STYLE);
				}
				body {
					div(id = "invite") {
						section(id = "countdown-section") {
							h2 : "Cuenta Regresiva para el Gran Día";
							p : "Acompáñanos a celebrar esta bendecida ocasión";
							p(class = "event-date") : shared_data::target_time_string(&event.target);
							div(id = "countdown") {
								@ for unit in remaining.units() {
									div(class = "time-unit") {
										span(class = "time-value") : unit.padded();
										span(class = "time-label") : unit.label;
									}
								}
							}
						}
						section(id = "gallery-section") {
							h2 : "Momentos Especiales";
							p : "Un vistazo a la vida de nuestro angelito";
							div(id = "gallery") {
								// no lightbox without the frontend, so just link straight to the photo
								@ for (idx, photo) in event.photos.iter().enumerate() {
									a(href = photo) {
										img(src = photo, alt = format_args!("Foto del bebé {}", idx + 1));
									}
								}
							}
						}
					}
					: Credits;
					: Raw(MOUNT_SCRIPT);
				}
			}
		};
	}
}

struct Credits;

impl RenderOnce for Credits {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let build_info = build();
		let compiler_info = &build_info.compiler;
		let unknown_commit = "?????".to_string();

		tmpl << html! {
			div(id = "credits") {
				: format!("This was built at {} using rustc {} {}, from commit ", build_info.timestamp, compiler_info.channel, compiler_info.version);
				: format!("{}, using ", match build_info.version_control {
					Some(VersionControl::Git(GitInfo { ref commit_id, .. })) => commit_id,
					_ => &unknown_commit
				});
				a(href = "https://github.com/tokio-rs/axum") : "axum";
				: ", ";
				a(href = "https://github.com/Stebalien/horrorshow-rs") : "horrorshow";
				: ", and ";
				a(href = "https://yew.rs") : "yew";
			}
		};
	}
}
