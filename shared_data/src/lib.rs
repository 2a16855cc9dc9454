use chrono::{DateTime, Datelike, FixedOffset};

mod countdown;
mod event;
mod gallery;

pub use countdown::{TimeRemaining, TimeUnit};
pub use event::{EventDetails, EventError};
pub use gallery::GallerySelection;

const WEEKDAYS: [&str; 7] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"];
const MONTHS: [&str; 12] = [
	"enero", "febrero", "marzo", "abril", "mayo", "junio",
	"julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre"
];

/// The event date in Spanish, in the event's own local time (e.g. `Domingo, 15 de marzo de 2026,
/// 11:00`). chrono only localizes behind an unstable feature, so the names live here.
#[must_use]
pub fn target_time_string(target: &DateTime<FixedOffset>) -> String {
	format!(
		"{}, {} de {} de {}, {}",
		WEEKDAYS[target.weekday().num_days_from_monday() as usize],
		target.day(),
		MONTHS[target.month0() as usize],
		target.year(),
		target.format("%H:%M")
	)
}

pub static BASE_STYLE: &str = r#"
* {
	--body-background: #f7f9fc;
	--card-background: #ffffff;
	--main-text: #3a3f47;
	--secondary-text: #8a94a6;
	--border-color: #dfe6ee;
	--accent: #a9c8e8;
	--overlay: rgba(40, 44, 52, 0.9);
	font-family: Georgia, serif;
	color: var(--main-text);
}
body {
	background-color: var(--body-background);
	margin: 0;
}
section {
	max-width: 900px;
	margin: 0 auto;
	padding: 40px 20px;
	text-align: center;
}
#countdown {
	display: flex;
	justify-content: center;
	flex-wrap: wrap;
	gap: 16px;
}
.time-unit {
	display: flex;
	flex-direction: column;
	align-items: center;
}
.time-value {
	width: 88px;
	height: 88px;
	line-height: 88px;
	font-size: 36px;
	border-radius: 16px;
	border: 1px solid var(--border-color);
	background-color: var(--card-background);
}
.time-label {
	margin-top: 10px;
	font-size: 13px;
	letter-spacing: 2px;
	text-transform: uppercase;
	color: var(--secondary-text);
}
#gallery {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
	gap: 16px;
}
#gallery img {
	width: 100%;
	aspect-ratio: 1;
	object-fit: cover;
	border-radius: 16px;
	cursor: pointer;
}
#lightbox {
	position: fixed;
	inset: 0;
	z-index: 50;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: var(--overlay);
}
#lightbox img {
	max-width: 90vw;
	max-height: 85vh;
	object-fit: contain;
	border-radius: 8px;
}
#lightbox button {
	position: absolute;
	background: none;
	border: none;
	color: white;
	font-size: 32px;
	cursor: pointer;
}
#lightbox-close { top: 16px; right: 16px; }
#lightbox-prev { left: 16px; }
#lightbox-next { right: 16px; }
#lightbox-caption {
	position: absolute;
	bottom: 16px;
	color: rgba(255, 255, 255, 0.8);
	font-size: 14px;
}
#credits {
	text-align: center;
	font-size: 13px;
	color: var(--secondary-text);
	margin: 20px auto;
}
"#;

#[cfg(test)]
#[test]
fn target_time_string_is_spanish_and_local() {
	let target = EventDetails::parse_target("2026-03-15T11:00:00-06:00").unwrap();
	assert_eq!(target_time_string(&target), "Domingo, 15 de marzo de 2026, 11:00");

	let target = EventDetails::parse_target("2027-09-01T18:30:00+02:00").unwrap();
	assert_eq!(target_time_string(&target), "Miércoles, 1 de septiembre de 2027, 18:30");
}
