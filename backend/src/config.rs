use std::path::PathBuf;
use shared_data::{EventDetails, EventError};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("Couldn't read EVENT_FILE at {path}: {source}")]
	EventFile {
		path: String,
		source: std::io::Error
	},
	#[error(transparent)]
	Event(#[from] EventError)
}

#[derive(Debug)]
pub struct Config {
	pub port: u16,
	/// Where the compiled frontend (`frontend.js` + `frontend_bg.wasm`) lives
	pub pkg_dir: PathBuf,
	pub event: EventDetails
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	/// `EVENT_FILE` sets the whole event; `EVENT_TARGET` and `GALLERY_PHOTOS` then override
	/// single fields of whatever that produced (or the default event).
	pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		macro_rules! var_num{
			($key:expr, $default:expr, $type:ident) => {
				var($key).and_then(|v| v.parse::<$type>().ok())
					.unwrap_or($default)
			}
		}

		let port = var_num!("BACKEND_PORT", 8080, u16);
		let pkg_dir = var("PKG_DIR")
			.filter(|d| !d.is_empty())
			.unwrap_or_else(|| "./dist/pkg".into())
			.into();

		let mut event = match var("EVENT_FILE").filter(|f| !f.is_empty()) {
			Some(path) => {
				let json = std::fs::read_to_string(&path)
					.map_err(|source| ConfigError::EventFile { path, source })?;
				EventDetails::from_json(&json)?
			},
			None => EventDetails::default()
		};

		if let Some(target) = var("EVENT_TARGET").filter(|t| !t.is_empty()) {
			event.target = EventDetails::parse_target(&target)?;
		}

		if let Some(photos) = var("GALLERY_PHOTOS") {
			event.photos = EventDetails::parse_photos(&photos);
		}

		Ok(Self { port, pkg_dir, event })
	}
}
