use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use crate::{countdown::TimeRemaining, gallery::GallerySelection};

// 2026-03-15T11:00:00-06:00
const DEFAULT_TARGET_SECS: i64 = 1_773_594_000;
const DEFAULT_UTC_OFFSET_WEST_SECS: i32 = 6 * 3_600;

const DEFAULT_PHOTOS: [&str; 6] = [
	"https://images.unsplash.com/photo-1519689680058-324335c77eba?w=600&h=600&fit=crop",
	"https://images.unsplash.com/photo-1555252333-9f8e92e65df9?w=600&h=600&fit=crop",
	"https://images.unsplash.com/photo-1544126592-807ade215a0b?w=600&h=600&fit=crop",
	"https://images.unsplash.com/photo-1515488042361-ee00e0ddd4e4?w=600&h=600&fit=crop",
	"https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=600&h=600&fit=crop",
	"https://images.unsplash.com/photo-1566004100631-35d015d6a491?w=600&h=600&fit=crop",
];

#[derive(thiserror::Error, Debug)]
pub enum EventError {
	#[error("Couldn't parse event details: {0}")]
	Json(#[from] serde_json::Error),
	#[error("'{value}' isn't an RFC 3339 timestamp (e.g. 2026-03-15T11:00:00-06:00): {source}")]
	Target {
		value: String,
		source: chrono::ParseError
	}
}

/// Everything the countdown and gallery need to know about the celebration. This is set once
/// when the server starts and handed to the frontend as-is.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventDetails {
	/// Keeps the offset it was configured with, so it can be shown in the event's local time
	pub target: DateTime<FixedOffset>,
	#[serde(default)]
	pub photos: Vec<String>
}

impl Default for EventDetails {
	fn default() -> Self {
		let target = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(DEFAULT_TARGET_SECS);

		Self {
			target: FixedOffset::west_opt(DEFAULT_UTC_OFFSET_WEST_SECS)
				.map_or_else(|| target.fixed_offset(), |offset| target.with_timezone(&offset)),
			photos: DEFAULT_PHOTOS.iter().map(|p| (*p).to_string()).collect()
		}
	}
}

impl EventDetails {
	pub fn from_json(json: &str) -> Result<Self, EventError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn parse_target(value: &str) -> Result<DateTime<FixedOffset>, EventError> {
		DateTime::parse_from_rfc3339(value.trim())
			.map_err(|source| EventError::Target { value: value.to_string(), source })
	}

	/// Splits a comma-separated list of image urls, skipping blank entries
	#[must_use]
	pub fn parse_photos(list: &str) -> Vec<String> {
		list.split(',')
			.map(str::trim)
			.filter(|p| !p.is_empty())
			.map(str::to_string)
			.collect()
	}

	#[must_use]
	pub fn remaining_at<Tz: chrono::TimeZone>(&self, now: &DateTime<Tz>) -> TimeRemaining {
		TimeRemaining::between(&self.target, now)
	}

	#[must_use]
	pub fn gallery(&self) -> GallerySelection {
		GallerySelection::new(self.photos.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_matches_the_invitation() {
		let details = EventDetails::default();
		assert_eq!(details.target, EventDetails::parse_target("2026-03-15T11:00:00-06:00").unwrap());
		assert_eq!(details.target.offset(), &FixedOffset::west_opt(6 * 3_600).unwrap());
		assert_eq!(details.photos.len(), 6);
		assert_eq!(details.gallery().len(), 6);
	}

	#[test]
	fn target_keeps_its_offset() {
		let target = EventDetails::parse_target(" 2026-03-15T11:00:00-06:00 ").unwrap();
		// same instant as 17:00 UTC, but still 11:00 locally
		assert_eq!(target, EventDetails::parse_target("2026-03-15T17:00:00Z").unwrap());
		assert_eq!(target.to_rfc3339(), "2026-03-15T11:00:00-06:00");
	}

	#[test]
	fn bad_target_names_the_value() {
		let err = EventDetails::parse_target("March 15th").unwrap_err();
		assert!(matches!(err, EventError::Target { ref value, .. } if value == "March 15th"));
		assert!(err.to_string().contains("March 15th"));
	}

	#[test]
	fn photo_list_skips_blanks() {
		assert_eq!(
			EventDetails::parse_photos(" /a.webp,, /b.webp ,"),
			["/a.webp", "/b.webp"]
		);
		assert!(EventDetails::parse_photos("").is_empty());
	}

	#[test]
	fn json_without_photos_has_an_empty_gallery() {
		let details = EventDetails::from_json(r#"{ "target": "2026-03-15T11:00:00-06:00" }"#).unwrap();
		assert_eq!(details.target, EventDetails::default().target);
		assert!(details.gallery().is_empty());
		assert_eq!(crate::target_time_string(&details.target), "Domingo, 15 de marzo de 2026, 11:00");
	}

	#[test]
	fn json_must_have_a_target() {
		assert!(matches!(
			EventDetails::from_json(r#"{ "photos": ["/a.webp"] }"#),
			Err(EventError::Json(_))
		));
	}

	#[test]
	fn remaining_is_measured_against_the_target() {
		let details = EventDetails::default();
		let day_before = details.target - TimeDelta::days(1);
		assert_eq!(details.remaining_at(&day_before), TimeRemaining { days: 1, ..TimeRemaining::ZERO });
		assert!(details.remaining_at(&details.target).is_elapsed());
	}
}
