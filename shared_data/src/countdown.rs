use chrono::{DateTime, TimeZone};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// How long is left until the ceremony, broken down the way the countdown shows it. Once the
/// target has passed, every field stays at zero.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeRemaining {
	pub days: u64,
	pub hours: u8,
	pub minutes: u8,
	pub seconds: u8
}

impl TimeRemaining {
	pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

	/// Splits a millisecond delta into days/hours/minutes/seconds, truncating everything below a
	/// second.
	#[must_use]
	pub fn from_millis(delta: i64) -> Self {
		if delta <= 0 {
			return Self::ZERO;
		}

		// all of these are in range thanks to the `%`s, and delta is positive, so the casts can't
		// lose anything
		Self {
			days: (delta / MS_PER_DAY) as u64,
			hours: ((delta / MS_PER_HOUR) % 24) as u8,
			minutes: ((delta / MS_PER_MINUTE) % 60) as u8,
			seconds: ((delta / MS_PER_SECOND) % 60) as u8
		}
	}

	/// The caller hands in `now` so that this never touches a clock itself.
	#[must_use]
	pub fn between<Tz: TimeZone, Tz2: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz2>) -> Self {
		Self::from_millis(target.clone().signed_duration_since(now).num_milliseconds())
	}

	#[must_use]
	pub fn is_elapsed(&self) -> bool {
		*self == Self::ZERO
	}

	#[must_use]
	pub fn units(&self) -> [TimeUnit; 4] {
		[
			TimeUnit { value: self.days, label: "Días" },
			TimeUnit { value: u64::from(self.hours), label: "Horas" },
			TimeUnit { value: u64::from(self.minutes), label: "Minutos" },
			TimeUnit { value: u64::from(self.seconds), label: "Segundos" },
		]
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeUnit {
	pub value: u64,
	pub label: &'static str
}

impl TimeUnit {
	/// At least two digits, so `7` shows as `07` but `123` days stays `123`.
	#[must_use]
	pub fn padded(&self) -> String {
		format!("{:02}", self.value)
	}
}
