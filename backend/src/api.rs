use std::sync::Arc;
use axum::{extract::State, Json};
use chrono::Utc;
use shared_data::{EventDetails, TimeRemaining};

pub async fn get_event(State(event): State<Arc<EventDetails>>) -> Json<EventDetails> {
	Json(EventDetails::clone(&event))
}

// for clients whose own clock can't be trusted
pub async fn get_countdown(State(event): State<Arc<EventDetails>>) -> Json<TimeRemaining> {
	let remaining = event.remaining_at(&Utc::now());
	tracing::debug!(?remaining, "Computed countdown");
	Json(remaining)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeDelta;

	#[tokio::test]
	async fn event_is_served_as_configured() {
		let event = EventDetails {
			target: EventDetails::parse_target("2026-03-15T11:00:00-06:00").unwrap(),
			photos: vec!["/a.webp".into()]
		};

		let Json(served) = get_event(State(Arc::new(event.clone()))).await;
		assert_eq!(served, event);
	}

	#[tokio::test]
	async fn countdown_uses_the_server_clock() {
		let past = EventDetails {
			target: (Utc::now() - TimeDelta::minutes(5)).fixed_offset(),
			photos: vec![]
		};
		let Json(remaining) = get_countdown(State(Arc::new(past))).await;
		assert!(remaining.is_elapsed());

		// a few seconds of slack so a slow test runner doesn't tip this into 1 day, 23 hours
		let future = EventDetails {
			target: (Utc::now() + TimeDelta::days(2) + TimeDelta::seconds(30)).fixed_offset(),
			photos: vec![]
		};
		let Json(remaining) = get_countdown(State(Arc::new(future))).await;
		assert_eq!((remaining.days, remaining.hours, remaining.minutes), (2, 0, 0));
	}
}
