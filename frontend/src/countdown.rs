use chrono::{DateTime, FixedOffset};
use gloo_timers::callback::Interval;
use shared_data::TimeRemaining;
use yew::prelude::*;

const TICK_MS: u32 = 1_000;

#[derive(Properties, PartialEq, Eq)]
pub struct CountdownProps {
	pub target: DateTime<FixedOffset>
}

fn remaining_until(target: &DateTime<FixedOffset>) -> TimeRemaining {
	// Date::now() is always a whole number of ms, so the cast doesn't lose anything
	DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
		.map_or(TimeRemaining::ZERO, |now| TimeRemaining::between(target, &now))
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
	let remaining = use_state(|| remaining_until(&props.target));

	{
		let remaining = remaining.clone();
		use_effect_with(props.target, move |target| {
			let target = *target;
			remaining.set(remaining_until(&target));

			// dropping the interval is what stops it, so it has to live until cleanup
			let interval = Interval::new(TICK_MS, move || remaining.set(remaining_until(&target)));
			move || drop(interval)
		});
	}

	html! {
		<section id="countdown-section">
			<h2>{ "Cuenta Regresiva para el Gran Día" }</h2>
			<p>{ "Acompáñanos a celebrar esta bendecida ocasión" }</p>
			<p class="event-date">{ shared_data::target_time_string(&props.target) }</p>
			<div id="countdown">
				{ for remaining.units().into_iter().map(|unit| html! {
					<div class="time-unit" key={ unit.label }>
						<span class="time-value">{ unit.padded() }</span>
						<span class="time-label">{ unit.label }</span>
					</div>
				}) }
			</div>
		</section>
	}
}
