use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Frame step for the tick chain.
const TICK_MS: u32 = 16;

/// Ease-out cubic: fast start, settling toward the target.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: f64,
    #[prop_or(0.0)]
    pub from: f64,
    #[prop_or(2200)]
    pub duration_ms: u32,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(0)]
    pub decimals: usize,
}

/// Counts from `from` to `target`, one chained timeout per frame.
/// The final frame renders the exact target value.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &CounterProps) -> Html {
    let tick = use_state(|| 0u32);
    let total_ticks = (props.duration_ms / TICK_MS).max(1);

    {
        let tick_clone = tick.clone();
        let tick_setter = tick.setter();
        let delay_ms = props.delay_ms;
        use_effect(move || {
            if *tick_clone < total_ticks {
                let next = *tick_clone + 1;
                let delay = if *tick_clone == 0 {
                    delay_ms.max(TICK_MS)
                } else {
                    TICK_MS
                };
                let timeout = Timeout::new(delay, move || {
                    tick_setter.set(next);
                });
                timeout.forget();
            }
            || ()
        });
    }

    let progress = f64::from(*tick) / f64::from(total_ticks);
    let value = props.from + (props.target - props.from) * ease_out_cubic(progress);

    html! {
        <span>{ format!("{:.*}", props.decimals, value) }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for step in 0..=100 {
            let eased = ease_out_cubic(f64::from(step) / 100.0);
            assert!(eased >= prev);
            prev = eased;
        }
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }
}
