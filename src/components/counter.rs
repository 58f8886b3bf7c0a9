use std::cell::Cell;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Element;
use yew::prelude::*;

use crate::components::observer::VisibilityObserver;

const STATS_THRESHOLD: f64 = 0.4;
const COUNT_DURATION_MS: u32 = 850;
const COUNT_TICK_MS: u32 = 16;
const COUNT_STAGGER_MS: u32 = 140;

#[derive(Debug, Clone, PartialEq)]
pub struct StatFigure {
    pub amount: u64,
    pub caption: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroStatsProps {
    pub figures: Vec<StatFigure>,
}

/// The hero visual: goes `is-live` the first time it scrolls into view,
/// then each figure counts up, staggered by 140 ms per figure.
#[function_component(HeroStats)]
pub fn hero_stats(props: &HeroStatsProps) -> Html {
    let node = use_node_ref();
    let live = use_state(|| false);
    let observer = use_mut_ref(|| None::<VisibilityObserver>);

    {
        let node = node.clone();
        let live = live.clone();
        let observer = observer.clone();
        use_effect_with_deps(
            move |_| {
                if !VisibilityObserver::supported() {
                    live.set(true);
                } else if let Some(element) = node.cast::<Element>() {
                    let on_visible = {
                        let live = live.clone();
                        move || live.set(true)
                    };
                    match VisibilityObserver::once(&element, STATS_THRESHOLD, on_visible) {
                        Some(guard) => *observer.borrow_mut() = Some(guard),
                        None => live.set(true),
                    }
                }
                move || {
                    observer.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("hero-visual", (*live).then_some("is-live"))}>
            {
                for props.figures.iter().enumerate().map(|(idx, figure)| html! {
                    <div class="stat">
                        <span class="stat-value">
                            <CountUp
                                target={figure.amount}
                                delay_ms={idx as u32 * COUNT_STAGGER_MS}
                                live={*live}
                            />
                        </span>
                        <span class="stat-caption">{figure.caption}</span>
                    </div>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: u64,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(false)]
    pub live: bool,
}

/// Animates from zero to `target` over ~850 ms once `live` flips on.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let value = use_state(|| 0u64);
    let starter = use_mut_ref(|| None::<Timeout>);
    let ticker = use_mut_ref(|| None::<Interval>);

    {
        let value = value.clone();
        let starter = starter.clone();
        let ticker = ticker.clone();
        let target = props.target;
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |live| {
                if *live && target > 0 {
                    let timeout = Timeout::new(delay_ms, {
                        let ticker = ticker.clone();
                        move || {
                            let ticks = Cell::new(0u32);
                            let interval = Interval::new(COUNT_TICK_MS, move || {
                                ticks.set(ticks.get() + 1);
                                let elapsed = ticks.get() * COUNT_TICK_MS;
                                let progress =
                                    f64::min(f64::from(elapsed) / f64::from(COUNT_DURATION_MS), 1.0);
                                value.set(scaled_value(target, progress));
                            });
                            *ticker.borrow_mut() = Some(interval);
                        }
                    });
                    *starter.borrow_mut() = Some(timeout);
                }
                move || {
                    starter.borrow_mut().take();
                    ticker.borrow_mut().take();
                }
            },
            props.live,
        );
    }

    // Cancelling from inside the interval callback would drop the closure
    // while it runs, so the tick only writes state and this effect stops
    // the timer once the target is on screen.
    {
        let ticker = ticker.clone();
        let target = props.target;
        use_effect_with_deps(
            move |value| {
                if **value >= target {
                    ticker.borrow_mut().take();
                }
                || ()
            },
            value.clone(),
        );
    }

    html! { <>{format_gbp(*value)}</> }
}

fn scaled_value(target: u64, progress: f64) -> u64 {
    (target as f64 * progress).floor() as u64
}

pub fn format_gbp(value: u64) -> String {
    format!("GBP {}", group_thousands(value))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - offset;
        if offset > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_are_ungrouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
    }

    #[test]
    fn thousands_get_commas() {
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_400), "12,400");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn formatted_figures_carry_the_currency() {
        assert_eq!(format_gbp(12_400), "GBP 12,400");
    }

    #[test]
    fn scaling_is_monotonic_and_capped() {
        assert_eq!(scaled_value(850, 0.0), 0);
        assert_eq!(scaled_value(850, 0.5), 425);
        assert_eq!(scaled_value(850, 1.0), 850);
    }
}
