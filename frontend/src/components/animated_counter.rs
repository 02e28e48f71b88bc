use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::counter::{CounterAnimation, CounterTarget};
use crate::visibility::use_in_view_once;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: CounterTarget,
}

fn now_secs() -> f64 {
    web_sys::js_sys::Date::now() / 1000.0
}

/// Counts from 0 up to `target` once the number is half on screen, then stops.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), config::COUNTER_VISIBILITY_THRESHOLD);
    let display = use_state(|| props.target.sanitized().display(0.0));

    {
        let display = display.clone();
        use_effect_with_deps(
            move |(in_view, target): &(bool, CounterTarget)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *in_view {
                    let animation = CounterAnimation::new(*target, config::COUNTER_DURATION_SECS)
                        .unwrap_or_else(|err| {
                            warn!("{}", err);
                            CounterAnimation::sanitized(*target, config::COUNTER_DURATION_SECS)
                        });
                    let started = now_secs();
                    display.set(animation.frame(0.0));

                    let handle = interval_handle.clone();
                    let interval = Interval::new(config::FRAME_INTERVAL_MS, move || {
                        let elapsed = now_secs() - started;
                        display.set(animation.frame(elapsed));
                        if animation.is_finished(elapsed) {
                            // Can't drop the interval from inside its own tick.
                            if let Some(interval) = handle.borrow_mut().take() {
                                spawn_local(async move { drop(interval) });
                            }
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (in_view, props.target),
        );
    }

    html! {
        <span ref={node} class="counter">{ (*display).clone() }</span>
    }
}
