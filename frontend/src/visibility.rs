use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fires once, the first time an element is at least `threshold` visible,
/// and stays quiet afterwards no matter how often visibility changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feeds one observation; returns true only on the call that fires.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.fired || !intersecting || ratio.is_nan() {
            return false;
        }
        if ratio >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }
}

/// A live `IntersectionObserver` watching one element. Dropping it
/// disconnects the observer and frees the JS callback.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` the first time `target` becomes `amount` visible.
///
/// Returns `None` if the browser has no `IntersectionObserver`; in that case
/// `on_enter` runs right away so content is never stuck hidden.
pub fn observe_once<F>(target: &Element, amount: f64, on_enter: F) -> Option<Observation>
where
    F: Fn() + 'static,
{
    let on_enter = std::rc::Rc::new(on_enter);
    let mut trigger = VisibilityTrigger::new(amount);

    let notify = on_enter.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if trigger.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                observer.disconnect();
                notify();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(trigger.threshold()));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
            on_enter();
            None
        }
    }
}

/// True from the moment the referenced element first becomes `amount`
/// visible, and for the rest of the component's life.
#[hook]
pub fn use_in_view_once(node: NodeRef, amount: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = if *in_view {
                    None
                } else {
                    node.cast::<Element>().and_then(|element| {
                        let in_view = in_view.clone();
                        observe_once(&element, amount, move || in_view.set(true))
                    })
                };
                move || drop(observation)
            },
            node,
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_threshold() {
        let mut trigger = VisibilityTrigger::new(0.5);
        assert!(!trigger.observe(0.0, false));
        assert!(!trigger.observe(0.2, true));
        assert!(!trigger.observe(0.45, true));
        assert!(!trigger.has_fired());
        assert!(trigger.observe(0.5, true));
        assert!(trigger.has_fired());
    }

    #[test]
    fn fires_only_once() {
        let mut trigger = VisibilityTrigger::new(0.5);
        assert!(trigger.observe(0.8, true));
        assert!(!trigger.observe(0.0, false));
        assert!(!trigger.observe(1.0, true));
        assert!(!trigger.observe(0.6, true));
    }

    #[test]
    fn ignores_ratio_without_intersection() {
        let mut trigger = VisibilityTrigger::new(0.3);
        assert!(!trigger.observe(0.9, false));
        assert!(!trigger.has_fired());
    }

    #[test]
    fn just_below_threshold_does_not_fire() {
        let mut trigger = VisibilityTrigger::new(0.5);
        assert!(!trigger.observe(0.499, true));
        assert!(!trigger.observe(0.4999, true));
        assert!(!trigger.has_fired());
        assert!(trigger.observe(0.5, true));
    }

    #[test]
    fn clamps_threshold() {
        assert_eq!(VisibilityTrigger::new(3.0).threshold(), 1.0);
        assert_eq!(VisibilityTrigger::new(-1.0).threshold(), 0.0);
        assert_eq!(VisibilityTrigger::new(f64::NAN).threshold(), 0.0);

        let mut trigger = VisibilityTrigger::new(0.5);
        assert!(!trigger.observe(f64::NAN, true));
    }
}
