use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// How far the hero background drifts either way, in percent of its height.
pub const PARALLAX_RANGE_PERCENT: f64 = 20.0;

/// Scroll progress of an element through the viewport: 0 while its top is
/// at the bottom edge of the viewport, 1 once its bottom has left the top.
///
/// `element_top` is relative to the viewport, as from `getBoundingClientRect`.
pub fn scroll_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + element_height;
    if !travel.is_finite() || travel <= 0.0 || !element_top.is_finite() {
        return 0.0;
    }
    ((viewport_height - element_top) / travel).clamp(0.0, 1.0)
}

/// Maps scroll progress onto a vertical offset from -20% to 20%.
pub fn parallax_offset(progress: f64) -> f64 {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    -PARALLAX_RANGE_PERCENT + 2.0 * PARALLAX_RANGE_PERCENT * progress
}

fn measure(element: &Element) -> Option<f64> {
    let window = web_sys::window()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(parallax_offset(scroll_progress(rect.top(), rect.height(), viewport_height)))
}

/// Current parallax offset (percent) for the referenced element, updated on
/// every window scroll.
#[hook]
pub fn use_parallax_offset(node: NodeRef) -> f64 {
    let offset = use_state(|| parallax_offset(0.0));

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let window = web_sys::window();
                let node = node.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(value) = node.cast::<Element>().as_ref().and_then(measure) {
                        offset.set(value);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("could not listen for scroll events: {:?}", err);
                    }
                }

                // Initial measurement
                if let Err(err) = scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                {
                    debug!("initial parallax measurement failed: {:?}", err);
                }

                move || {
                    if let Some(window) = window {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            debug!("could not remove scroll listener: {:?}", err);
                        }
                    }
                }
            },
            node,
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_entry_to_exit() {
        // 800px viewport, 600px tall hero.
        assert_eq!(scroll_progress(800.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-600.0, 600.0, 800.0), 1.0);
        assert_eq!(scroll_progress(100.0, 600.0, 800.0), 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(5000.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-5000.0, 600.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 600.0, 800.0), 0.0);
    }

    #[test]
    fn offset_maps_linearly() {
        assert_eq!(parallax_offset(0.0), -20.0);
        assert_eq!(parallax_offset(0.5), 0.0);
        assert_eq!(parallax_offset(1.0), 20.0);
        assert_eq!(parallax_offset(2.0), 20.0);
        assert_eq!(parallax_offset(f64::NAN), -20.0);
    }
}
