use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::image::FallbackImage;
use crate::popup::PopupState;

#[derive(Properties, PartialEq)]
pub struct FeatureDialogProps {
    pub state: PopupState,
    pub on_close: Callback<()>,
}

/// Modal with the full story of the selected feature. Closes on overlay
/// click, the close button, or Escape.
#[function_component(FeatureDialog)]
pub fn feature_dialog(props: &FeatureDialogProps) -> Html {
    {
        // Closing an already closed popup is a no-op, so no open check here.
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let Some(feature) = props.state.showing() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the overlay.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-overlay" onclick={close.clone()}>
            <div
                class="dialog-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="feature-dialog-title"
                onclick={keep_open}
            >
                <button class="dialog-close" aria-label="Close" onclick={close}>
                    {"×"}
                </button>
                <div class="dialog-header">
                    <h2 id="feature-dialog-title">{feature.title}</h2>
                    <p class="dialog-description">{feature.description}</p>
                </div>
                <div class="dialog-body">
                    <div class="dialog-image">
                        <FallbackImage
                            src={feature.image}
                            alt={feature.alt}
                            width={200}
                            height={200}
                        />
                    </div>
                    <p class="dialog-long-description">{feature.long_description}</p>
                </div>
            </div>
        </div>
    }
}
