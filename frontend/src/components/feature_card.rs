use yew::prelude::*;

use crate::components::image::FallbackImage;
use crate::config;
use crate::content::Feature;
use crate::visibility::use_in_view_once;

/// Keys that press a focused element acting as a button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: &'static Feature,
    pub index: usize,
    pub on_select: Callback<&'static Feature>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(node.clone(), config::CARD_REVEAL_THRESHOLD);

    let onclick = {
        let feature = props.feature;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(feature))
    };

    let onkeydown = {
        let feature = props.feature;
        let on_select = props.on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                // Space would otherwise scroll the page.
                e.prevent_default();
                on_select.emit(feature);
            }
        })
    };

    let delay = props.index as u32 * config::CARD_STAGGER_MS;

    html! {
        <div
            ref={node}
            class={classes!("feature-card", "reveal", visible.then(|| "visible"))}
            style={format!("transition-delay: {}ms;", delay)}
            role="button"
            tabindex="0"
            {onclick}
            {onkeydown}
        >
            <FallbackImage
                src={props.feature.image}
                alt={props.feature.alt}
                width={100}
                height={100}
                class="feature-card-image"
            />
            <h3>{props.feature.title}</h3>
            <p>{props.feature.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_open_the_card() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
    }

    #[test]
    fn other_keys_do_nothing() {
        for key in ["Tab", "Escape", "a", "ArrowDown", ""] {
            assert!(!is_activation_key(key), "{:?} should not open the card", key);
        }
    }
}
