use web_sys::Event;
use yew::prelude::*;

use crate::config;

/// The path to actually load: the placeholder when `src` is blank or has
/// already failed to load.
pub fn resolve_image(src: &str, failed: bool) -> &str {
    if failed || src.trim().is_empty() {
        config::PLACEHOLDER_IMAGE
    } else {
        src
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub width: u32,
    pub height: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);

    // A new source gets a fresh chance to load.
    {
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                if *failed {
                    failed.set(false);
                }
                || ()
            },
            props.src.clone(),
        );
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            if !*failed {
                failed.set(true);
            }
        })
    };

    html! {
        <img
            src={resolve_image(&props.src, *failed).to_string()}
            alt={props.alt.clone()}
            width={props.width.to_string()}
            height={props.height.to_string()}
            loading="lazy"
            class={props.class.clone()}
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_placeholder() {
        assert_eq!(resolve_image("", false), config::PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image("   ", false), config::PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image("/images/robust-security.png", true), config::PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image("/images/robust-security.png", false), "/images/robust-security.png");
    }
}
