use yew::prelude::*;

use crate::config;
use crate::visibility::use_in_view_once;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::HEADING_REVEAL_THRESHOLD)]
    pub amount: f64,
    #[prop_or_default]
    pub delay_ms: u32,
    pub children: Children,
}

/// Fades and lifts its children into place the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(node.clone(), props.amount);

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
