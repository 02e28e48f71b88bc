use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let document = window.as_ref().and_then(|w| w.document());

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(root) = document.as_ref().and_then(|d| d.document_element()) {
                    is_scrolled.set(root.scroll_top() > config::HEADER_SCROLLED_OFFSET);
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
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every link scrolls to its section and closes the mobile menu.
    let link = |section: Section, class: &'static str| {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(section);
        });
        html! {
            <a href={format!("#{}", section.id())} class={class} {onclick}>
                {section.label()}
            </a>
        }
    };

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Section::Hero);
        })
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={go_home}>
                    <svg class="nav-logo-icon" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="m8 3 4 8 5-5 5 15H2L8 3z" />
                    </svg>
                    <span class="sr-only">{config::BRAND_NAME}</span>
                </a>

                <nav class="nav-links">
                    { for Section::NAV.iter().map(|section| link(*section, "nav-link")) }
                </nav>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu.clone()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="mobile-menu-backdrop" onclick={toggle_menu}></div>
                <div class="mobile-menu-panel">
                    { for Section::NAV.iter().map(|section| link(*section, "mobile-link")) }
                </div>
            </div>
        </header>
    }
}
