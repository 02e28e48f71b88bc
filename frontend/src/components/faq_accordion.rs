use yew::prelude::*;

use crate::accordion::AccordionState;
use crate::components::reveal::Reveal;
use crate::content::FaqEntry;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class="accordion">
            { for props.entries.iter().map(|entry| {
                let is_open = state.is_open(entry.id);
                let toggle = {
                    let state = state.clone();
                    let id = entry.id;
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set(state.toggle(id));
                    })
                };
                let panel_id = format!("{}-panel", entry.id);

                html! {
                    <Reveal key={entry.id}>
                        <div class={classes!("accordion-item", is_open.then(|| "open"))}>
                            <button
                                class="accordion-trigger"
                                aria-expanded={is_open.to_string()}
                                aria-controls={panel_id.clone()}
                                onclick={toggle}
                            >
                                <span>{entry.question}</span>
                                <span class="accordion-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            <div id={panel_id} class="accordion-content" hidden={!is_open}>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    </Reveal>
                }
            })}
        </div>
    }
}
