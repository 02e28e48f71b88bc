use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
            <nav class="footer-links">
                <a href="#">{"Terms of Service"}</a>
                <a href="#">{"Privacy"}</a>
            </nav>
        </footer>
    }
}
