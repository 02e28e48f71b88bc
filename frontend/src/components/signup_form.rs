use gloo_net::http::Request;
use log::info;
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::config;

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, PartialEq)]
enum SignupStatus {
    Idle,
    Sending,
    Done,
    Failed(String),
}

async fn submit_signup(url: &str, email: &str) -> Result<(), String> {
    let request = Request::post(url)
        .json(&json!({ "email": email }))
        .map_err(|e| format!("Could not encode request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        return Ok(());
    }
    match response.json::<ErrorResponse>().await {
        Ok(err_resp) => Err(err_resp.error),
        Err(_) => Err(format!("Sign up failed with status {}", response.status())),
    }
}

/// Email capture for launch notifications.
#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| SignupStatus::Idle);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim().to_string();
            if address.is_empty() || *status == SignupStatus::Sending {
                return;
            }

            match config::signup_url() {
                Some(url) => {
                    status.set(SignupStatus::Sending);
                    let status = status.clone();
                    let email = email.clone();
                    spawn_local(async move {
                        match submit_signup(url, &address).await {
                            Ok(()) => {
                                info!("Signed up for launch updates");
                                email.set(String::new());
                                status.set(SignupStatus::Done);
                            }
                            Err(err) => {
                                gloo_console::error!("Sign up failed:", err.clone());
                                status.set(SignupStatus::Failed(err));
                            }
                        }
                    });
                }
                None => {
                    info!("No sign-up endpoint configured, recorded {} locally", address);
                    email.set(String::new());
                    status.set(SignupStatus::Done);
                }
            }
        })
    };

    let sending = *status == SignupStatus::Sending;

    html! {
        <div class="signup">
            <form class="signup-form" {onsubmit}>
                <input
                    type="email"
                    required=true
                    placeholder="Enter your email"
                    aria-label="Email address"
                    value={(*email).clone()}
                    {oninput}
                />
                <button type="submit" class="button button-secondary" disabled={sending}>
                    {if sending { "Signing Up..." } else { "Sign Up" }}
                </button>
            </form>
            {
                match &*status {
                    SignupStatus::Done => html! {
                        <p class="signup-message success">{"Thanks! You're on the list."}</p>
                    },
                    SignupStatus::Failed(err) => html! {
                        <p class="signup-message error">{err}</p>
                    },
                    _ => html! {},
                }
            }
            <p class="signup-note">
                {"Sign up to get notified when we launch. "}
                <a href="#">{"Terms & Conditions"}</a>
            </p>
        </div>
    }
}
