//! Coach sign-in page (email + password).
//!
//! Any rejection is reported with the same generic message so the form does
//! not reveal which half of the credentials was wrong.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Credentials;

/// Message shown for every failed sign-in.
pub const SIGN_IN_FAILED: &str = "Email ou mot de passe incorrect";

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns [`SIGN_IN_FAILED`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(SIGN_IN_FAILED);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&credentials).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href("/") {
                            log::warn!("redirect failed: {e:?}");
                        }
                    }
                }
                Err(e) => {
                    log::info!("sign-in rejected: {e}");
                    error.set(Some(SIGN_IN_FAILED));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <main class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Accès Coach ⚽"</h1>
                <Show when=move || error.get().is_some()>
                    <div class="login-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <label class="login-field">
                    <span>"Email"</span>
                    <input
                        class="login-input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-field">
                    <span>"Mot de passe"</span>
                    <input
                        class="login-input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Se connecter"
                </button>
                <a href="/" class="login-back">"Retour au terrain (visiteur)"</a>
            </form>
        </main>
    }
}
