//! Sign-out button for coaches, "Accès Coach" link for visitors.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn SessionButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            auth.update(|a| a.coach = None);
            if let Some(w) = web_sys::window() {
                if let Err(e) = w.location().reload() {
                    log::warn!("reload failed: {e:?}");
                }
            }
        });
    };

    view! {
        <div class="session-button">
            <Show
                when=move || auth.with(AuthState::can_edit)
                fallback=|| view! { <a href="/login" class="btn btn--coach">"Accès Coach"</a> }
            >
                <button class="btn btn--sign-out" on:click=on_sign_out>
                    "Se déconnecter"
                </button>
            </Show>
        </div>
    }
}
