//! Coach-only form adding a player to the selected category.
//!
//! New players are inserted at the pitch centre. A blank last name is
//! ignored; any other rejection (client-side validation or server error)
//! raises a blocking alert.

#[cfg(test)]
#[path = "player_form_test.rs"]
mod player_form_test;

use leptos::prelude::*;
use roster::RosterError;

use crate::net::types::{NewPlayer, Role};
use crate::state::lineup::LineupState;

/// Alert text for a failed insert.
pub const INSERT_FAILED: &str = "Erreur ajout";

/// Raw form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    pub last_name: String,
    pub first_name: String,
    pub number: String,
    pub role: Role,
}

impl PlayerDraft {
    /// Build the insert payload for `category`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of [`NewPlayer::normalized`].
    pub fn to_new_player(&self, category: &str) -> Result<NewPlayer, RosterError> {
        NewPlayer {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            number: self.number.clone(),
            role: self.role,
            category: category.to_owned(),
        }
        .normalized()
    }
}

#[component]
pub fn PlayerForm() -> impl IntoView {
    let lineup = expect_context::<RwSignal<LineupState>>();
    let draft = RwSignal::new(PlayerDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let category = lineup.with_untracked(|l| l.category.clone());
        let payload = match draft.with_untracked(|d| d.to_new_player(&category)) {
            Ok(payload) => payload,
            Err(RosterError::MissingLastName) => return,
            Err(e) => {
                alert_insert_failed(&e.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_player(&payload).await {
                Ok(player) => {
                    lineup.update(|l| l.push(player));
                    draft.set(PlayerDraft::default());
                }
                Err(e) => alert_insert_failed(&e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            busy.set(false);
        }
    };

    view! {
        <form class="player-form" on:submit=on_submit>
            <label class="player-form__field">
                <span>"Nom"</span>
                <input
                    type="text"
                    placeholder="Nom"
                    prop:value=move || draft.with(|d| d.last_name.clone())
                    on:input=move |ev| draft.update(|d| d.last_name = event_target_value(&ev))
                />
            </label>
            <label class="player-form__field">
                <span>"Prénom"</span>
                <input
                    type="text"
                    placeholder="Prénom"
                    prop:value=move || draft.with(|d| d.first_name.clone())
                    on:input=move |ev| draft.update(|d| d.first_name = event_target_value(&ev))
                />
            </label>
            <label class="player-form__field player-form__field--narrow">
                <span>"N°"</span>
                <input
                    type="number"
                    placeholder="10"
                    min="0"
                    max="999"
                    prop:value=move || draft.with(|d| d.number.clone())
                    on:input=move |ev| draft.update(|d| d.number = event_target_value(&ev))
                />
            </label>
            <label class="player-form__field">
                <span>"Poste"</span>
                <select
                    prop:value=move || draft.with(|d| d.role.as_str())
                    on:change=move |ev| {
                        let role = Role::parse(&event_target_value(&ev)).unwrap_or_default();
                        draft.update(|d| d.role = role);
                    }
                >
                    <option value=Role::Outfield.as_str()>{Role::Outfield.label()}</option>
                    <option value=Role::Goalkeeper.as_str()>{Role::Goalkeeper.label()}</option>
                </select>
            </label>
            <button class="btn btn--add" type="submit" disabled=move || busy.get()>
                "+"
            </button>
        </form>
    }
}

fn alert_insert_failed(detail: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::error!("insert failed: {detail}");
        if let Some(w) = web_sys::window() {
            if let Err(e) = w.alert_with_message(INSERT_FAILED) {
                log::warn!("alert unavailable: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = detail;
    }
}
