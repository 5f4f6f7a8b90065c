//! Lineup page: category selector, coach tools, and the pitch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Visitors see the lineup of the selected category; a signed-in
//! coach also gets the add form, dragging, and delete buttons. Rows are
//! refetched whenever the selected category changes.

use leptos::html::Div;
use leptos::prelude::*;
use pitch::drag::DragTracker;

use crate::components::category_picker::CategoryPicker;
use crate::components::pitch::Pitch;
use crate::components::player_form::PlayerForm;
use crate::components::player_token::{DragOffset, PlayerToken};
use crate::components::session_button::SessionButton;
use crate::state::auth::AuthState;
use crate::state::lineup::LineupState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lineup = expect_context::<RwSignal<LineupState>>();

    let editable = Signal::derive(move || auth.with(AuthState::can_edit));
    let club_name = Signal::derive(move || lineup.with(|l| l.club.name.clone()));
    let category = Memo::new(move |_| lineup.with(|l| l.category.clone()));

    let container = NodeRef::<Div>::new();
    let tracker = StoredValue::new(DragTracker::default());
    let drag_offset = RwSignal::<DragOffset>::new(None);

    Effect::new(move || load_players(lineup, category.get()));

    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let measured = container
                .get_untracked()
                .map(|el| crate::util::layout::element_size(&el))
                .unwrap_or_default();
            let result = lineup.with_untracked(|l| {
                crate::util::export::export_png(&l.club.name, &l.category, &l.players, measured)
            });
            if let Err(e) = result {
                log::error!("export failed: {e}");
            }
        }
    };

    view! {
        <main class="home-page">
            <SessionButton/>
            <h1 class="home-page__title">{move || club_name.get()}</h1>

            <CategoryPicker/>

            <Show when=move || editable.get()>
                <PlayerForm/>
            </Show>

            <button class="btn btn--export" on:click=on_export>
                "📸 Télécharger la compo"
            </button>

            <div class="pitch-frame">
                <Show when=move || lineup.with(|l| l.loading)>
                    <div class="pitch-frame__loading">"Chargement..."</div>
                </Show>
                <Pitch node_ref=container club_name=club_name>
                    <For
                        each=move || lineup.with(|l| l.players.clone())
                        key=|p| p.id
                        children=move |player| {
                            view! {
                                <PlayerToken
                                    player=player
                                    editable=editable
                                    container=container
                                    tracker=tracker
                                    drag_offset=drag_offset
                                />
                            }
                        }
                    />
                </Pitch>
            </div>

            <Show when=move || !editable.get()>
                <p class="home-page__visitor">{move || auth.with(AuthState::status_label)}</p>
            </Show>
        </main>
    }
}

/// Fetch the rows of `category` into lineup state. Errors are logged only.
fn load_players(lineup: RwSignal<LineupState>, category: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_players(&category).await {
            Ok(rows) => lineup.update(|l| {
                if !l.replace_for_category(&category, rows) {
                    log::debug!("dropped stale rows for {category}");
                }
            }),
            Err(e) => {
                log::error!("loading {category} failed: {e}");
                lineup.update(|l| l.fetch_failed(&category));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lineup, category);
    }
}
