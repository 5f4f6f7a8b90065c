//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, lineup::LineupState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and lineup contexts, loads the session and club
/// settings once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { coach: None, loading: true });
    let lineup = RwSignal::new(LineupState::default());

    provide_context(auth);
    provide_context(lineup);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let coach = crate::net::api::fetch_current_coach().await;
        auth.set(AuthState { coach, loading: false });
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_club().await {
            Ok(club) => lineup.update(|l| l.apply_club(club)),
            Err(e) => log::warn!("club settings unavailable: {e}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lineup-ui.css"/>
        <Title text=move || lineup.with(|l| l.club.name.clone())/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
