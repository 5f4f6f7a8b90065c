//! Draggable player token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `Pitch`. Pointer events feed a page-wide `DragTracker`;
//! the live translation is published through `drag_offset` so only the token
//! being dragged moves. On drop the new position is applied to lineup state
//! at once and persisted in the background.
//!
//! Visitors see the same tokens without drag or delete.

use leptos::html::Div;
use leptos::prelude::*;
use pitch::drag::{DragEvent, DragTracker};
use pitch::geometry::{Percent, Point};

use crate::net::types::{Player, PositionUpdate, Role};
use crate::state::lineup::LineupState;
use crate::util::layout::{pointer_point, token_style};

#[cfg(test)]
#[path = "player_token_test.rs"]
mod player_token_test;

/// Live drag translation of one token, in pixels.
pub type DragOffset = Option<(i64, Point)>;

/// CSS modifier for the jersey colour.
pub fn jersey_class(role: Role) -> &'static str {
    match role {
        Role::Goalkeeper => "token__jersey token__jersey--goalkeeper",
        Role::Outfield => "token__jersey token__jersey--outfield",
    }
}

/// Class list of the token wrapper.
pub fn token_class(editable: bool, dragging: bool) -> String {
    let mut class = String::from("token");
    if editable {
        class.push_str(" token--editable");
    }
    if dragging {
        class.push_str(" token--dragging");
    }
    class
}

/// One player on the pitch.
#[component]
pub fn PlayerToken(
    player: Player,
    /// Whether drag and delete are enabled.
    #[prop(into)]
    editable: Signal<bool>,
    /// Pitch container, measured at pointer-down.
    container: NodeRef<Div>,
    tracker: StoredValue<DragTracker>,
    drag_offset: RwSignal<DragOffset>,
) -> impl IntoView {
    let lineup = expect_context::<RwSignal<LineupState>>();
    let id = player.id;

    // Position comes from state so a drop re-renders without rebuilding the token.
    let position = move || {
        lineup.with(|l| l.player(id).map(|p| Percent::new(p.x, p.y))).unwrap_or_default()
    };
    let offset = move || match drag_offset.get() {
        Some((active, offset)) if active == id => offset,
        _ => Point::default(),
    };
    let dragging = move || matches!(drag_offset.get(), Some((active, _)) if active == id);
    let style = move || token_style(position(), offset());

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if !editable.get_untracked() {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("pointer capture unavailable: {e:?}");
                }
            }
        }
        let Some(size) = container_size(container) else {
            return;
        };
        let pointer = pointer_point(&ev);
        let start = position();
        tracker.update_value(|t| {
            t.begin(id, pointer, start, size);
        });
        drag_offset.set(Some((id, Point::default())));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let pointer = pointer_point(&ev);
        let event = tracker.try_update_value(|t| {
            if t.active_id() == Some(id) { t.update(pointer) } else { DragEvent::None }
        });
        if let Some(DragEvent::Moved { id, offset }) = event {
            drag_offset.set(Some((id, offset)));
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        let pointer = pointer_point(&ev);
        let event = tracker.try_update_value(|t| {
            if t.active_id() == Some(id) { t.finish(pointer) } else { DragEvent::None }
        });
        match event {
            Some(DragEvent::Dropped { id, position }) => {
                drag_offset.set(None);
                persist_drop(lineup, id, position.into());
            }
            Some(DragEvent::Released { .. }) => drag_offset.set(None),
            _ => {}
        }
    };

    let on_pointer_cancel = move |_: leptos::ev::PointerEvent| {
        let event = tracker.try_update_value(|t| if t.active_id() == Some(id) { t.cancel() } else { DragEvent::None });
        if matches!(event, Some(DragEvent::Released { .. })) {
            drag_offset.set(None);
        }
    };

    let on_delete = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        if editable.get_untracked() {
            delete_player(lineup, id);
        }
    };

    let label = player.label();
    let number = player.number.clone();
    let jersey = jersey_class(player.role);

    view! {
        <div
            class=move || token_class(editable.get(), dragging())
            style=style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            <div class=jersey>
                {number}
                <Show when=move || editable.get()>
                    <button class="token__delete" title="Supprimer" on:pointerdown=on_delete>
                        "✕"
                    </button>
                </Show>
            </div>
            <span class="token__label">{label}</span>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn container_size(container: NodeRef<Div>) -> Option<pitch::geometry::Size> {
    container.get_untracked().map(|el| crate::util::layout::element_size(&el))
}

#[cfg(not(feature = "hydrate"))]
fn container_size(_container: NodeRef<Div>) -> Option<pitch::geometry::Size> {
    None
}

/// Apply a drop locally, then persist it. Failures are logged; the local
/// position stays.
fn persist_drop(lineup: RwSignal<LineupState>, id: i64, position: PositionUpdate) {
    lineup.update(|l| {
        l.apply_position(id, position);
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::move_player(id, position).await {
            log::error!("move of player {id} not saved: {e}");
        }
    });
}

/// Remove a token locally, then delete the row. Failures are logged; the
/// token stays removed.
fn delete_player(lineup: RwSignal<LineupState>, id: i64) {
    lineup.update(|l| {
        l.remove(id);
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::delete_player(id).await {
            log::error!("delete of player {id} failed: {e}");
        }
    });
}
