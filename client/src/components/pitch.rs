//! Presentational pitch: grass, line markings, club watermark.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lineup page renders tokens as children of this component and measures
//! its container (`node_ref`) for drag arithmetic. Markings come from
//! `pitch::markings`, the same shapes the PNG export draws.

use leptos::html::Div;
use leptos::prelude::*;
use pitch::consts::{PITCH_HEIGHT_PX, PITCH_WIDTH_PX};
use pitch::geometry::Size;
use pitch::markings::{LINE_WIDTH, pitch_markings, scale_for};

/// Pitch container with markings drawn as an SVG underlay.
#[component]
pub fn Pitch(
    /// Bound to the container so callers can measure it.
    node_ref: NodeRef<Div>,
    /// Watermark text.
    #[prop(into)]
    club_name: Signal<String>,
    children: Children,
) -> impl IntoView {
    let size = RwSignal::new(Size::new(PITCH_WIDTH_PX, PITCH_HEIGHT_PX));

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            if let Some(el) = node_ref.get_untracked() {
                let measured = crate::util::layout::element_size(&el);
                if !measured.is_empty() {
                    size.set(measured);
                }
            }
        };
        Effect::new(move || {
            if node_ref.get().is_some() {
                measure();
            }
        });
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let view_box = move || {
        let s = size.get();
        format!("0 0 {:.0} {:.0}", s.width, s.height)
    };
    let stroke_width = move || format!("{:.2}", LINE_WIDTH * scale_for(size.get()).max(0.5));
    let markings = move || {
        pitch_markings(size.get())
            .into_iter()
            .map(|m| {
                let class = if m.is_filled() { "pitch__spot" } else { "pitch__line" };
                view! { <path class=class d=m.svg_path()/> }
            })
            .collect_view()
    };

    view! {
        <div class="pitch" node_ref=node_ref>
            <svg class="pitch__markings" viewBox=view_box stroke-width=stroke_width aria-hidden="true">
                {markings}
            </svg>
            <div class="pitch__watermark" aria-hidden="true">{move || club_name.get().to_uppercase()}</div>
            {children()}
        </div>
    }
}
