//! Team selector.
//!
//! Switching category clears the pitch; the lineup page reacts to the new
//! selection and fetches its rows.

use leptos::prelude::*;

use crate::state::lineup::LineupState;

#[cfg(test)]
#[path = "category_picker_test.rs"]
mod category_picker_test;

/// `(value, selected)` for each club category.
pub fn category_options(lineup: &LineupState) -> Vec<(String, bool)> {
    lineup.club.categories.iter().map(|c| (c.clone(), *c == lineup.category)).collect()
}

/// `<select>` over the club's categories.
#[component]
pub fn CategoryPicker() -> impl IntoView {
    let lineup = expect_context::<RwSignal<LineupState>>();

    let options = move || {
        lineup
            .with(category_options)
            .into_iter()
            .map(|(value, selected)| {
                let label = value.clone();
                view! { <option value=value selected=selected>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="category-picker">
            <span class="category-picker__label">"Équipe"</span>
            <select
                class="category-picker__select"
                prop:value=move || lineup.with(|l| l.category.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    lineup.update(|l| {
                        l.select_category(&value);
                    });
                }
            >
                {options}
            </select>
        </div>
    }
}
