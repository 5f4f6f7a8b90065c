#![allow(clippy::float_cmp)]

use super::*;
use crate::net::types::Role;

fn player(id: i64, category: &str) -> Player {
    Player {
        id,
        last_name: format!("Joueur{id}"),
        first_name: String::new(),
        category: category.to_owned(),
        number: id.to_string(),
        role: Role::Outfield,
        x: 0.0,
        y: 0.0,
    }
}

fn club(categories: &[&str]) -> ClubInfo {
    ClubInfo {
        name: "Club".to_owned(),
        categories: categories.iter().map(|c| (*c).to_owned()).collect(),
        default_category: categories[0].to_owned(),
    }
}

#[test]
fn default_selects_club_default_category() {
    let state = LineupState::default();
    assert_eq!(state.category, "Seniors A");
    assert!(state.loading);
    assert!(state.players.is_empty());
}

#[test]
fn select_category_clears_players() {
    let mut state = LineupState::default();
    state.replace_for_category("Seniors A", vec![player(1, "Seniors A")]);
    assert!(state.select_category("U11"));
    assert!(state.players.is_empty());
    assert!(state.loading);
    assert!(!state.select_category("U11"));
}

#[test]
fn replace_keeps_only_matching_rows() {
    let mut state = LineupState::default();
    let rows = vec![player(3, "Seniors A"), player(1, "U9"), player(2, "Seniors A")];
    assert!(state.replace_for_category("Seniors A", rows));
    let ids: Vec<i64> = state.players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert!(!state.loading);
}

#[test]
fn stale_fetch_result_is_dropped() {
    let mut state = LineupState::default();
    state.select_category("U9");
    assert!(!state.replace_for_category("Seniors A", vec![player(1, "Seniors A")]));
    assert!(state.players.is_empty());
    assert!(state.loading);
}

#[test]
fn fetch_failure_stops_loading_for_current_category_only() {
    let mut state = LineupState::default();
    state.fetch_failed("U9");
    assert!(state.loading);
    state.fetch_failed("Seniors A");
    assert!(!state.loading);
}

#[test]
fn push_ignores_other_categories_and_duplicates() {
    let mut state = LineupState::default();
    state.push(player(1, "Seniors A"));
    state.push(player(1, "Seniors A"));
    state.push(player(2, "U9"));
    assert_eq!(state.players.len(), 1);
}

#[test]
fn remove_is_immediate() {
    let mut state = LineupState::default();
    state.replace_for_category("Seniors A", vec![player(1, "Seniors A"), player(2, "Seniors A")]);
    let removed = state.remove(1);
    assert_eq!(removed.map(|p| p.id), Some(1));
    assert!(state.player(1).is_none());
    assert_eq!(state.remove(1), None);
}

#[test]
fn apply_position_updates_coordinates() {
    let mut state = LineupState::default();
    state.replace_for_category("Seniors A", vec![player(7, "Seniors A")]);
    assert!(state.apply_position(7, PositionUpdate { x: 12.5, y: -30.0 }));
    let p = state.player(7).cloned().unwrap_or_else(|| player(0, ""));
    assert_eq!((p.x, p.y), (12.5, -30.0));
    assert!(!state.apply_position(99, PositionUpdate { x: 0.0, y: 0.0 }));
}

#[test]
fn apply_club_keeps_offered_category() {
    let mut state = LineupState::default();
    state.select_category("U9");
    state.replace_for_category("U9", vec![player(1, "U9")]);
    state.apply_club(club(&["Seniors A", "U9"]));
    assert_eq!(state.category, "U9");
    assert_eq!(state.players.len(), 1);
}

#[test]
fn apply_club_resets_unknown_category() {
    let mut state = LineupState::default();
    state.apply_club(club(&["Vétérans", "U17"]));
    assert_eq!(state.category, "Vétérans");
    assert!(state.loading);
    assert_eq!(state.club.name, "Club");
}
