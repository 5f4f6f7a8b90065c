use super::*;
use crate::net::types::ClubInfo;

fn lineup_with(categories: &[&str], selected: &str) -> LineupState {
    let mut state = LineupState::default();
    state.apply_club(ClubInfo {
        name: "Club".to_owned(),
        categories: categories.iter().map(|c| (*c).to_owned()).collect(),
        default_category: categories[0].to_owned(),
    });
    state.select_category(selected);
    state
}

#[test]
fn options_follow_club_order_and_mark_selection() {
    let state = lineup_with(&["U9", "U11", "Seniors A"], "U11");
    assert_eq!(
        category_options(&state),
        vec![("U9".to_owned(), false), ("U11".to_owned(), true), ("Seniors A".to_owned(), false)]
    );
}

#[test]
fn default_lineup_marks_default_category() {
    let options = category_options(&LineupState::default());
    let selected: Vec<_> = options.iter().filter(|(_, s)| *s).map(|(c, _)| c.as_str()).collect();
    assert_eq!(selected, vec!["Seniors A"]);
    assert_eq!(options.len(), roster::DEFAULT_CATEGORIES.len());
}
