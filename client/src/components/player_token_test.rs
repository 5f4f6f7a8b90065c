use super::*;

#[test]
fn jersey_colour_follows_role() {
    assert_eq!(jersey_class(Role::Goalkeeper), "token__jersey token__jersey--goalkeeper");
    assert_eq!(jersey_class(Role::Outfield), "token__jersey token__jersey--outfield");
}

#[test]
fn visitor_token_is_plain() {
    assert_eq!(token_class(false, false), "token");
}

#[test]
fn dragged_token_gets_both_modifiers() {
    assert_eq!(token_class(true, true), "token token--editable token--dragging");
}
