use super::*;

#[test]
fn token_style_at_centre() {
    assert_eq!(
        token_style(Percent::default(), Point::default()),
        "left: calc(50% + 0.000%); top: calc(50% + 0.000%); transform: translate(calc(-50% + 0.0px), calc(-50% + 0.0px));"
    );
}

#[test]
fn token_style_with_drag_offset() {
    let style = token_style(Percent::new(12.5, -40.0), Point::new(30.0, -12.0));
    assert!(style.starts_with("left: calc(50% + 12.500%); top: calc(50% + -40.000%);"));
    assert!(style.ends_with("translate(calc(-50% + 30.0px), calc(-50% + -12.0px));"));
}
