use super::*;
use crate::consts::{PITCH_HEIGHT_PX, PITCH_WIDTH_PX};

const EPSILON: f64 = 1e-9;

fn player_at(x: f64, y: f64) -> Player {
    Player {
        id: 1,
        last_name: "Martin".to_owned(),
        first_name: String::new(),
        category: "U9".to_owned(),
        number: "1".to_owned(),
        role: Role::Outfield,
        x,
        y,
    }
}

fn desktop() -> Size {
    Size::new(PITCH_WIDTH_PX, PITCH_HEIGHT_PX)
}

#[test]
fn origin_token_sits_on_centre_spot() {
    let c = token_center(desktop(), &player_at(0.0, 0.0));
    assert!((c.x - 200.0).abs() < EPSILON);
    assert!((c.y - 300.0).abs() < EPSILON);
}

#[test]
fn offset_token_follows_percent() {
    let c = token_center(desktop(), &player_at(25.0, -10.0));
    assert!((c.x - 300.0).abs() < EPSILON);
    assert!((c.y - 240.0).abs() < EPSILON);
}

#[test]
fn out_of_range_token_is_pulled_inside() {
    let c = token_center(desktop(), &player_at(50.0, 50.0));
    assert!((c.x - (PITCH_WIDTH_PX - TOKEN_HALF_PX)).abs() < EPSILON);
    assert!((c.y - (PITCH_HEIGHT_PX - TOKEN_HALF_PX)).abs() < EPSILON);
}

#[test]
fn role_colors_differ_by_role() {
    assert_eq!(role_colors(Role::Goalkeeper), (GOALKEEPER_FILL, GOALKEEPER_TEXT));
    assert_eq!(role_colors(Role::Outfield), (OUTFIELD_FILL, OUTFIELD_TEXT));
}
