use super::*;

fn sample_player() -> Player {
    Player {
        id: 7,
        last_name: "Dupont".to_owned(),
        first_name: "Marc".to_owned(),
        category: "Seniors A".to_owned(),
        number: "9".to_owned(),
        role: Role::Outfield,
        x: 12.5,
        y: -30.0,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_default_is_outfield() {
    assert_eq!(Role::default(), Role::Outfield);
}

#[test]
fn role_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Goalkeeper).unwrap(), "\"goalkeeper\"");
    assert_eq!(serde_json::to_string(&Role::Outfield).unwrap(), "\"outfield\"");
}

#[test]
fn role_parse_matches_as_str() {
    for role in [Role::Goalkeeper, Role::Outfield] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse(" goalkeeper "), Some(Role::Goalkeeper));
    assert_eq!(Role::parse("striker"), None);
}

#[test]
fn role_labels_are_french() {
    assert_eq!(Role::Goalkeeper.label(), "Gardien");
    assert_eq!(Role::Outfield.label(), "Joueur");
}

// =============================================================
// Player labels
// =============================================================

#[test]
fn label_uses_first_initial() {
    assert_eq!(sample_player().label(), "Dupont M.");
}

#[test]
fn label_without_first_name_is_last_name_only() {
    assert_eq!(player_label("Dupont", ""), "Dupont");
    assert_eq!(player_label("Dupont", "   "), "Dupont");
}

#[test]
fn label_handles_multibyte_initial() {
    assert_eq!(player_label("Lefèvre", "Élodie"), "Lefèvre É.");
}

#[test]
fn player_deserializes_with_missing_optional_fields() {
    let json = r#"{"id":3,"last_name":"Martin","category":"U11"}"#;
    let player: Player = serde_json::from_str(json).unwrap();
    assert_eq!(player.id, 3);
    assert_eq!(player.first_name, "");
    assert_eq!(player.number, "");
    assert_eq!(player.role, Role::Outfield);
    assert!(player.x.abs() < f64::EPSILON);
    assert!(player.y.abs() < f64::EPSILON);
}

#[test]
fn player_json_uses_wire_field_names() {
    let value = serde_json::to_value(sample_player()).unwrap();
    assert_eq!(value["last_name"], "Dupont");
    assert_eq!(value["role"], "outfield");
    assert_eq!(value["x"], 12.5);
}

// =============================================================
// NewPlayer validation
// =============================================================

fn new_player(last: &str, number: &str) -> NewPlayer {
    NewPlayer {
        last_name: last.to_owned(),
        first_name: "  Léa ".to_owned(),
        number: number.to_owned(),
        role: Role::Goalkeeper,
        category: " U13-U12 ".to_owned(),
    }
}

#[test]
fn normalized_trims_fields() {
    let p = new_player("  Bernard ", " 1 ").normalized().unwrap();
    assert_eq!(p.last_name, "Bernard");
    assert_eq!(p.first_name, "Léa");
    assert_eq!(p.number, "1");
    assert_eq!(p.category, "U13-U12");
    assert_eq!(p.role, Role::Goalkeeper);
}

#[test]
fn normalized_rejects_blank_last_name() {
    assert_eq!(new_player("   ", "1").normalized(), Err(RosterError::MissingLastName));
}

#[test]
fn normalized_rejects_blank_category() {
    let mut p = new_player("Bernard", "1");
    p.category = " ".to_owned();
    assert_eq!(p.normalized(), Err(RosterError::MissingCategory));
}

#[test]
fn normalized_accepts_empty_number() {
    assert!(new_player("Bernard", "").normalized().is_ok());
}

#[test]
fn normalized_rejects_non_digit_number() {
    assert_eq!(
        new_player("Bernard", "1a").normalized(),
        Err(RosterError::InvalidNumber("1a".to_owned()))
    );
    assert_eq!(
        new_player("Bernard", "-4").normalized(),
        Err(RosterError::InvalidNumber("-4".to_owned()))
    );
}

#[test]
fn normalized_rejects_long_number() {
    assert!(matches!(new_player("Bernard", "1000").normalized(), Err(RosterError::InvalidNumber(_))));
}

// =============================================================
// PositionUpdate
// =============================================================

#[test]
fn sanitized_keeps_in_range_values() {
    let p = PositionUpdate { x: -12.0, y: 40.0 }.sanitized().unwrap();
    assert_eq!(p, PositionUpdate { x: -12.0, y: 40.0 });
}

#[test]
fn sanitized_clamps_to_pitch_edge() {
    let p = PositionUpdate { x: 75.0, y: -120.0 }.sanitized().unwrap();
    assert_eq!(p, PositionUpdate { x: POSITION_LIMIT_PCT, y: -POSITION_LIMIT_PCT });
}

#[test]
fn sanitized_rejects_nan_and_infinity() {
    assert_eq!(PositionUpdate { x: f64::NAN, y: 0.0 }.sanitized(), Err(RosterError::NonFinitePosition));
    assert_eq!(
        PositionUpdate { x: 0.0, y: f64::INFINITY }.sanitized(),
        Err(RosterError::NonFinitePosition)
    );
}

// =============================================================
// Club settings
// =============================================================

#[test]
fn club_info_default_selects_first_category() {
    let club = ClubInfo::default();
    assert_eq!(club.name, DEFAULT_CLUB_NAME);
    assert_eq!(club.categories.len(), DEFAULT_CATEGORIES.len());
    assert_eq!(club.default_category, "Seniors A");
}

#[test]
fn parse_categories_trims_and_drops_blanks() {
    assert_eq!(parse_categories(" U7 , ,U9,"), vec!["U7".to_owned(), "U9".to_owned()]);
}

#[test]
fn parse_categories_dedupes_preserving_order() {
    assert_eq!(
        parse_categories("U9,U7,U9"),
        vec!["U9".to_owned(), "U7".to_owned()]
    );
}

#[test]
fn parse_categories_empty_input() {
    assert!(parse_categories("").is_empty());
}
