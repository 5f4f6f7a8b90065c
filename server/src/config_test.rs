use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn minimal() -> Vec<(&'static str, &'static str)> {
    vec![("DATABASE_URL", "postgres://localhost/lineup")]
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// Config::from_lookup
// =============================================================================

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let config = Config::from_lookup(lookup(&minimal())).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/lineup");
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_max_connections, 5);
    assert!(!config.cookie_secure);
    assert_eq!(config.session_ttl_hours, 720);
    assert_eq!(config.club, ClubInfo::default());
    assert_eq!(config.coach, None);
}

#[test]
fn database_url_is_required() {
    assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing("DATABASE_URL")));
    assert_eq!(
        Config::from_lookup(lookup(&[("DATABASE_URL", "   ")])),
        Err(ConfigError::Missing("DATABASE_URL"))
    );
}

#[test]
fn invalid_port_is_reported() {
    let mut pairs = minimal();
    pairs.push(("PORT", "eighty"));
    assert_eq!(
        Config::from_lookup(lookup(&pairs)),
        Err(ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() })
    );
}

#[test]
fn non_positive_session_ttl_is_rejected() {
    let mut pairs = minimal();
    pairs.push(("SESSION_TTL_HOURS", "0"));
    assert!(matches!(
        Config::from_lookup(lookup(&pairs)),
        Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", .. })
    ));
}

#[test]
fn invalid_cookie_secure_is_reported() {
    let mut pairs = minimal();
    pairs.push(("COOKIE_SECURE", "sometimes"));
    assert!(matches!(
        Config::from_lookup(lookup(&pairs)),
        Err(ConfigError::Invalid { key: "COOKIE_SECURE", .. })
    ));
}

#[test]
fn explicit_values_override_defaults() {
    let mut pairs = minimal();
    pairs.extend([
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("COOKIE_SECURE", "yes"),
        ("SESSION_TTL_HOURS", "24"),
        ("CLUB_NAME", "AS Exemple"),
    ]);
    let config = Config::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert!(config.cookie_secure);
    assert_eq!(config.session_ttl_hours, 24);
    assert_eq!(config.club.name, "AS Exemple");
}

#[test]
fn categories_parse_and_default_to_first() {
    let mut pairs = minimal();
    pairs.push(("CATEGORIES", "U9, U11 ,U9,,Seniors"));
    let config = Config::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.club.categories, vec!["U9", "U11", "Seniors"]);
    assert_eq!(config.club.default_category, "U9");
}

#[test]
fn default_category_must_be_listed() {
    let mut pairs = minimal();
    pairs.extend([("CATEGORIES", "U9,U11"), ("DEFAULT_CATEGORY", "U11")]);
    assert_eq!(Config::from_lookup(lookup(&pairs)).unwrap().club.default_category, "U11");

    let mut pairs = minimal();
    pairs.extend([("CATEGORIES", "U9,U11"), ("DEFAULT_CATEGORY", "U13")]);
    assert_eq!(
        Config::from_lookup(lookup(&pairs)),
        Err(ConfigError::UnknownDefaultCategory("U13".to_owned()))
    );
}

#[test]
fn category_list_of_only_separators_is_rejected() {
    let mut pairs = minimal();
    pairs.push(("CATEGORIES", " , ,"));
    assert_eq!(Config::from_lookup(lookup(&pairs)), Err(ConfigError::NoCategories));
}

#[test]
fn coach_seed_needs_email_and_password() {
    let mut pairs = minimal();
    pairs.push(("COACH_EMAIL", "coach@club.fr"));
    assert_eq!(Config::from_lookup(lookup(&pairs)), Err(ConfigError::Missing("COACH_PASSWORD")));

    let mut pairs = minimal();
    pairs.push(("COACH_PASSWORD", "secret"));
    assert_eq!(Config::from_lookup(lookup(&pairs)), Err(ConfigError::Missing("COACH_EMAIL")));
}

#[test]
fn coach_seed_is_built_from_env() {
    let mut pairs = minimal();
    pairs.extend([("COACH_EMAIL", "coach@club.fr"), ("COACH_PASSWORD", "secret"), ("COACH_NAME", "Marc")]);
    let coach = Config::from_lookup(lookup(&pairs)).unwrap().coach.unwrap();
    assert_eq!(coach.email, "coach@club.fr");
    assert_eq!(coach.password, "secret");
    assert_eq!(coach.name, "Marc");
}

#[test]
fn coach_seed_debug_hides_password() {
    let seed = CoachSeed { email: "a@b.fr".to_owned(), password: "hunter2".to_owned(), name: String::new() };
    assert!(!format!("{seed:?}").contains("hunter2"));
}
