use super::*;

fn draft(last: &str, first: &str, number: &str) -> PlayerDraft {
    PlayerDraft {
        last_name: last.to_owned(),
        first_name: first.to_owned(),
        number: number.to_owned(),
        role: Role::Goalkeeper,
    }
}

#[test]
fn default_draft_is_outfield() {
    assert_eq!(PlayerDraft::default().role, Role::Outfield);
}

#[test]
fn draft_becomes_trimmed_payload_for_category() {
    let payload = draft(" Martin ", " Luc ", " 1 ").to_new_player("U11").unwrap();
    assert_eq!(payload.last_name, "Martin");
    assert_eq!(payload.first_name, "Luc");
    assert_eq!(payload.number, "1");
    assert_eq!(payload.role, Role::Goalkeeper);
    assert_eq!(payload.category, "U11");
}

#[test]
fn blank_last_name_is_rejected() {
    assert_eq!(draft("   ", "Luc", "1").to_new_player("U11"), Err(RosterError::MissingLastName));
}

#[test]
fn long_number_is_rejected() {
    assert!(matches!(draft("Martin", "", "1234").to_new_player("U11"), Err(RosterError::InvalidNumber(_))));
}
