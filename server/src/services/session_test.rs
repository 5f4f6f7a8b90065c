use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_single_byte() {
    assert_eq!(bytes_to_hex(&[0xff]), "ff");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::config::CoachSeed;
    use crate::services::auth;

    async fn seeded_coach(pool: &PgPool) -> Uuid {
        let seed = CoachSeed {
            email: format!("session-{}@example.test", Uuid::new_v4()),
            password: "secret".to_owned(),
            name: "Session Coach".to_owned(),
        };
        auth::upsert_coach(pool, &seed).await.expect("upsert coach")
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let pool = crate::state::test_helpers::live_pool().await;
        let coach_id = seeded_coach(&pool).await;

        let token = create_session(&pool, coach_id, 1).await.expect("create");
        let coach = validate_session(&pool, &token).await.expect("validate").expect("coach");
        assert_eq!(coach.id, coach_id.to_string());
        assert_eq!(coach.name, "Session Coach");

        delete_session(&pool, &token).await.expect("delete");
        assert!(validate_session(&pool, &token).await.expect("validate").is_none());
        delete_session(&pool, &token).await.expect("second delete is a no-op");
    }

    #[tokio::test]
    async fn expired_sessions_are_invalid_and_purged() {
        let pool = crate::state::test_helpers::live_pool().await;
        let coach_id = seeded_coach(&pool).await;

        let token = create_session(&pool, coach_id, -1).await.expect("create");
        assert!(validate_session(&pool, &token).await.expect("validate").is_none());
        assert!(purge_expired(&pool).await.expect("purge") >= 1);
    }
}
