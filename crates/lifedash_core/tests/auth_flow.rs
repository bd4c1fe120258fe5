use lifedash_core::{AuthError, CoreConfig, CoreContext, CredentialRepository, SignUpRequest};

fn sign_up_request(identifier: &str, password: &str) -> SignUpRequest {
    SignUpRequest {
        identifier: identifier.to_string(),
        display_name: Some("Robin".to_string()),
        password: password.to_string(),
    }
}

#[test]
fn sign_up_persists_a_hashed_credential() {
    let context = CoreContext::in_memory().unwrap();
    let user = context
        .auth()
        .sign_up(&sign_up_request("robin@example.com", "correct-horse"))
        .unwrap();

    let stored = context
        .credentials()
        .find_by_identifier("robin@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, user.user_id);
    assert_ne!(stored.password_hash, "correct-horse");
    assert!(stored.password_hash.contains(':'));
}

#[test]
fn login_outcomes_do_not_reveal_which_check_failed() {
    let context = CoreContext::in_memory().unwrap();
    let auth = context.auth();
    auth.sign_up(&sign_up_request("robin@example.com", "correct-horse"))
        .unwrap();

    let wrong_password = auth.authorize("robin@example.com", "battery-staple").unwrap();
    let unknown_user = auth.authorize("nobody@example.com", "correct-horse").unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert!(wrong_password.is_none());

    let user = auth
        .authorize(" Robin@Example.com ", "correct-horse")
        .unwrap()
        .unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Robin"));
}

#[test]
fn accounts_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoreConfig::new(dir.path()).unwrap();

    CoreContext::open(&config)
        .unwrap()
        .auth()
        .sign_up(&sign_up_request("robin@example.com", "correct-horse"))
        .unwrap();

    let context = CoreContext::open(&config).unwrap();
    assert!(context
        .auth()
        .authorize("robin@example.com", "correct-horse")
        .unwrap()
        .is_some());
    assert!(matches!(
        context
            .auth()
            .sign_up(&sign_up_request("robin@example.com", "another1"))
            .unwrap_err(),
        AuthError::AlreadyRegistered
    ));
}

#[test]
fn legacy_bcrypt_hash_does_not_authorize() {
    let context = CoreContext::in_memory().unwrap();
    context
        .connection()
        .execute(
            "INSERT INTO credentials (user_id, identifier, password_hash)
             VALUES ('6f1f0a54-6c7e-4c1b-9d35-8f0b7b1c2a11', 'old@example.com',
                     '$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy');",
            [],
        )
        .unwrap();

    assert!(context
        .auth()
        .authorize("old@example.com", "password")
        .unwrap()
        .is_none());
}
