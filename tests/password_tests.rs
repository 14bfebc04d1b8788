use verso_auth::password::{hash_password, verify_password};

// bcrypt minimum cost, to keep the suite fast
const COST: u32 = 4;

#[test]
fn test_hash_and_verify_password() {
    let password = "secure_password_123";
    let hash = hash_password(password, COST).expect("Failed to hash password");

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
    assert!(verify_password(password, &hash));
}

#[test]
fn test_wrong_password_fails() {
    let hash = hash_password("correct123", COST).expect("Failed to hash");
    assert!(!verify_password("wrong456", &hash));
}

#[test]
fn test_case_sensitive_passwords() {
    let hash = hash_password("Password123", COST).expect("Failed to hash");

    assert!(verify_password("Password123", &hash));
    assert!(!verify_password("password123", &hash));
    assert!(!verify_password("PASSWORD123", &hash));
}

#[test]
fn test_hash_produces_different_results() {
    let password = "same_password";

    let hash1 = hash_password(password, COST).expect("Failed to hash 1");
    let hash2 = hash_password(password, COST).expect("Failed to hash 2");

    // Fresh salt per call
    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1));
    assert!(verify_password(password, &hash2));
}

#[test]
fn test_malformed_hash_is_a_mismatch() {
    let invalid_hashes = vec!["", "not a valid hash", "random_string_123", "$2b$10$invalid"];

    for invalid_hash in invalid_hashes {
        assert!(
            !verify_password("test123", invalid_hash),
            "Should answer false for malformed hash: {}",
            invalid_hash
        );
    }
}

#[test]
fn test_hash_format_is_bcrypt() {
    let hash = hash_password("test123", COST).expect("Failed to hash");
    assert!(
        hash.starts_with("$2"),
        "Hash should be bcrypt format: {}",
        hash
    );
}

#[test]
fn test_special_characters_in_password() {
    let passwords = vec![
        "pass!@#$%^&*()",
        "with spaces in it",
        r#"quotes"and'stuff"#,
        "\\backslashes\\",
    ];

    for password in passwords {
        let hash = hash_password(password, COST).expect("Failed to hash");
        assert!(verify_password(password, &hash));
    }
}

#[test]
fn test_slightly_different_passwords() {
    let hash = hash_password("password123", COST).expect("Failed to hash");

    assert!(verify_password("password123", &hash));
    assert!(!verify_password("password124", &hash));
}

#[test]
fn test_hash_is_not_reversible() {
    let password = "secure_password";
    let hash = hash_password(password, COST).expect("Failed to hash");

    // Hash should not contain the original password
    assert!(!hash.contains(password));

    // Trying to use the hash as the password should fail
    assert!(!verify_password(&hash, &hash));
}

#[test]
fn test_multiple_verifications_same_hash() {
    let password = "test123";
    let hash = hash_password(password, COST).expect("Failed to hash");

    for _ in 0..5 {
        assert!(verify_password(password, &hash));
    }
}
