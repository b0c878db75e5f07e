//! Account registration and login

use log::info;
use sha2::{Digest, Sha256};
use truckreg_store::UserStore;
use truckreg_types::{FormError, Result, UserAccount};

use crate::session::Session;

/// Compute the stored digest for a password.
///
/// SHA-256 over the UTF-8 bytes, rendered as 64-char lowercase hex. The
/// digest is deterministic and unsalted; this is the one seam where the
/// algorithm could be swapped.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Create a new account and authenticate the session as that user.
///
/// Duplicate usernames are checked against the in-memory snapshot before
/// the non-emptiness checks.
pub fn register(
    users: &mut UserStore,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<()> {
    if users.contains(username) {
        return Err(FormError::DuplicateUser.into());
    }
    if username.is_empty() {
        return Err(FormError::MissingField("username").into());
    }
    if password.is_empty() {
        return Err(FormError::MissingField("password").into());
    }

    users.insert(UserAccount {
        username: username.to_string(),
        password_hash: hash_password(password),
    })?;
    session.login(username);
    info!("registered account: {}", username);
    Ok(())
}

/// Verify credentials and authenticate the session on success
pub fn login(
    users: &UserStore,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<()> {
    let account = users.get(username).ok_or(FormError::InvalidCredentials)?;
    if account.password_hash != hash_password(password) {
        return Err(FormError::InvalidCredentials.into());
    }

    session.login(username);
    info!("login: {}", username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> UserStore {
        UserStore::open(dir.path().join("users.csv")).unwrap()
    }

    #[test]
    fn digest_is_deterministic_hex_and_not_the_password() {
        let digest = hash_password("pw123");
        assert_eq!(digest, hash_password("pw123"));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(digest, "pw123");
        assert_ne!(digest, hash_password("pw124"));
    }

    #[test]
    fn register_then_login_succeeds() {
        let dir = tempdir().unwrap();
        let mut users = open_store(&dir);
        let mut session = Session::new();

        register(&mut users, &mut session, "alice", "pw123").unwrap();
        assert_eq!(session.current_user(), Some("alice"));

        let mut fresh = Session::new();
        login(&users, &mut fresh, "alice", "pw123").unwrap();
        assert_eq!(fresh.current_user(), Some("alice"));
    }

    #[test]
    fn duplicate_username_is_rejected_and_table_unchanged() {
        let dir = tempdir().unwrap();
        let mut users = open_store(&dir);
        let mut session = Session::new();

        register(&mut users, &mut session, "alice", "pw123").unwrap();
        let before = std::fs::read_to_string(users.path()).unwrap();

        let err = register(&mut users, &mut session, "alice", "other").unwrap_err();
        assert_eq!(err.as_form_error(), Some(&FormError::DuplicateUser));
        assert_eq!(users.count(), 1);

        let after = std::fs::read_to_string(users.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_fields_are_rejected() {
        let dir = tempdir().unwrap();
        let mut users = open_store(&dir);
        let mut session = Session::new();

        let err = register(&mut users, &mut session, "", "pw").unwrap_err();
        assert_eq!(
            err.as_form_error(),
            Some(&FormError::MissingField("username"))
        );

        let err = register(&mut users, &mut session, "alice", "").unwrap_err();
        assert_eq!(
            err.as_form_error(),
            Some(&FormError::MissingField("password"))
        );
        assert!(!session.is_authenticated());
        assert_eq!(users.count(), 0);
    }

    #[test]
    fn wrong_password_fails_login() {
        let dir = tempdir().unwrap();
        let mut users = open_store(&dir);
        let mut session = Session::new();
        register(&mut users, &mut session, "alice", "pw123").unwrap();

        let mut fresh = Session::new();
        let err = login(&users, &mut fresh, "alice", "wrong").unwrap_err();
        assert_eq!(err.as_form_error(), Some(&FormError::InvalidCredentials));
        assert!(!fresh.is_authenticated());
    }

    #[test]
    fn unknown_user_fails_login() {
        let dir = tempdir().unwrap();
        let users = open_store(&dir);
        let mut session = Session::new();

        let err = login(&users, &mut session, "nobody", "pw").unwrap_err();
        assert_eq!(err.as_form_error(), Some(&FormError::InvalidCredentials));
    }
}
