use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use tracing::error;

/// Hash a plaintext password with a fresh salt. Only the hash is ever stored.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn hash_parses_and_verifies() {
        let hash = hash_password("Secur3P@ssw0rd!").expect("hashing should succeed");
        let parsed = PasswordHash::new(&hash).expect("hash should parse");
        assert!(Argon2::default()
            .verify_password(b"Secur3P@ssw0rd!", &parsed)
            .is_ok());
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }

    #[test]
    fn equal_passwords_hash_differently() {
        let first = hash_password("same-password").expect("hashing should succeed");
        let second = hash_password("same-password").expect("hashing should succeed");
        assert_ne!(first, second);
    }
}
