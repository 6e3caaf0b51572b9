use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id with a freshly generated salt.
///
/// The salt is embedded in the returned PHC string, so verification only
/// needs the hash itself.
pub fn hash_password(password: &str) -> Result<String, anyhow::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(hash)
}

/// Verify a password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; `Err` only when the stored hash is
/// not a parseable PHC string.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, anyhow::Error> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| anyhow::anyhow!("Invalid password hash format: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
