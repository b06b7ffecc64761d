// bluetick/src/services/admin_credential.rs

//! The single admin password, held only as an Argon2 hash.

use crate::errors::AppError;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, error, instrument};

/// The hashed admin password. The plain text is dropped after startup.
#[derive(Clone)]
pub struct AdminCredential {
  hash: String,
}

impl AdminCredential {
  /// Salts and hashes the configured password. An empty one is refused.
  #[instrument(name = "admin_credential::from_plain", skip_all, err(Display))]
  pub fn from_plain(password: &str) -> Result<Self, AppError> {
    if password.is_empty() {
      return Err(AppError::Validation("The admin password cannot be empty.".to_string()));
    }
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| {
        error!(error = %e, "Could not hash the admin password.");
        AppError::Internal(format!("Admin password hashing failed: {}", e))
      })?
      .to_string();
    Ok(Self { hash })
  }

  /// Whether `attempt` is the admin password. A blank attempt is simply wrong.
  #[instrument(name = "admin_credential::verify", skip_all, err(Display))]
  pub fn verify(&self, attempt: &str) -> Result<bool, AppError> {
    if attempt.is_empty() {
      return Ok(false);
    }
    let stored = PasswordHash::new(&self.hash)
      .map_err(|e| AppError::Internal(format!("Stored admin hash is unreadable: {}", e)))?;
    match Argon2::default().verify_password(attempt.as_bytes(), &stored) {
      Ok(()) => Ok(true),
      Err(argon2::password_hash::Error::Password) => {
        debug!("Admin password attempt did not match.");
        Ok(false)
      }
      Err(e) => {
        error!(error = %e, "Admin password check could not run.");
        Err(AppError::Internal(format!("Admin password check failed: {}", e)))
      }
    }
  }
}

impl std::fmt::Debug for AdminCredential {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("AdminCredential(<redacted>)")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_only_the_configured_password() {
    let cred = AdminCredential::from_plain("letmein-2024").unwrap();
    assert!(cred.verify("letmein-2024").unwrap());
    for wrong in ["", "letmein", "LETMEIN-2024", "letmein-2024 "] {
      assert!(!cred.verify(wrong).unwrap(), "accepted {:?}", wrong);
    }
  }

  #[test]
  fn empty_password_is_refused() {
    assert!(matches!(AdminCredential::from_plain(""), Err(AppError::Validation(_))));
  }

  #[test]
  fn each_credential_gets_its_own_salt() {
    let a = AdminCredential::from_plain("pw").unwrap();
    let b = AdminCredential::from_plain("pw").unwrap();
    assert_ne!(a.hash, b.hash);
    assert!(b.verify("pw").unwrap());
  }

  #[test]
  fn debug_output_hides_the_hash() {
    let cred = AdminCredential::from_plain("pw").unwrap();
    assert_eq!(format!("{:?}", cred), "AdminCredential(<redacted>)");
  }
}
