//! Passphrase-encrypted credential file.
//!
//! Layout on disk: 12-byte nonce followed by the AES-256-GCM ciphertext of
//! the JSON-encoded credentials. The key is the SHA-256 digest of the
//! passphrase.

use crate::errors::{AppError, AppResult};
use crate::models::credentials::Credentials;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const NONCE_LEN: usize = 12;

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn save(&self, credentials: &Credentials, passphrase: &str) -> AppResult<()> {
        let plaintext = serde_json::to_vec(credentials)?;
        let cipher = cipher_for(passphrase);
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_slice())
            .map_err(|_| AppError::Credentials("encryption failed".into()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        if let Some(dir) = self.path.parent() {
            create_private_dir(dir)?;
        }
        write_private_file(&self.path, &blob)?;

        tracing::debug!(path = %self.path.display(), "credentials stored");
        Ok(())
    }

    pub fn load(&self, passphrase: &str) -> AppResult<Credentials> {
        let blob = fs::read(&self.path).map_err(|e| {
            AppError::Credentials(format!(
                "cannot read {}: {e} (run `rtimesheet init` first)",
                self.path.display()
            ))
        })?;

        if blob.len() <= NONCE_LEN {
            return Err(AppError::Credentials("credential file is corrupt".into()));
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
        let plaintext = cipher_for(passphrase)
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| AppError::Credentials("wrong password or corrupt credential file".into()))?;

        serde_json::from_slice(&plaintext)
            .map_err(|e| AppError::Credentials(format!("credential file is corrupt: {e}")))
    }
}

fn cipher_for(passphrase: &str) -> Aes256Gcm {
    let digest = Sha256::digest(passphrase.as_bytes());
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&digest))
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> AppResult<()> {
    use std::os::unix::fs::DirBuilderExt;

    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> AppResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

fn write_private_file(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    Ok(())
}
