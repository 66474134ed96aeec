//! Backend de arquivos criptografados
//!
//! Um arquivo `<key>.secret` por chave, contendo um envelope JSON:
//!
//! ```json
//! {"version":1,"kdf":"pbkdf2-sha256","iterations":210000,
//!  "salt":"<b64>","nonce":"<b64>","ciphertext":"<b64>"}
//! ```
//!
//! Chave AES-256-GCM = PBKDF2-HMAC-SHA256(senha, salt). Cada escrita gera
//! salt e nonce novos e troca o arquivo de forma atômica.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::backend::{validate_key, Backend};
use crate::error::{Result, SecretStoreError};
use crate::password::{self, PasswordSource};

pub const DEFAULT_ITERATIONS: u32 = 210_000;

const ENVELOPE_VERSION: u8 = 1;
const KDF_NAME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const EXTENSION: &str = "secret";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u8,
    kdf: String,
    iterations: u32,
    salt: String,
    nonce: String,
    ciphertext: String,
}

#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    iterations: u32,
    password: Arc<PasswordSource>,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>, password: Arc<PasswordSource>) -> Self {
        Self {
            dir: dir.into(),
            iterations: DEFAULT_ITERATIONS,
            password,
        }
    }

    /// Iterações do PBKDF2 para novas escritas (leituras usam o valor do envelope)
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, EXTENSION))
    }

    fn derive_key(&self, key: &str, salt: &[u8], iterations: u32) -> Result<[u8; 32]> {
        let password = self.password.get()?;
        if password::is_blank(password) {
            return Err(SecretStoreError::read(key, "empty keyring password"));
        }

        let mut derived = [0u8; 32];
        pbkdf2::pbkdf2_hmac::<Sha256>(
            password.expose_secret().as_bytes(),
            salt,
            iterations,
            &mut derived,
        );
        Ok(derived)
    }

    fn ensure_dir(&self, key: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SecretStoreError::write(key, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700))
                .map_err(|e| SecretStoreError::write(key, e))?;
        }

        Ok(())
    }

    fn seal(&self, key: &str, value: &[u8]) -> Result<Envelope> {
        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut nonce);

        let derived = self.derive_key(key, &salt, self.iterations)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&derived));
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), value)
            .map_err(|_| SecretStoreError::write(key, "encrypt failed"))?;

        Ok(Envelope {
            version: ENVELOPE_VERSION,
            kdf: KDF_NAME.to_string(),
            iterations: self.iterations,
            salt: BASE64.encode(salt),
            nonce: BASE64.encode(nonce),
            ciphertext: BASE64.encode(ciphertext),
        })
    }

    fn open(&self, key: &str, envelope: &Envelope) -> Result<Vec<u8>> {
        if envelope.version != ENVELOPE_VERSION || envelope.kdf != KDF_NAME {
            return Err(SecretStoreError::read(
                key,
                format!(
                    "unsupported container (version {}, kdf {})",
                    envelope.version, envelope.kdf
                ),
            ));
        }

        let decode = |field: &str| {
            BASE64
                .decode(field)
                .map_err(|e| SecretStoreError::read(key, format!("corrupt container: {}", e)))
        };
        let salt = decode(&envelope.salt)?;
        let nonce = decode(&envelope.nonce)?;
        let ciphertext = decode(&envelope.ciphertext)?;
        if nonce.len() != NONCE_LEN {
            return Err(SecretStoreError::read(key, "corrupt container: bad nonce"));
        }

        let derived = self.derive_key(key, &salt, envelope.iterations)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&derived));
        cipher
            .decrypt(Nonce::from_slice(&nonce), ciphertext.as_ref())
            .map_err(|_| SecretStoreError::read(key, "decrypt failed"))
    }
}

impl Backend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;

        let raw = match fs::read(self.path_for(key)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SecretStoreError::read(key, e)),
        };

        let envelope: Envelope = serde_json::from_slice(&raw)
            .map_err(|e| SecretStoreError::read(key, format!("corrupt container: {}", e)))?;
        self.open(key, &envelope).map(Some)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir(key)?;

        let envelope = self.seal(key, value)?;
        let bytes = serde_json::to_vec(&envelope).map_err(|e| SecretStoreError::write(key, e))?;

        // NamedTempFile nasce com 0600 em Unix; persist faz o rename atômico
        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| SecretStoreError::write(key, e))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| SecretStoreError::write(key, e))?;
        tmp.persist(self.path_for(key))
            .map_err(|e| SecretStoreError::write(key, e.error))?;

        tracing::debug!("Segredo {} gravado em {}", key, self.dir.display());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;

        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SecretStoreError::write(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreErrorKind;
    use secrecy::SecretString;

    fn backend(dir: &Path, password: &str) -> FileBackend {
        let source = PasswordSource::fixed(SecretString::from(password.to_string()));
        FileBackend::new(dir, Arc::new(source)).with_iterations(1_000)
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = backend(dir.path(), "correct horse");

        store.set("api_key", b"pk_123").unwrap();
        assert_eq!(store.get("api_key").unwrap().as_deref(), Some(&b"pk_123"[..]));

        // o arquivo não contém o segredo em claro
        let raw = fs::read_to_string(dir.path().join("api_key.secret")).unwrap();
        assert!(!raw.contains("pk_123"));
        assert!(raw.contains("\"kdf\":\"pbkdf2-sha256\""));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = backend(dir.path(), "pw");
        assert_eq!(store.get("api_key").unwrap(), None);
    }

    #[test]
    fn test_wrong_password_fails_to_decrypt() {
        let dir = tempfile::tempdir().unwrap();
        backend(dir.path(), "right").set("api_key", b"pk_123").unwrap();

        let err = backend(dir.path(), "wrong").get("api_key").unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Read);
        assert!(err.to_string().ends_with("decrypt failed"));
    }

    #[test]
    fn test_overwrite_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = backend(dir.path(), "pw");

        store.set("api_key", b"first").unwrap();
        store.set("api_key", b"second").unwrap();
        assert_eq!(store.get("api_key").unwrap().as_deref(), Some(&b"second"[..]));

        store.delete("api_key").unwrap();
        assert_eq!(store.get("api_key").unwrap(), None);
        store.delete("api_key").unwrap();
    }

    #[test]
    fn test_corrupt_container() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("api_key.secret"), b"not json").unwrap();

        let err = backend(dir.path(), "pw").get("api_key").unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Read);
    }

    #[test]
    fn test_invalid_key_rejected_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = backend(dir.path(), "pw").set("../escape", b"x").unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidKey);
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_empty_password_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = backend(dir.path(), "").set("api_key", b"x").unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Read);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join("keyring");
        backend(&store_dir, "pw").set("api_key", b"x").unwrap();

        let mode = fs::metadata(store_dir.join("api_key.secret"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
