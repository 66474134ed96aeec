use pretty_assertions::assert_eq;
use secrecy::{ExposeSecret, SecretString};
use secret_store::{
    BackendKind, BackendPlan, RequestedBackend, SecretStore, StoreErrorKind, StoreOptions,
};

fn file_options(dir: &std::path::Path) -> StoreOptions {
    StoreOptions::new("clickup-test", dir)
        .iterations(1_000)
        .password(SecretString::from("pw".to_string()))
}

fn file_plan() -> BackendPlan {
    BackendPlan {
        candidates: vec![BackendKind::File],
        open_timeout: None,
    }
}

#[tokio::test]
async fn test_api_key_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let options = file_options(dir.path());
    let store = SecretStore::open_plan(&options, RequestedBackend::File, &file_plan())
        .await
        .unwrap();
    assert_eq!(store.backend_name(), "file");

    assert!(!store.has_api_key().unwrap());
    let err = store.get_api_key().unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);

    store.set_api_key("pk_42").unwrap();
    assert!(store.has_api_key().unwrap());
    assert_eq!(store.get_api_key().unwrap().expose_secret(), "pk_42");

    store.delete_api_key().unwrap();
    assert!(!store.has_api_key().unwrap());
    store.delete_api_key().unwrap();
}

#[tokio::test]
async fn test_generic_secrets() {
    let dir = tempfile::tempdir().unwrap();
    let options = file_options(dir.path());
    let store = SecretStore::open_plan(&options, RequestedBackend::File, &file_plan())
        .await
        .unwrap();

    store.set_secret("oauth.refresh", &[0, 1, 2, 255]).unwrap();
    assert_eq!(store.get_secret("oauth.refresh").unwrap(), vec![0, 1, 2, 255]);

    let err = store.set_secret("a/b", b"x").unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidKey);
}

#[tokio::test]
async fn test_reopen_reads_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let options = file_options(dir.path());

    let first = SecretStore::open_plan(&options, RequestedBackend::File, &file_plan())
        .await
        .unwrap();
    first.set_api_key("pk_persisted").unwrap();
    drop(first);

    let second = SecretStore::open_plan(&options, RequestedBackend::File, &file_plan())
        .await
        .unwrap();
    assert_eq!(second.get_api_key().unwrap().expose_secret(), "pk_persisted");
}

#[test]
fn test_env_backend_wins_and_invalid_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let options = file_options(dir.path()).configured_backend("keychain");

    temp_env::with_var("CLICKUP_TEST_KEYRING_BACKEND", Some("bogus"), || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let err = runtime
            .block_on(SecretStore::open(options.clone()))
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidBackend);
    });

    temp_env::with_var("CLICKUP_TEST_KEYRING_BACKEND", Some(" File "), || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let store = runtime.block_on(SecretStore::open(options.clone())).unwrap();
        assert_eq!(store.backend_name(), "file");
    });
}

#[test]
fn test_env_password_used_by_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let options = StoreOptions::new("clickup-test", dir.path()).iterations(1_000);

    temp_env::with_vars(
        [
            ("CLICKUP_TEST_KEYRING_BACKEND", Some("file")),
            ("CLICKUP_TEST_KEYRING_PASS", Some("from-env")),
        ],
        || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let store = runtime.block_on(SecretStore::open(options.clone())).unwrap();
            store.set_api_key("pk_env").unwrap();
        },
    );

    // mesma senha lida de outra forma abre o mesmo arquivo
    let fixed = StoreOptions::new("clickup-test", dir.path())
        .iterations(1_000)
        .password(SecretString::from("from-env".to_string()));
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let store = runtime
        .block_on(SecretStore::open_plan(&fixed, RequestedBackend::File, &file_plan()))
        .unwrap();
    assert_eq!(store.get_api_key().unwrap().expose_secret(), "pk_env");
}
