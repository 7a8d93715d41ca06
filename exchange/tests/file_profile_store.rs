//! Integration tests for the file-backed profile store.
//!
//! Each test works in its own temporary directory opened through a
//! capability handle.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use example_profiles::generate_example_profiles;
use profile_exchange::ExchangeSettings;
use profile_exchange::domain::ports::{ProfileStore, ProfileStoreError};
use profile_exchange::domain::{ProfileForm, ProfileRecord, codec, form};
use profile_exchange::outbound::persistence::FileProfileStore;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const FILE_NAME: &str = "own_profile.json";

struct Harness {
    temp: TempDir,
    store: FileProfileStore,
}

impl Harness {
    fn dir(&self) -> Dir {
        Dir::open_ambient_dir(self.temp.path(), ambient_authority()).expect("open temp dir")
    }
}

#[fixture]
fn harness() -> Harness {
    let temp = tempfile::tempdir().expect("create temp dir");
    let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir");
    let store = FileProfileStore::new(dir, FILE_NAME).expect("plain file name");
    Harness { temp, store }
}

fn sample_records(count: usize) -> Vec<ProfileRecord> {
    generate_example_profiles(11, count)
        .expect("generation succeeds")
        .iter()
        .map(|profile| {
            let profile_form =
                ProfileForm::from_identifiers(profile.fields()).expect("canonical identifiers");
            form::assemble(&profile_form).expect("sample profiles are valid")
        })
        .collect()
}

#[rstest]
fn missing_file_loads_as_none(harness: Harness) {
    assert_eq!(harness.store.load_own_profile(), Ok(None));
}

#[rstest]
fn save_then_load_returns_the_same_record(harness: Harness) {
    for record in sample_records(5) {
        harness.store.save_own_profile(&record).expect("save");
        assert_eq!(harness.store.load_own_profile(), Ok(Some(record)));
    }
}

#[rstest]
fn record_longer_than_any_code_reloads_intact(harness: Harness) {
    let mut parts = sample_records(1).pop().expect("one record").into_parts();
    parts.notes = "x".repeat(3000);
    let record = ProfileRecord::try_from_parts(parts).expect("valid profile");
    assert!(codec::encode(&record).len() > codec::MAX_PAYLOAD_BYTES);

    harness.store.save_own_profile(&record).expect("save");
    assert_eq!(harness.store.load_own_profile(), Ok(Some(record)));
}

#[rstest]
fn saved_file_holds_the_canonical_encoding(harness: Harness) {
    let record = sample_records(1).pop().expect("one record");
    harness.store.save_own_profile(&record).expect("save");

    let contents = harness.dir().read_to_string(FILE_NAME).expect("read file");
    assert_eq!(contents, codec::encode(&record));
}

#[rstest]
fn save_overwrites_and_leaves_a_single_file(harness: Harness) {
    let records = sample_records(3);
    for record in &records {
        harness.store.save_own_profile(record).expect("save");
    }

    assert_eq!(
        harness.store.load_own_profile(),
        Ok(records.last().cloned())
    );
    let entries = harness.dir().entries().expect("list dir").count();
    assert_eq!(entries, 1);
}

#[rstest]
#[case::garbage("{garbage")]
#[case::empty("")]
#[case::invalid_email(
    r#"{"v":1,"firstName":"A","lastName":"B","email":"nope","phoneNumber":"555"}"#
)]
fn unreadable_contents_are_reported_as_corrupt(harness: Harness, #[case] contents: &str) {
    harness
        .dir()
        .write(FILE_NAME, contents)
        .expect("write corrupt file");

    let result = harness.store.load_own_profile();
    assert!(
        matches!(result, Err(ProfileStoreError::Corrupt { .. })),
        "expected Corrupt, got {result:?}"
    );
    assert_eq!(
        harness.dir().read_to_string(FILE_NAME).expect("read file"),
        contents,
        "corrupt file must not be replaced"
    );
}

#[rstest]
#[case("nested/profile.json")]
#[case("../profile.json")]
#[case("")]
fn non_plain_file_names_are_rejected(#[case] file_name: &str) {
    let temp = tempfile::tempdir().expect("create temp dir");
    let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir");

    let result = FileProfileStore::new(dir, file_name);
    assert!(matches!(result, Err(ProfileStoreError::Io { .. })));
}

#[rstest]
fn open_creates_the_configured_data_directory() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let data_dir = temp.path().join("profiles").join("owner");
    let settings = ExchangeSettings {
        data_dir: Some(data_dir.clone()),
        profile_file: Some("me.json".to_owned()),
    };

    let store = FileProfileStore::open(&settings).expect("open store");
    assert_eq!(store.file_name().as_str(), "me.json");
    assert_eq!(store.load_own_profile(), Ok(None));

    let record = sample_records(1).pop().expect("one record");
    store.save_own_profile(&record).expect("save");
    assert!(data_dir.join("me.json").is_file());
}
