//! Behavioural tests for the profile exchange flows.
//!
//! Scenarios cover form assembly, the encode and decode round trip, the
//! owner's code screen and scan resolution.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use profile_exchange::domain::codec;
use profile_exchange::domain::form::{self, AssemblyError};
use profile_exchange::domain::ports::{
    FixtureCodeImageGenerator, InMemoryProfileStore, ScanOutcome,
};
use profile_exchange::domain::{
    DisplayError, OwnCode, OwnProfileService, ProfileField, ProfileForm, ProfileRecord,
    ScanRejection, ScanResolution,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

type Service = OwnProfileService<InMemoryProfileStore, FixtureCodeImageGenerator>;

#[derive(Default, ScenarioState)]
struct World {
    form: Slot<ProfileForm>,
    assembled: Slot<Result<ProfileRecord, AssemblyError>>,
    decoded: Slot<ProfileRecord>,
    saved: Slot<ProfileRecord>,
    service: Slot<Arc<Service>>,
    code: Slot<Result<OwnCode<String>, DisplayError>>,
    resolution: Slot<ScanResolution>,
}

impl World {
    fn form(&self) -> ProfileForm {
        self.form.get().expect("form should be set")
    }

    fn assembled(&self) -> ProfileRecord {
        self.assembled
            .get()
            .expect("form should be assembled")
            .expect("assembly should succeed")
    }

    fn service(&self) -> Arc<Service> {
        if let Some(service) = self.service.get() {
            return service;
        }
        let service = Arc::new(OwnProfileService::new(
            Arc::new(InMemoryProfileStore::new()),
            Arc::new(FixtureCodeImageGenerator::default()),
        ));
        self.service.set(Arc::clone(&service));
        service
    }

    fn code(&self) -> Result<OwnCode<String>, DisplayError> {
        self.code.get().expect("code screen should be opened")
    }

    fn resolution(&self) -> ScanResolution {
        self.resolution.get().expect("scan should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// Given

#[given("a form for Jane Doe with email \"{email}\" and phone \"{phone}\"")]
fn a_form_for_jane_doe(world: &World, email: String, phone: String) {
    let mut profile_form = ProfileForm::new();
    profile_form.set(ProfileField::FirstName, "Jane");
    profile_form.set(ProfileField::LastName, "Doe");
    profile_form.set(ProfileField::Email, email);
    profile_form.set(ProfileField::PhoneNumber, phone);
    world.form.set(profile_form);
}

#[given("the Discord tag \"{tag}\"")]
fn the_discord_tag(world: &World, tag: String) {
    let mut profile_form = world.form();
    profile_form.set(ProfileField::DiscordTag, tag);
    world.form.set(profile_form);
}

#[given("an empty form")]
fn an_empty_form(world: &World) {
    world.form.set(ProfileForm::new());
}

#[given("no saved profile")]
fn no_saved_profile(world: &World) {
    let _service = world.service();
}

// When

#[when("the form is assembled")]
fn the_form_is_assembled(world: &World) {
    world.assembled.set(form::assemble(&world.form()));
}

#[when("the profile is encoded and decoded again")]
fn the_profile_is_encoded_and_decoded(world: &World) {
    let text = codec::encode(&world.assembled());
    world
        .decoded
        .set(codec::decode(&text).expect("encoding should decode"));
}

#[when("the owner saves the form")]
fn the_owner_saves_the_form(world: &World) {
    let saved = world
        .service()
        .replace_own_profile(&world.form())
        .expect("profile should save");
    world.saved.set(saved);
}

#[when("the owner opens their code")]
fn the_owner_opens_their_code(world: &World) {
    world.code.set(world.service().render_own_code());
}

#[when("the scan is cancelled")]
fn the_scan_is_cancelled(world: &World) {
    world
        .resolution
        .set(ScanResolution::resolve(ScanOutcome::Cancelled));
}

#[when("a code reading \"{text}\" is scanned")]
fn a_code_is_scanned(world: &World, text: String) {
    world
        .resolution
        .set(ScanResolution::resolve(ScanOutcome::Scanned(text)));
}

// Then

#[then("the decoded profile equals the assembled profile")]
fn the_decoded_profile_equals_the_assembled_profile(world: &World) {
    let decoded = world.decoded.get().expect("profile should be decoded");
    assert_eq!(decoded, world.assembled());
}

#[then("assembly fails because \"{identifier}\" is missing")]
fn assembly_fails_because_field_is_missing(world: &World, identifier: String) {
    let field: ProfileField = identifier.parse().expect("canonical identifier");
    assert_eq!(
        world.assembled.get().expect("form should be assembled"),
        Err(AssemblyError::MissingField { field })
    );
}

#[then("the profile has no Discord tag")]
fn the_profile_has_no_discord_tag(world: &World) {
    assert!(world.assembled().social_networks().discord_tag().is_none());
}

#[then("the owner is told no profile is configured")]
fn the_owner_is_told_no_profile_is_configured(world: &World) {
    assert_eq!(world.code(), Err(DisplayError::NotConfigured));
}

#[then("the code is titled \"{heading}\"")]
fn the_code_is_titled(world: &World, heading: String) {
    let code = world.code().expect("code should render");
    assert_eq!(code.heading(), heading);
}

#[then("the code payload decodes to the saved profile")]
fn the_code_payload_decodes_to_the_saved_profile(world: &World) {
    let code = world.code().expect("code should render");
    let saved = world.saved.get().expect("profile should be saved");
    assert_eq!(codec::decode(code.payload()), Ok(saved));
}

#[then("no profile is shown and no error is reported")]
fn nothing_is_shown(world: &World) {
    assert_eq!(world.resolution(), ScanResolution::Cancelled);
}

#[then("the scan is rejected with an invalid code message")]
fn the_scan_is_rejected(world: &World) {
    match world.resolution() {
        ScanResolution::Rejected(rejection @ ScanRejection::Decode(_)) => {
            assert!(rejection.to_string().starts_with("invalid code"));
        }
        other => panic!("expected a decode rejection, got {other:?}"),
    }
}

// Scenario bindings

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "A filled-in form survives the code round trip"
)]
fn a_filled_in_form_survives_the_code_round_trip(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "An empty form names the first missing field"
)]
fn an_empty_form_names_the_first_missing_field(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "A blank Discord tag is treated as not shared"
)]
fn a_blank_discord_tag_is_treated_as_not_shared(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "An owner without a profile is asked to create one"
)]
fn an_owner_without_a_profile_is_asked_to_create_one(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "A saved profile is shown as its own code"
)]
fn a_saved_profile_is_shown_as_its_own_code(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "A cancelled scan shows nothing"
)]
fn a_cancelled_scan_shows_nothing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_exchange.feature",
    name = "A scanned code that is not a profile is rejected"
)]
fn a_scanned_code_that_is_not_a_profile_is_rejected(world: World) {
    let _ = world;
}
