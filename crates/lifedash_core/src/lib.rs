//! Core domain logic for the lifedash personal dashboard.
//! This crate is the single source of truth for widget and credential rules.

pub mod config;
pub mod context;
pub mod crypto;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig};
pub use context::CoreContext;
pub use crypto::password::{hash_password, verify_password, CredentialError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::area::{AreaFilter, LifeArea};
pub use model::entity::{Document, Entity, EntityId};
pub use repo::credential_repo::{
    Credential, CredentialRepository, RepoError, RepoResult, SqliteCredentialRepository, UserId,
};
pub use service::auth_service::{AuthError, AuthService, AuthenticatedUser, SignUpRequest};
pub use service::stats::QuickStats;
pub use store::{
    Collection, KeyValueStore, LocalStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult,
};

/// Storage keys of every widget collection, in dashboard order.
pub const COLLECTION_KEYS: &[&str] = &[
    <model::task::Task as Entity>::COLLECTION_KEY,
    <model::habit::Habit as Entity>::COLLECTION_KEY,
    <model::mood::MoodEntry as Entity>::COLLECTION_KEY,
    <model::sleep::SleepEntry as Entity>::COLLECTION_KEY,
    <model::fitness::Workout as Entity>::COLLECTION_KEY,
    <model::fitness::WeightEntry as Entity>::COLLECTION_KEY,
    <model::reminder::Reminder as Entity>::COLLECTION_KEY,
    <model::schedule::ScheduleEvent as Entity>::COLLECTION_KEY,
    <model::schedule::ScheduleItem as Entity>::COLLECTION_KEY,
    <model::tutoring::TutoringSession as Entity>::COLLECTION_KEY,
    <model::study::StudyTopic as Entity>::COLLECTION_KEY,
    <model::study::StudyResource as Entity>::COLLECTION_KEY,
    <model::assignment::Assignment as Entity>::COLLECTION_KEY,
    <model::water::WaterLog as Entity>::COLLECTION_KEY,
];

/// Storage keys of the single-value settings documents.
pub const DOCUMENT_KEYS: &[&str] = &[
    <model::settings::PomodoroSettings as Document>::DOCUMENT_KEY,
    <model::settings::CompletedPomodoros as Document>::DOCUMENT_KEY,
    <model::settings::WaterSettings as Document>::DOCUMENT_KEY,
    <model::settings::DashboardSettings as Document>::DOCUMENT_KEY,
];

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
