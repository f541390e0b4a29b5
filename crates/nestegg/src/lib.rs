//! NestEgg Advisor core library.
//!
//! The [`matching`] module holds the profile-to-brokerage recommendation engine:
//! an account-category classifier, a data-driven candidate scorer, and the
//! aggregation pipeline that produces ranked, explained matches. The remaining
//! modules carry service-level concerns (configuration, telemetry, errors) used
//! by the HTTP front end in `services/api`.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
