//! Surprises and easter eggs.
//!
//! [`client`] talks to the `/api/v1/surprises` endpoints, [`source`]
//! abstracts over that API and the in-process generators, and [`eggs`]
//! matches chat input against a fixed table of hidden triggers.

pub mod catalog;
pub mod chat;
pub mod client;
pub mod config;
pub mod consts;
pub mod eggs;
pub mod error;
pub mod render;
pub mod source;

pub use client::{Endpoint, SurpriseClient, SurpriseResponse};
pub use eggs::{EasterEgg, check_easter_egg};
pub use error::{SurpriseError, SurpriseResult};
