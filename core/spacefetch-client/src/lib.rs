//! Management API client for spacefetch.
//!
//! The export logic only ever talks to the [`ManagementApi`] and [`SpaceApi`]
//! traits. [`HttpManagementClient`] implements them over the REST management
//! API with bearer-token auth; tests and other transports can provide their
//! own implementations.

mod api;
mod config;
mod error;
mod http;

pub use api::{ManagementApi, SpaceApi};
pub use config::ManagementConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpManagementClient, HttpSpace};
