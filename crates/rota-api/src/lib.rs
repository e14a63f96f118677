//! JSON REST API for the rota shift-scheduling service.
//!
//! Exposes an axum [`Router`] backed by any [`rota_core::store::RosterStore`].
//! Transport, configuration, and startup seeding are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app: Router = rota_api::api_router(store.clone());
//! ```

pub mod employees;
pub mod error;
pub mod extract;
pub mod response;
pub mod shifts;

use std::sync::Arc;

use axum::{Router, routing::get};
use rota_core::store::RosterStore;

pub use error::ApiError;
pub use response::Envelope;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RosterStore + 'static,
{
  Router::new()
    // Employee directory
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update::<S>)
        .delete(employees::delete_one::<S>),
    )
    // Shift roster
    .route("/shifts", get(shifts::list::<S>).post(shifts::create::<S>))
    .route(
      "/shifts/{id}",
      get(shifts::get_one::<S>)
        .put(shifts::update::<S>)
        .delete(shifts::delete_one::<S>),
    )
    .with_state(store)
}
