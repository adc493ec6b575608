//! Server-side lead persistence
//!
//! The browser posts lead rows to `POST /api/leads`; the endpoint validates
//! them and forwards to a [`LeadRepository`].

pub mod api;
pub mod repository;

pub use api::{LeadApiState, leads_router};
pub use repository::{InMemoryLeadRepository, LeadRepository, PostgrestLeadRepository};
