//! Minimal Supabase table query client.
//!
//! Exposes a blocking client over the PostgREST interface of a hosted
//! Supabase project: `select`, `insert`, `update` and `delete` on a
//! named table, with equality filters and ordering. Callers that must
//! not block (web handlers) are expected to run `execute` on a worker
//! pool.

pub mod cli;
pub mod error;

pub use cli::{SbClient, SbResponse, TableQuery};
pub use error::Error;
