//! High-level roadline API.
//!
//! [`Roadline`] composes the blob store, the issued-identifier index, and the
//! ledger into the four operations everything else is built from:
//!
//! - [`Roadline::store_record`] — persist a JSON record, index its identifier
//! - [`Roadline::retrieve_record`] — serve back a previously issued record
//! - [`Roadline::anchor`] — record an identifier as the latest for a category
//! - [`Roadline::latest_anchor`] — read the anchored identifier
//!
//! The HTTP server and the CLI are both thin layers over this crate.

pub mod error;
pub mod record;
pub mod roadline;

pub use error::{SdkError, SdkResult};
pub use record::has_content;
pub use roadline::Roadline;
