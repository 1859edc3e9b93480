//! Book catalogue service library.
//!
//! Hexagonal layout: `domain` holds the record model, use-cases and ports;
//! `inbound` adapts HTTP onto the driving ports; `outbound` implements the
//! repository port over the document store or process memory; `bootstrap`
//! loads configuration and prepares the store at startup.

pub mod bootstrap;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
