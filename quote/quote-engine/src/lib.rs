//! Quote assembly for PartQuote.
//!
//! Ties the mesh loader, the geometry analyzer and the cost model
//! into one request pipeline:
//!
//! ```text
//! bytes ── parse ──> TriangleMesh ── analyze ──> GeometryMetrics ─┐
//! material/thickness/quantity ── estimate ──> CostBreakdown ──────┴─> Quote
//! ```
//!
//! - [`UploadPolicy`] / [`stage_upload`] - upload boundary: size and
//!   extension checks, staging to disk, opaque storage reference
//! - [`QuotePipeline`] - parse + analyze on a worker pool, quote
//!   assembly
//! - [`CartService`] - explicit session-scoped cart, replacing any
//!   ambient global cart state
//!
//! Requests are independent; the only cross-request data is the
//! read-only material table inside `cost-model`.
//!
//! # Example
//!
//! ```
//! use cost_model::{CostInputs, Material};
//! use quote_engine::{CartService, QuotePipeline};
//!
//! let pipeline = QuotePipeline::new().unwrap();
//! let inputs = CostInputs {
//!     material: Material::Steel,
//!     thickness_mm: 10.0,
//!     quantity: 1,
//! };
//!
//! let quote = pipeline.quote(inputs, None).unwrap();
//!
//! let mut cart = CartService::new();
//! cart.add_quote("bracket.stl", &quote);
//! assert!((cart.total() - 118.8).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cart;
mod error;
mod pipeline;
mod quote;
mod timestamp;
mod upload;

pub use cart::{CartItem, CartService};
pub use error::{EngineError, EngineResult};
pub use pipeline::QuotePipeline;
pub use quote::Quote;
pub use timestamp::Timestamp;
pub use upload::{stage_upload, StoredUpload, UploadPolicy, DEFAULT_MAX_BYTES};
