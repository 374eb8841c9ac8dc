//! Geometry analysis for PartQuote.
//!
//! Derives the physical metrics that accompany a quote from a parsed
//! [`mesh_core::TriangleMesh`]:
//!
//! - **Dimensions**: axis-aligned bounding box and per-axis extents
//! - **Volume**: enclosed volume via signed tetrahedra (divergence theorem)
//! - **Complexity**: Low / Medium / High bucket from the face count
//!
//! Analysis is a deterministic pure function of the mesh: no I/O, no
//! shared state, safe to run concurrently for independent requests.
//!
//! # Example
//!
//! ```
//! use mesh_core::TriangleMesh;
//! use mesh_metrics::{analyze_mesh, Complexity};
//!
//! let mesh = TriangleMesh::new();
//! let metrics = analyze_mesh(&mesh);
//!
//! // Empty input degrades to the zero result instead of failing
//! assert_eq!(metrics.face_count, 0);
//! assert!(metrics.volume.abs() < f64::EPSILON);
//! assert_eq!(metrics.complexity, Complexity::Low);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod dimensions;
mod metrics;
mod volume;

pub use dimensions::{dimensions, Dimensions};
pub use metrics::{analyze_mesh, Complexity, GeometryMetrics};
pub use volume::mesh_volume;

// Re-export nalgebra types for convenience
pub use mesh_core::{Point3, Vector3};
