//! Parse-and-analyze pipeline.
//!
//! Mesh parsing and geometry analysis are CPU-bound; the pipeline
//! runs them on a rayon thread pool so a large upload (tens of
//! thousands of triangles) does not block the calling thread's other
//! request handling. The computation is not cancellable mid-parse;
//! callers that need a bound on latency should time out on their side
//! and treat it as a recoverable per-request error.

use cost_model::{estimate_cost, CostInputs};
use mesh_metrics::{analyze_mesh, GeometryMetrics};
use mesh_stl::parse_mesh;
use rayon::ThreadPool;
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::quote::Quote;

/// The mesh-to-quote pipeline.
///
/// Requests are independent: the pipeline holds no mutable state, so
/// one instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use cost_model::{CostInputs, Material};
/// use quote_engine::QuotePipeline;
///
/// let pipeline = QuotePipeline::new().unwrap();
/// let inputs = CostInputs {
///     material: Material::Steel,
///     thickness_mm: 10.0,
///     quantity: 1,
/// };
///
/// // Price-only quote, no mesh involved
/// let quote = pipeline.quote(inputs, None).unwrap();
/// assert!(quote.metrics.is_none());
/// ```
#[derive(Debug)]
pub struct QuotePipeline {
    pool: ThreadPool,
}

impl QuotePipeline {
    /// Create a pipeline with one worker per available core.
    ///
    /// # Errors
    ///
    /// [`crate::EngineError::ThreadPool`] if the pool cannot be built.
    pub fn new() -> EngineResult<Self> {
        Self::with_threads(0)
    }

    /// Create a pipeline with an explicit worker count (0 = one per
    /// core).
    ///
    /// # Errors
    ///
    /// [`crate::EngineError::ThreadPool`] if the pool cannot be built.
    pub fn with_threads(threads: usize) -> EngineResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("quote-worker-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    /// Parse a mesh payload and derive its geometry metrics.
    ///
    /// Runs on the worker pool; the caller blocks until the result is
    /// ready. Deterministic for a given payload.
    ///
    /// # Errors
    ///
    /// Parse failures from [`mesh_stl::parse_mesh`].
    pub fn analyze(&self, bytes: &[u8], name: &str) -> EngineResult<GeometryMetrics> {
        self.pool.install(|| {
            let mesh = parse_mesh(bytes, name).inspect_err(|e| {
                warn!(name, error = %e, "Mesh parse failed");
            })?;
            info!(
                name,
                faces = mesh.face_count(),
                vertices = mesh.vertex_count(),
                "Mesh parsed"
            );
            Ok(analyze_mesh(&mesh))
        })
    }

    /// Produce a quote, optionally measuring an uploaded mesh.
    ///
    /// `payload` is the raw upload plus its declared file name; when
    /// absent the quote carries pricing only. Cost validation runs
    /// before any parsing so bad inputs fail fast.
    ///
    /// # Errors
    ///
    /// Validation failures from the cost model, then parse failures
    /// from the loader. No partial quote is returned.
    pub fn quote(&self, inputs: CostInputs, payload: Option<(&[u8], &str)>) -> EngineResult<Quote> {
        let breakdown = estimate_cost(&inputs)?;
        let metrics = match payload {
            Some((bytes, name)) => Some(self.analyze(bytes, name)?),
            None => None,
        };
        Ok(Quote::assemble(inputs, breakdown, metrics))
    }
}
