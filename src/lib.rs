//! This file is the root of the `numshuffle` Rust crate.
//!
//! numshuffle makes arrays of fixed-width numbers more compressible before they
//! reach a general-purpose byte compressor (zstd by default). It offers four
//! reversible pipelines:
//!
//! - **Plain:** little-endian bytes straight into the compressor.
//! - **Shuffle:** byte-plane transpose, then compress.
//! - **Delta:** anchor-delta encode, transpose, then compress.
//! - **Dictionary:** sorted distinct values plus narrow indices, then compress.
//!
//! Its responsibilities here are strictly limited to declaring the modules and
//! re-exporting the public surface.
//!
//! ```
//! use numshuffle::{Codec, PipelineKind};
//!
//! let mut codec = Codec::default();
//! let data = vec![10i64, 12, 9, 9, 20];
//! let frame = codec.compress(PipelineKind::Delta, &data).unwrap();
//! let restored: Vec<i64> = codec.decompress(PipelineKind::Delta, &frame).unwrap();
//! assert_eq!(restored, data);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod types;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::Codec;
pub use config::{CompressionProfile, NumshuffleConfig, TransposeMode};
pub use error::NumshuffleError;
pub use kernels::byte_view::ByteView;
pub use observability::enable_verbose_logging;
pub use pipeline::{ByteCompressor, PipelineKind, ZstdCompressor};
pub use traits::{BitPattern, Numeric};
pub use types::NumshuffleDataType;
