//! The pipeline layer composes the kernels into the end-to-end codecs.
//!
//! Every pipeline is a pair of free functions over caller-owned buffers:
//!
//! | Pipeline     | Encode                                   | Wire bytes handed to the compressor |
//! |--------------|------------------------------------------|-------------------------------------|
//! | `Plain`      | little-endian bytes                      | element-major layout                |
//! | `Shuffle`    | transpose                                | transposed layout                   |
//! | `Delta`      | anchor-delta (in place), then transpose  | transposed layout                   |
//! | `Dictionary` | dictionary encode                        | dictionary buffer                   |
//!
//! No pipeline adds a length header of its own; the compressor's frame and the
//! dictionary buffer are self-describing.

use serde::{Deserialize, Serialize};

pub mod compressor;
pub mod orchestrator;


pub use compressor::{ByteCompressor, ZstdCompressor};

/// Selects one of the end-to-end pipelines.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    Plain,
    Shuffle,
    Delta,
    Dictionary,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 4] = [
        PipelineKind::Plain,
        PipelineKind::Shuffle,
        PipelineKind::Delta,
        PipelineKind::Dictionary,
    ];
}
