// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the convenient, stateful face of the library. It owns what a
// caller would otherwise have to thread through every call by hand: the config,
// the compressor, and the reusable scratch buffer.
//
// Data Flow (Compression):
//
//   1. [Codec::compress(kind, &[T])]
//         |
//         `-> Delta only: copies the input, so the caller's slice is never mutated
//         |
//         `-> calls the matching `pipeline::orchestrator::*_compress` with the
//             config's zstd level and the codec's scratch buffer
//
// Data Flow (Decompression):
//
//   1. [Codec::decompress(kind, &[u8])]
//         |
//         `-> calls the matching `pipeline::orchestrator::*_decompress` with the
//             config's transpose mode
//
// `stateless_api` wraps a throwaway default `Codec` for one-shot calls. The
// pipeline functions stay public for callers that want to own their buffers.
// ====================================================================================
pub mod codec;
pub mod stateless_api;

pub use codec::Codec;
pub use stateless_api::{analyze_dictionary, compress, compress_with_config, decompress};
