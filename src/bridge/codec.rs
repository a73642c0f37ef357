// In: src/bridge/codec.rs

use crate::config::NumshuffleConfig;
use crate::error::NumshuffleError;
use crate::kernels::{anchor_delta, dictionary};
use crate::pipeline::orchestrator;
use crate::pipeline::{ByteCompressor, PipelineKind, ZstdCompressor};
use crate::traits::Numeric;

/// A reusable codec bound to one config and one compressor.
///
/// A `Codec` is not shared between threads; give each thread its own.
#[derive(Debug)]
pub struct Codec<C: ByteCompressor = ZstdCompressor> {
    config: NumshuffleConfig,
    compressor: C,
    scratch: Vec<u8>,
}

impl Codec<ZstdCompressor> {
    /// Creates a zstd-backed codec after validating `config`.
    pub fn new(config: NumshuffleConfig) -> Result<Self, NumshuffleError> {
        Self::with_compressor(config, ZstdCompressor)
    }
}

impl Default for Codec<ZstdCompressor> {
    fn default() -> Self {
        Self {
            config: NumshuffleConfig::default(),
            compressor: ZstdCompressor,
            scratch: Vec::new(),
        }
    }
}

impl<C: ByteCompressor> Codec<C> {
    pub fn with_compressor(
        config: NumshuffleConfig,
        compressor: C,
    ) -> Result<Self, NumshuffleError> {
        config.validate()?;
        Ok(Self {
            config,
            compressor,
            scratch: Vec::new(),
        })
    }

    pub fn config(&self) -> &NumshuffleConfig {
        &self.config
    }

    /// Compresses `data` through the `kind` pipeline into `out`.
    ///
    /// `data` is never modified, including for `PipelineKind::Delta`.
    pub fn compress_into<T: Numeric>(
        &mut self,
        kind: PipelineKind,
        data: &[T],
        out: &mut Vec<u8>,
    ) -> Result<(), NumshuffleError> {
        let level = self.config.compression_level();
        let compressor = &self.compressor;
        let scratch = &mut self.scratch;
        match kind {
            PipelineKind::Plain => {
                orchestrator::plain_compress(compressor, data, scratch, out, level)
            }
            PipelineKind::Shuffle => {
                orchestrator::shuffle_compress(compressor, data, scratch, out, level)
            }
            PipelineKind::Delta => {
                let encoded = anchor_delta::encode_to_vec(data);
                orchestrator::shuffle_compress(compressor, &encoded, scratch, out, level)
            }
            PipelineKind::Dictionary => {
                orchestrator::dictionary_compress(compressor, data, scratch, out, level)
            }
        }
    }

    pub fn compress<T: Numeric>(
        &mut self,
        kind: PipelineKind,
        data: &[T],
    ) -> Result<Vec<u8>, NumshuffleError> {
        let mut out = Vec::new();
        self.compress_into(kind, data, &mut out)?;
        Ok(out)
    }

    /// Decompresses a frame produced by the `kind` pipeline into `out`.
    pub fn decompress_into<T: Numeric>(
        &mut self,
        kind: PipelineKind,
        frame: &[u8],
        out: &mut Vec<T>,
    ) -> Result<(), NumshuffleError> {
        let mode = self.config.transpose_mode;
        let compressor = &self.compressor;
        let scratch = &mut self.scratch;
        match kind {
            PipelineKind::Plain => {
                orchestrator::plain_decompress(compressor, frame, scratch, out, mode)
            }
            PipelineKind::Shuffle => {
                orchestrator::shuffle_decompress(compressor, frame, scratch, out, mode)
            }
            PipelineKind::Delta => {
                orchestrator::delta_decompress(compressor, frame, scratch, out, mode)
            }
            PipelineKind::Dictionary => {
                orchestrator::dictionary_decompress(compressor, frame, scratch, out, mode)
            }
        }
    }

    pub fn decompress<T: Numeric>(
        &mut self,
        kind: PipelineKind,
        frame: &[u8],
    ) -> Result<Vec<T>, NumshuffleError> {
        let mut out = Vec::new();
        self.decompress_into(kind, frame, &mut out)?;
        Ok(out)
    }

    /// Reads the header of a dictionary-pipeline frame without decoding values.
    pub fn inspect_dictionary(
        &mut self,
        frame: &[u8],
    ) -> Result<dictionary::DictionaryInfo, NumshuffleError> {
        self.compressor.decompress(frame, &mut self.scratch)?;
        dictionary::inspect(&self.scratch)
    }
}
