// In: src/bridge/stateless_api.rs

use crate::bridge::codec::Codec;
use crate::config::NumshuffleConfig;
use crate::error::NumshuffleError;
use crate::kernels::dictionary::{self, DictionaryInfo};
use crate::pipeline::PipelineKind;
use crate::traits::Numeric;

/// Compresses `data` with the default config. The input is never modified.
pub fn compress<T: Numeric>(kind: PipelineKind, data: &[T]) -> Result<Vec<u8>, NumshuffleError> {
    Codec::default().compress(kind, data)
}

/// Decompresses a frame with the default (strict) config.
pub fn decompress<T: Numeric>(kind: PipelineKind, frame: &[u8]) -> Result<Vec<T>, NumshuffleError> {
    Codec::default().decompress(kind, frame)
}

/// One-shot compress under an explicit config.
pub fn compress_with_config<T: Numeric>(
    kind: PipelineKind,
    data: &[T],
    config: NumshuffleConfig,
) -> Result<Vec<u8>, NumshuffleError> {
    Codec::new(config)?.compress(kind, data)
}

/// Reads the dictionary header of an already-decompressed dictionary buffer.
pub fn analyze_dictionary(dict_buf: &[u8]) -> Result<DictionaryInfo, NumshuffleError> {
    dictionary::inspect(dict_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stateless_roundtrip_for_every_pipeline() {
        let data: Vec<i32> = vec![10, 12, 9, 9, 20, -4, i32::MIN, i32::MAX];
        for kind in PipelineKind::ALL {
            let frame = compress(kind, &data).unwrap();
            let restored: Vec<i32> = decompress(kind, &frame).unwrap();
            assert_eq!(restored, data, "pipeline {:?}", kind);
        }
    }

    #[test]
    fn test_compress_with_config_rejects_bad_level() {
        let config = NumshuffleConfig {
            level: Some(10_000),
            ..Default::default()
        };
        let err = compress_with_config(PipelineKind::Shuffle, &[1u8, 2, 3], config).unwrap_err();
        assert!(matches!(err, NumshuffleError::ConfigError(_)));
    }

    #[test]
    fn test_analyze_dictionary_reports_header() {
        let mut buf = Vec::new();
        dictionary::encode(&[7u16, 7, 3, 9], &mut buf).unwrap();
        let info = analyze_dictionary(&buf).unwrap();
        assert_eq!(info.value_count, 3);
        assert_eq!(info.entry_width, Some(2));
        assert_eq!(info.index_count, 4);
    }
}
