//! This module is the "toolbox" of the numshuffle library.
//!
//! Each kernel is a pure, stateless, reversible transform over caller-owned
//! buffers. The kernels are composed into pipelines by `crate::pipeline`.
//!
//! Layering, leaf first:
//! *   `byte_view`    -- canonical little-endian bytes of one value.
//! *   `transpose`    -- byte-plane shuffle of a whole sequence.
//! *   `anchor_delta` -- in-place value reduction re-biased by the first element.
//! *   `dictionary`   -- sorted dictionary + minimal-width transposed ranks.
//! *   `zstd`         -- the final entropy stage.

pub mod anchor_delta;
pub mod byte_view;
pub mod dictionary;
pub mod transpose;
pub mod zstd;
