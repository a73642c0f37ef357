//! This module defines the strongly-typed runtime tag for the element types
//! that the numshuffle kernels accept.

pub mod numshuffle_data_type;

// Re-export the main type(s) for easier access.
pub use numshuffle_data_type::NumshuffleDataType;
