//! Exact fixed-point arithmetic for AMM calculations.
//!
//! Every pricing and accounting formula in the crate is expressed through
//! the primitives in this module. There is no floating point anywhere:
//! floating error compounds into economically exploitable rounding, so all
//! intermediate products are widened to 256 bits before any division.

mod wide;

pub use wide::{isqrt_product, mul_div, U256};
