//! colorbleed-test - Regression test support for colorbleed
//!
//! A small framework for counted comparisons inside regression tests,
//! modeled as numbered checks with a summary report:
//!
//! ```
//! use colorbleed_test::RegParams;
//!
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(4.0, 4.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to run tests in inspection mode

mod error;
mod params;

pub use error::TestError;
pub use params::{RegParams, RegTestMode};
