//! Quick descriptive statistics over small sample buffers.
//!
//! Every function is stateless and works on caller-owned slices. Order
//! statistics sort a private copy, so only the functions in [`cleaning`]
//! ever modify their input. Degenerate inputs (empty or single-sample
//! sequences, zero averages, constant `x` in a regression) are reported
//! through NaN or infinite results rather than errors or panics.
//!
//! ```
//! use quickstats::{cleaning, regression, stats};
//!
//! let mut samples = vec![1.0, f64::NAN, 3.0, f64::INFINITY, 5.0];
//! cleaning::filter_invalid(&mut samples);
//! assert_eq!(samples, [1.0, 3.0, 5.0]);
//! assert_eq!(stats::median(&samples), 3.0);
//!
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [2.0, 4.0, 6.0, 8.0];
//! assert_eq!(regression::slope(&x, &y), 2.0);
//! ```

pub mod cleaning;
pub mod regression;
pub mod sort;
pub mod stats;

pub use regression::Regression;
pub use stats::{Bucket, Summary};
