//! Individual generators and combinators.
//!
//! Atomic generators produce one elementary value:
//!
//! - `uid` - process-unique identifiers
//! - `option` - uniform choice from a fixed set
//! - `conditional` - dispatch to a sub-generator by discriminant
//! - `pattern` - strings matching a regular expression
//! - `date_range` - timestamps in a closed interval
//! - `constant` - a fixed value
//!
//! Combinators build larger generators from smaller ones:
//!
//! - `concat` - text concatenation of two generators
//! - `series` - N independent values
//! - `bundle` - named fields evaluated in declaration order

pub mod bundle;
pub mod concat;
pub mod conditional;
pub mod constant;
pub mod date_range;
pub mod option;
pub mod pattern;
pub mod series;
pub mod uid;
