//!
//! runflow's runtime value model
//!
//! This crate contains the loosely-typed values the calling engine hands to
//! native actions, along with the errors actions raise back at it.

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

pub mod display;
pub mod errors;
pub mod values;
