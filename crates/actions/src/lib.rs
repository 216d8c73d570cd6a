//!
//! runflow's native actions library
//!
//! This crate contains the native actions a calling engine binds into its
//! flows, along with the typed helpers used to validate their parameters.

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

mod content;
mod helpers;

pub use self::content::define_native_actions;
pub use self::helpers::{
    args::{Arg, ArgHandler, OptionalArg, Params, RequiredArg},
    coerce::coerce_to_int,
    fns::{Action, ActionBody, ParamDecl},
    types::*,
};
