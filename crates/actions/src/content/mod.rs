//!
//! This module contains all native actions exposed to the calling engine
//!
//! Each action has its own dedicated module.

mod replace;

use crate::helpers::fns::Action;

/// Generate the list of native actions
pub fn define_native_actions() -> Vec<Action> {
    vec![
        // Collect each action from its individual module
        self::replace::build_action(),
    ]
}
