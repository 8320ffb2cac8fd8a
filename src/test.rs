//! Support code shared between test modules.

pub(crate) mod quick;
