//! Request parameter types and their canonical rendering.

pub(crate) mod contract;
pub(crate) mod explicit;
pub(crate) mod map;
pub(crate) mod update_transform;
