//! Movement domain: system modules.

pub(crate) mod input;
pub(crate) mod movement;
