//! Transformation description and its compiler to the compact wire string.

pub(crate) mod transformation;
