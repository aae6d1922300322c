//! Reusable rendering widgets

pub mod scrollbar;
