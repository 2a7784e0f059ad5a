//! Command line front ends over the conversion core

pub mod convert;
pub mod interactive;
pub mod list;
pub mod setup;
pub mod ui;
