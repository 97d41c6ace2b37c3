//! tvrecode - Recode video files for playback on TVs
//!
//! This library crate exposes configuration, logging and per-file recoding
//! for the binary and for integration testing. Stream selection lives in
//! `tvrecode-plan`, tool plumbing in `tvrecode-av`.

pub mod config;
pub mod logging;
pub mod recode;
