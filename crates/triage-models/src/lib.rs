//! Core data models for Triage.
//!
//! This crate provides the fundamental data types shared by the Triage
//! queue and registry crates: item and queue labels, priorities, and the
//! queue item record itself.

pub mod item;
pub mod label;

// Re-export main types
pub use item::{Item, Priority};
pub use label::{ItemLabel, QueueLabel};
