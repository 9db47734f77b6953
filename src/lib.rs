//! Typed, bidirectional field conversions for the Discord API.
//!
//! Discord objects travel as loosely typed JSON. This crate declares every
//! attribute once, as a [`Field`](field::Field), and derives from it the
//! three conversions an API client needs: reading the wire form, writing it
//! back with Discord's default omission rules, and validating values handed
//! in by user code.
//!
//! On top of the fields sits the [`audit_log`] module, which turns the
//! `changes` of audit log entries into typed before/after pairs
//! ([`ChangeValue`](value::ChangeValue)) through a registry built once per
//! process.
//!
//! The crate performs no I/O. Malformed wire values that can be absorbed by
//! defaulting are reported through [`tracing`] and never fail a payload.

pub mod audit_log;
pub mod field;
pub mod types;
pub mod value;
