//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `TransferEngine` which acts as the primary
//! entry point for applying instruction batches. It depends on the
//! `WireTransfers` port only; the concrete bank is injected at
//! construction time.

pub mod engine;
