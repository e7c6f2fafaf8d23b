// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes primitives: CRD discovery, existence checks, ownership and create-if-absent.

pub mod crd;
pub mod ensure;
pub mod existence;
pub mod ownership;

pub use crd::wait_for_wordpress_crd;
pub use ensure::{ensure_present, EnsureOutcome};
pub use existence::{probe, Presence};
pub use ownership::bind_owner;
