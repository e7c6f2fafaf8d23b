// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes reconcilers that react to watch events.

pub mod plan;
pub mod wordpress;

pub use plan::{reconcile_children, ReconcileOutcome, ReconcileReport, RECONCILE_ORDER};
pub use wordpress::{handle_trigger, WordpressReconciler};
