// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered ensure steps for the children of one Wordpress object.

use crate::error::Result;
use crate::kubernetes::{ensure_present, EnsureOutcome};
use crate::resources::{
    backend_claim, backend_deployment, backend_service, credentials_secret, frontend_claim,
    frontend_deployment, frontend_service, ChildKind, ChildNames, NamingMode,
};
use crate::types::Wordpress;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Secret, Service};
use kube::{Api, Client, ResourceExt};
use tracing::{error, info, instrument};

/// Dependency order of the children: the secret before anything that reads it,
/// each tier's service and claim before the deployment that uses them, and the
/// database tier before the web tier.
pub const RECONCILE_ORDER: [ChildKind; 7] = [
    ChildKind::CredentialsSecret,
    ChildKind::BackendEndpoint,
    ChildKind::BackendClaim,
    ChildKind::BackendWorkload,
    ChildKind::FrontendEndpoint,
    ChildKind::FrontendClaim,
    ChildKind::FrontendWorkload,
];

/// What one successful pass over `RECONCILE_ORDER` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub steps: Vec<(ChildKind, EnsureOutcome)>,
}

impl ReconcileReport {
    pub fn created(&self) -> usize {
        self.steps
            .iter()
            .filter(|(_, outcome)| *outcome == EnsureOutcome::Created)
            .count()
    }

    /// True when every child already existed and nothing was written
    pub fn is_noop(&self) -> bool {
        self.created() == 0
    }
}

/// Result of handling one trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// All children exist; run again soon
    Done(ReconcileReport),
    /// The owner is gone; its children are removed by cascading deletion
    OwnerVanished,
}

/// Run the ensure step of a single child kind
pub async fn ensure_child(
    client: &Client,
    owner: &Wordpress,
    names: &ChildNames,
    kind: ChildKind,
) -> Result<EnsureOutcome> {
    let namespace = owner.child_namespace()?;
    let name = kind.child_name(names);

    match kind {
        ChildKind::CredentialsSecret => {
            let api: Api<Secret> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || credentials_secret(owner, names)).await
        }
        ChildKind::BackendEndpoint => {
            let api: Api<Service> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || backend_service(owner, names)).await
        }
        ChildKind::BackendClaim => {
            let api: Api<PersistentVolumeClaim> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || backend_claim(owner, names)).await
        }
        ChildKind::BackendWorkload => {
            let api: Api<Deployment> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || backend_deployment(owner, names)).await
        }
        ChildKind::FrontendEndpoint => {
            let api: Api<Service> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || frontend_service(owner, names)).await
        }
        ChildKind::FrontendClaim => {
            let api: Api<PersistentVolumeClaim> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || frontend_claim(owner, names)).await
        }
        ChildKind::FrontendWorkload => {
            let api: Api<Deployment> = Api::namespaced(client.clone(), &namespace);
            ensure_present(&api, owner, name, || frontend_deployment(owner, names)).await
        }
    }
}

/// Ensure every child in `RECONCILE_ORDER`, stopping at the first failure.
///
/// Children created before the failure are kept; later ones are not attempted.
#[instrument(skip(client, owner), fields(owner = %format!("{}/{}", owner.namespace().unwrap_or_default(), owner.name_any())))]
pub async fn reconcile_children(
    client: &Client,
    owner: &Wordpress,
    mode: NamingMode,
) -> Result<ReconcileReport> {
    let names = ChildNames::for_owner(owner, mode);
    if let Err(e) = names.validate() {
        error!("Cannot derive children for {}: {}", owner.name_any(), e);
        return Err(e);
    }

    let mut report = ReconcileReport::default();

    for kind in RECONCILE_ORDER {
        match ensure_child(client, owner, &names, kind).await {
            Ok(outcome) => report.steps.push((kind, outcome)),
            Err(e) => {
                error!(
                    "Failed to ensure {} ({} {}): {}",
                    kind,
                    kind.store_kind(),
                    kind.child_name(&names),
                    e
                );
                return Err(e);
            }
        }
    }

    if report.is_noop() {
        info!("All children present, nothing to do");
    } else {
        info!("Created {} of {} children", report.created(), report.steps.len());
    }

    Ok(report)
}
