// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired specifications of every child a Wordpress object owns.
//!
//! Builders are pure: they read the owner and the derived names and return a
//! fully populated object. Owner references are bound later, right before create.

pub mod backend;
pub mod frontend;
pub mod naming;
pub mod secret;
pub mod storage;

pub use backend::{backend_claim, backend_deployment, backend_service};
pub use frontend::{frontend_claim, frontend_deployment, frontend_service};
pub use naming::{ChildNames, NamingMode};
pub use secret::credentials_secret;

use crate::constants::secret as secret_consts;
use k8s_openapi::api::apps::v1::DeploymentStrategy;
use k8s_openapi::api::core::v1::{
    EnvVar, EnvVarSource, PersistentVolumeClaimVolumeSource, SecretKeySelector, Volume,
};
use std::fmt;

/// The seven children managed for every owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    CredentialsSecret,
    BackendEndpoint,
    BackendClaim,
    BackendWorkload,
    FrontendEndpoint,
    FrontendClaim,
    FrontendWorkload,
}

impl ChildKind {
    /// Kind of the object in the store
    pub fn store_kind(&self) -> &'static str {
        match self {
            ChildKind::CredentialsSecret => "Secret",
            ChildKind::BackendEndpoint | ChildKind::FrontendEndpoint => "Service",
            ChildKind::BackendClaim | ChildKind::FrontendClaim => "PersistentVolumeClaim",
            ChildKind::BackendWorkload | ChildKind::FrontendWorkload => "Deployment",
        }
    }

    pub fn child_name<'a>(&self, names: &'a ChildNames) -> &'a str {
        match self {
            ChildKind::CredentialsSecret => &names.secret,
            ChildKind::BackendEndpoint | ChildKind::BackendWorkload => &names.backend,
            ChildKind::BackendClaim => &names.backend_claim,
            ChildKind::FrontendEndpoint | ChildKind::FrontendWorkload => &names.frontend,
            ChildKind::FrontendClaim => &names.frontend_claim,
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChildKind::CredentialsSecret => "credentials secret",
            ChildKind::BackendEndpoint => "backend service",
            ChildKind::BackendClaim => "backend claim",
            ChildKind::BackendWorkload => "backend deployment",
            ChildKind::FrontendEndpoint => "frontend service",
            ChildKind::FrontendClaim => "frontend claim",
            ChildKind::FrontendWorkload => "frontend deployment",
        };
        f.write_str(label)
    }
}

/// Stop old pods before starting new ones; the volumes are single-writer
pub(crate) fn recreate_strategy() -> DeploymentStrategy {
    DeploymentStrategy {
        type_: Some("Recreate".to_string()),
        rolling_update: None,
    }
}

/// Environment variable read from the credentials secret, never inlined
pub(crate) fn password_env(env_name: &str, names: &ChildNames) -> EnvVar {
    EnvVar {
        name: env_name.to_string(),
        value: None,
        value_from: Some(EnvVarSource {
            secret_key_ref: Some(SecretKeySelector {
                name: names.secret.clone(),
                key: secret_consts::PASSWORD_KEY.to_string(),
                optional: None,
            }),
            ..Default::default()
        }),
    }
}

pub(crate) fn claim_volume(volume_name: &str, claim_name: &str) -> Volume {
    Volume {
        name: volume_name.to_string(),
        persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
            claim_name: claim_name.to_string(),
            read_only: None,
        }),
        ..Default::default()
    }
}
