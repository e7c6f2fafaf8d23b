// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-if-absent for owned children.

use crate::constants::OPERATOR_NAME;
use crate::error::{OperatorError, Result};
use crate::kubernetes::existence::{probe, Presence};
use crate::kubernetes::ownership::bind_owner;
use crate::types::Wordpress;
use kube::{api::PostParams, Api, Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyPresent,
}

/// Make sure child `name` exists, creating it from `build` when it does not.
///
/// An existing child is left untouched even if it differs from what `build`
/// would produce. `build` is only called when the child is absent, and the
/// owner reference is bound before the create is submitted. A 409 on create
/// means another actor won the race and is reported as `AlreadyExists`.
#[instrument(skip(api, owner, build), fields(kind = %K::kind(&()), owner = %owner.name_any()))]
pub async fn ensure_present<K, F>(
    api: &Api<K>,
    owner: &Wordpress,
    name: &str,
    build: F,
) -> Result<EnsureOutcome>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug,
    F: FnOnce() -> K,
{
    let kind = K::kind(&()).to_string();

    if probe(api, name).await? == Presence::Present {
        debug!("{} {} already exists", kind, name);
        return Ok(EnsureOutcome::AlreadyPresent);
    }

    let mut child = build();
    bind_owner(&mut child, owner)?;

    let params = PostParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };

    match api.create(&params, &child).await {
        Ok(_) => {
            info!("Created {} {}", kind, name);
            Ok(EnsureOutcome::Created)
        }
        Err(kube::Error::Api(err)) if err.code == 409 => Err(OperatorError::AlreadyExists {
            kind,
            name: name.to_string(),
        }),
        Err(source) => Err(OperatorError::CreateFailed {
            kind,
            name: name.to_string(),
            source,
        }),
    }
}
