// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Existence checks against the API server.

use crate::error::{OperatorError, Result};
use kube::{Api, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

/// Ask whether object `name` of kind `K` exists in the namespace `api` is scoped to.
///
/// Only a 404 means absent; any other failure is `QueryFailed`.
/// The fields of an existing object are never inspected.
#[instrument(skip(api), fields(kind = %K::kind(&())))]
pub async fn probe<K>(api: &Api<K>, name: &str) -> Result<Presence>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    match api.get(name).await {
        Ok(_) => Ok(Presence::Present),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("{} {} not found", K::kind(&()), name);
            Ok(Presence::Absent)
        }
        Err(source) => Err(OperatorError::QueryFailed {
            kind: K::kind(&()).to_string(),
            name: name.to_string(),
            source,
        }),
    }
}
