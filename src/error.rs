// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperatorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    /// The store could not answer whether an object exists. Never treated as absent.
    #[error("Failed to query {kind} {name}: {source}")]
    QueryFailed {
        kind: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to create {kind} {name}: {source}")]
    CreateFailed {
        kind: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    /// Another actor created the object between our existence check and our create.
    #[error("{kind} {name} was created concurrently by another actor")]
    AlreadyExists { kind: String, name: String },

    #[error("Cannot set owner reference: {0}")]
    OwnerReference(String),

    #[error("Invalid child name: {0}")]
    InvalidChildName(String),

    #[error("Object has no namespace: {0}")]
    MissingNamespace(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, OperatorError>;
