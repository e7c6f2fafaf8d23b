// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{OperatorError, Result};
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

/// Desired state of one WordPress installation: a web tier plus its database.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "wordpress.example.com",
    version = "v1",
    kind = "Wordpress",
    plural = "wordpresses"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct WordpressSpec {
    /// Root password of the database, copied verbatim into the credentials secret
    pub sql_root_password: String,
}

impl Wordpress {
    /// Namespace the children are created in; always the owner's own namespace
    pub fn child_namespace(&self) -> Result<String> {
        self.namespace()
            .ok_or_else(|| OperatorError::MissingNamespace(format!("Wordpress {}", self.name_any())))
    }
}
