// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::secret;
use crate::resources::ChildNames;
use crate::types::Wordpress;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use kube::ResourceExt;
use std::collections::BTreeMap;

/// Secret holding the database root password under the `password` key
pub fn credentials_secret(owner: &Wordpress, names: &ChildNames) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(names.secret.clone()),
            namespace: owner.namespace(),
            ..Default::default()
        },
        type_: Some(secret::TYPE.to_string()),
        data: Some(BTreeMap::from([(
            secret::PASSWORD_KEY.to_string(),
            ByteString(owner.spec.sql_root_password.as_bytes().to_vec()),
        )])),
        ..Default::default()
    }
}
