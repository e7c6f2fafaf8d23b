// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Owner references for cascading deletion.

use crate::error::{OperatorError, Result};
use crate::types::Wordpress;
use kube::{Resource, ResourceExt};

/// Mark `child` as controlled by `owner` so deleting the owner deletes the child.
///
/// Must run before the child is created. Fails when the owner has no uid yet,
/// in which case nothing may be written.
pub fn bind_owner<K: Resource>(child: &mut K, owner: &Wordpress) -> Result<()> {
    let mut owner_ref = owner.controller_owner_ref(&()).ok_or_else(|| {
        OperatorError::OwnerReference(format!("Wordpress {} has no uid", owner.name_any()))
    })?;
    owner_ref.block_owner_deletion = Some(true);

    let child_name = child.name_any();
    let refs = child.meta_mut().owner_references.get_or_insert_with(Vec::new);
    if refs.iter().any(|r| r.controller == Some(true) && r.uid != owner_ref.uid) {
        return Err(OperatorError::OwnerReference(format!(
            "{} already has a different controller",
            child_name
        )));
    }
    if !refs.iter().any(|r| r.uid == owner_ref.uid) {
        refs.push(owner_ref);
    }
    Ok(())
}
