// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wordpress reconciler - watches Wordpress objects and their children and
//! drives each owner toward its full set of children.

use crate::config::Config;
use crate::error::{OperatorError, Result};
use crate::reconcilers::plan::{reconcile_children, ReconcileOutcome};
use crate::resources::NamingMode;
use crate::types::Wordpress;
use futures::StreamExt;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Secret, Service};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, Resource, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct WordpressReconciler {
    client: Client,
    config: Config,
}

impl WordpressReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let wordpresses: Api<Wordpress> = self.scoped_api();
        let secrets: Api<Secret> = self.scoped_api();
        let services: Api<Service> = self.scoped_api();
        let claims: Api<PersistentVolumeClaim> = self.scoped_api();
        let deployments: Api<Deployment> = self.scoped_api();

        info!(
            "Watching Wordpress objects in {} with {} child naming",
            self.config.watch_namespace.as_deref().unwrap_or("all namespaces"),
            self.config.naming_mode
        );

        let context = Arc::new(self);

        Controller::new(wordpresses, WatcherConfig::default())
            .owns(secrets, WatcherConfig::default())
            .owns(services, WatcherConfig::default())
            .owns(claims, WatcherConfig::default())
            .owns(deployments, WatcherConfig::default())
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled wordpress: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }

    fn scoped_api<K>(&self) -> Api<K>
    where
        K: Resource<DynamicType = (), Scope = NamespaceResourceScope>
            + Clone
            + DeserializeOwned
            + Debug,
    {
        match &self.config.watch_namespace {
            Some(namespace) => Api::namespaced(self.client.clone(), namespace),
            None => Api::all(self.client.clone()),
        }
    }
}

/// Handle one trigger for the owner `namespace/name`.
///
/// The owner is always re-read: the trigger only identifies it. An owner that
/// no longer exists is not an error and no child is touched.
#[instrument(skip(client))]
pub async fn handle_trigger(
    client: &Client,
    namespace: &str,
    name: &str,
    mode: NamingMode,
) -> Result<ReconcileOutcome> {
    let wordpresses: Api<Wordpress> = Api::namespaced(client.clone(), namespace);

    let owner = match wordpresses.get_opt(name).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            info!("Wordpress {}/{} no longer exists, nothing to do", namespace, name);
            return Ok(ReconcileOutcome::OwnerVanished);
        }
        Err(source) => {
            return Err(OperatorError::QueryFailed {
                kind: "Wordpress".to_string(),
                name: name.to_string(),
                source,
            })
        }
    };

    let report = reconcile_children(client, &owner, mode).await?;
    Ok(ReconcileOutcome::Done(report))
}

async fn reconcile(wordpress: Arc<Wordpress>, ctx: Arc<WordpressReconciler>) -> Result<Action> {
    let name = wordpress.name_any();
    let namespace = wordpress.child_namespace()?;

    debug!("Reconciling wordpress: {}/{}", namespace, name);

    match handle_trigger(&ctx.client, &namespace, &name, ctx.config.naming_mode).await? {
        ReconcileOutcome::Done(_) => Ok(Action::requeue(ctx.config.requeue_interval())),
        ReconcileOutcome::OwnerVanished => Ok(Action::await_change()),
    }
}

fn error_policy(
    _wordpress: Arc<Wordpress>,
    error: &OperatorError,
    ctx: Arc<WordpressReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(ctx.config.error_requeue_interval())
}
