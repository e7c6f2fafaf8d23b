// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Web tier: load-balanced service, claim and single-replica deployment.

use crate::constants::frontend;
use crate::resources::storage::persistent_claim;
use crate::resources::{claim_volume, password_env, recreate_strategy, ChildNames};
use crate::types::Wordpress;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, PersistentVolumeClaim, PodSpec, PodTemplateSpec, Service,
    ServicePort, ServiceSpec, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use kube::ResourceExt;

pub fn frontend_service(owner: &Wordpress, names: &ChildNames) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(names.frontend.clone()),
            namespace: owner.namespace(),
            labels: Some(names.app_labels()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                port: frontend::PORT,
                ..Default::default()
            }]),
            selector: Some(names.frontend_selector()),
            type_: Some("LoadBalancer".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn frontend_claim(owner: &Wordpress, names: &ChildNames) -> PersistentVolumeClaim {
    persistent_claim(owner, names, &names.frontend_claim)
}

/// WordPress deployment pointed at the backend service by name
pub fn frontend_deployment(owner: &Wordpress, names: &ChildNames) -> Deployment {
    let selector = names.frontend_selector();

    Deployment {
        metadata: ObjectMeta {
            name: Some(names.frontend.clone()),
            namespace: owner.namespace(),
            labels: Some(names.app_labels()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(selector.clone()),
                ..Default::default()
            },
            strategy: Some(recreate_strategy()),
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(selector),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: frontend::CONTAINER_NAME.to_string(),
                        image: Some(frontend::IMAGE.to_string()),
                        env: Some(vec![
                            EnvVar {
                                name: frontend::DB_HOST_ENV.to_string(),
                                value: Some(names.backend.clone()),
                                value_from: None,
                            },
                            password_env(frontend::DB_PASSWORD_ENV, names),
                        ]),
                        ports: Some(vec![ContainerPort {
                            name: Some(frontend::CONTAINER_NAME.to_string()),
                            container_port: frontend::PORT,
                            ..Default::default()
                        }]),
                        volume_mounts: Some(vec![VolumeMount {
                            name: frontend::VOLUME_NAME.to_string(),
                            mount_path: frontend::MOUNT_PATH.to_string(),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    volumes: Some(vec![claim_volume(
                        frontend::VOLUME_NAME,
                        &names.frontend_claim,
                    )]),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
