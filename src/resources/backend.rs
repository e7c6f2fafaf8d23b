// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Database tier: headless service, claim and single-replica deployment.

use crate::constants::backend;
use crate::resources::storage::persistent_claim;
use crate::resources::{claim_volume, password_env, recreate_strategy, ChildNames};
use crate::types::Wordpress;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PersistentVolumeClaim, PodSpec, PodTemplateSpec, Probe, Service,
    ServicePort, ServiceSpec, TCPSocketAction, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;
use kube::ResourceExt;

/// Headless service: the web tier reaches the database by pod DNS, not through a virtual IP
pub fn backend_service(owner: &Wordpress, names: &ChildNames) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(names.backend.clone()),
            namespace: owner.namespace(),
            labels: Some(names.app_labels()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                port: backend::PORT,
                ..Default::default()
            }]),
            selector: Some(names.backend_selector()),
            cluster_ip: Some("None".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn backend_claim(owner: &Wordpress, names: &ChildNames) -> PersistentVolumeClaim {
    persistent_claim(owner, names, &names.backend_claim)
}

pub fn backend_deployment(owner: &Wordpress, names: &ChildNames) -> Deployment {
    let selector = names.backend_selector();

    Deployment {
        metadata: ObjectMeta {
            name: Some(names.backend.clone()),
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
                        name: backend::CONTAINER_NAME.to_string(),
                        image: Some(backend::IMAGE.to_string()),
                        env: Some(vec![password_env(backend::ROOT_PASSWORD_ENV, names)]),
                        liveness_probe: Some(Probe {
                            tcp_socket: Some(TCPSocketAction {
                                port: IntOrString::Int(backend::PORT),
                                host: None,
                            }),
                            ..Default::default()
                        }),
                        ports: Some(vec![ContainerPort {
                            name: Some(backend::CONTAINER_NAME.to_string()),
                            container_port: backend::PORT,
                            ..Default::default()
                        }]),
                        volume_mounts: Some(vec![VolumeMount {
                            name: backend::VOLUME_NAME.to_string(),
                            mount_path: backend::MOUNT_PATH.to_string(),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    volumes: Some(vec![claim_volume(
                        backend::VOLUME_NAME,
                        &names.backend_claim,
                    )]),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
