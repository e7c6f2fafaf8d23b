// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Derivation of child names and label selectors from the owner.

use crate::constants::{backend, frontend, labels, secret};
use crate::error::{OperatorError, Result};
use crate::types::Wordpress;
use kube::ResourceExt;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How child identities relate to the owner's identity.
///
/// `Shared` reproduces the fixed names every installation has always used, so
/// two Wordpress objects in one namespace share (and fight over) the same
/// children. `OwnerScoped` prefixes every name with the owner's name and adds
/// an instance label to every selector, so installations never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    #[default]
    Shared,
    OwnerScoped,
}

impl FromStr for NamingMode {
    type Err = OperatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shared" => Ok(NamingMode::Shared),
            "owner-scoped" => Ok(NamingMode::OwnerScoped),
            other => Err(OperatorError::InvalidConfig(format!(
                "unknown child naming mode '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for NamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingMode::Shared => f.write_str("shared"),
            NamingMode::OwnerScoped => f.write_str("owner-scoped"),
        }
    }
}

const MAX_LABEL_LEN: usize = 63;

fn is_dns_label(name: &str) -> bool {
    let bytes = name.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_LEN
                && first.is_ascii_lowercase()
                && (last.is_ascii_lowercase() || last.is_ascii_digit())
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        }
        _ => false,
    }
}

/// Every name and label a reconciliation of one owner needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildNames {
    pub secret: String,
    pub backend: String,
    pub backend_claim: String,
    pub frontend: String,
    pub frontend_claim: String,
    instance: Option<String>,
}

impl ChildNames {
    pub fn for_owner(owner: &Wordpress, mode: NamingMode) -> Self {
        match mode {
            NamingMode::Shared => ChildNames {
                secret: secret::NAME.to_string(),
                backend: backend::NAME.to_string(),
                backend_claim: backend::CLAIM_NAME.to_string(),
                frontend: frontend::NAME.to_string(),
                frontend_claim: frontend::CLAIM_NAME.to_string(),
                instance: None,
            },
            NamingMode::OwnerScoped => {
                let owner_name = owner.name_any();
                let scoped = |base: &str| format!("{}-{}", owner_name, base);
                ChildNames {
                    secret: scoped(secret::NAME),
                    backend: scoped(backend::NAME),
                    backend_claim: scoped(backend::CLAIM_NAME),
                    frontend: scoped(frontend::NAME),
                    frontend_claim: scoped(frontend::CLAIM_NAME),
                    instance: Some(owner_name),
                }
            }
        }
    }

    /// Check that every child name is usable as a Service name (an RFC 1035
    /// label). Only owner-scoped names can fail: the owner name may contain
    /// dots or be too long once the suffix is appended.
    pub fn validate(&self) -> Result<()> {
        for name in [
            &self.secret,
            &self.backend,
            &self.backend_claim,
            &self.frontend,
            &self.frontend_claim,
        ] {
            if !is_dns_label(name) {
                return Err(OperatorError::InvalidChildName(format!(
                    "'{}' is not a lowercase RFC 1035 label of at most {} characters",
                    name, MAX_LABEL_LEN
                )));
            }
        }
        Ok(())
    }

    /// Labels put on the metadata of services, claims and workloads
    pub fn app_labels(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::from([(labels::APP.to_string(), labels::APP_VALUE.to_string())]);
        if let Some(instance) = &self.instance {
            map.insert(labels::INSTANCE.to_string(), instance.clone());
        }
        map
    }

    /// Pod labels and selector of the database tier
    pub fn backend_selector(&self) -> BTreeMap<String, String> {
        self.tier_selector(labels::BACKEND_TIER)
    }

    /// Pod labels and selector of the web tier
    pub fn frontend_selector(&self) -> BTreeMap<String, String> {
        self.tier_selector(labels::FRONTEND_TIER)
    }

    fn tier_selector(&self, tier: &str) -> BTreeMap<String, String> {
        let mut map = self.app_labels();
        map.insert(labels::TIER.to_string(), tier.to_string());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordpressSpec;
    use kube::api::ObjectMeta;

    fn make_wordpress(name: &str) -> Wordpress {
        Wordpress {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some("ns1".to_string()),
                ..Default::default()
            },
            spec: WordpressSpec {
                sql_root_password: "s3cr3t".to_string(),
            },
        }
    }

    #[test]
    fn test_shared_names_are_fixed_literals() {
        let names = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::Shared);

        assert_eq!(names.secret, "mysql-pass");
        assert_eq!(names.backend, "wordpress-mysql");
        assert_eq!(names.backend_claim, "mysql-pv-claim");
        assert_eq!(names.frontend, "wordpress");
        assert_eq!(names.frontend_claim, "wp-pv-claim");
    }

    #[test]
    fn test_shared_naming_collides_across_owners() {
        // Known defect of shared naming: two installations in one namespace
        // resolve to the same children, so the second one never gets its own.
        let first = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::Shared);
        let second = ChildNames::for_owner(&make_wordpress("site2"), NamingMode::Shared);

        assert_eq!(first, second);
        assert_eq!(first.backend_selector(), second.backend_selector());
    }

    #[test]
    fn test_owner_scoped_names_are_prefixed() {
        let names = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::OwnerScoped);

        assert_eq!(names.secret, "site1-mysql-pass");
        assert_eq!(names.backend, "site1-wordpress-mysql");
        assert_eq!(names.backend_claim, "site1-mysql-pv-claim");
        assert_eq!(names.frontend, "site1-wordpress");
        assert_eq!(names.frontend_claim, "site1-wp-pv-claim");
    }

    #[test]
    fn test_owner_scoped_naming_does_not_collide() {
        let first = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::OwnerScoped);
        let second = ChildNames::for_owner(&make_wordpress("site2"), NamingMode::OwnerScoped);

        assert_ne!(first.secret, second.secret);
        assert_ne!(first.frontend, second.frontend);
        assert_ne!(first.frontend_selector(), second.frontend_selector());
    }

    #[test]
    fn test_shared_selectors() {
        let names = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::Shared);

        assert_eq!(
            names.backend_selector(),
            BTreeMap::from([
                ("app".to_string(), "wordpress".to_string()),
                ("tier".to_string(), "mysql".to_string()),
            ])
        );
        assert_eq!(
            names.frontend_selector().get("tier").map(String::as_str),
            Some("frontend")
        );
        assert!(!names.app_labels().contains_key(labels::INSTANCE));
    }

    #[test]
    fn test_owner_scoped_selectors_carry_instance() {
        let names = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::OwnerScoped);

        assert_eq!(
            names.backend_selector().get(labels::INSTANCE).map(String::as_str),
            Some("site1")
        );
        assert_eq!(
            names.app_labels().get(labels::INSTANCE).map(String::as_str),
            Some("site1")
        );
    }

    #[test]
    fn test_shared_names_are_valid() {
        let names = ChildNames::for_owner(&make_wordpress("blog.example"), NamingMode::Shared);
        assert!(names.validate().is_ok());
    }

    #[test]
    fn test_owner_scoped_names_validate() {
        let names = ChildNames::for_owner(&make_wordpress("site1"), NamingMode::OwnerScoped);
        assert!(names.validate().is_ok());

        // 47 characters is the longest owner name that still fits "-wordpress-mysql"
        let longest = "a".repeat(47);
        let names = ChildNames::for_owner(&make_wordpress(&longest), NamingMode::OwnerScoped);
        assert!(names.validate().is_ok());
    }

    #[test]
    fn test_owner_scoped_names_reject_dotted_owner() {
        let names = ChildNames::for_owner(&make_wordpress("blog.example"), NamingMode::OwnerScoped);
        assert!(matches!(
            names.validate(),
            Err(OperatorError::InvalidChildName(_))
        ));
    }

    #[test]
    fn test_owner_scoped_names_reject_long_owner() {
        let too_long = "a".repeat(48);
        let names = ChildNames::for_owner(&make_wordpress(&too_long), NamingMode::OwnerScoped);
        assert!(matches!(
            names.validate(),
            Err(OperatorError::InvalidChildName(_))
        ));
    }

    #[test]
    fn test_owner_scoped_names_reject_leading_digit() {
        let names = ChildNames::for_owner(&make_wordpress("1site"), NamingMode::OwnerScoped);
        assert!(names.validate().is_err());
    }

    #[test]
    fn test_naming_mode_parse() {
        assert_eq!("shared".parse::<NamingMode>().unwrap(), NamingMode::Shared);
        assert_eq!(
            "owner-scoped".parse::<NamingMode>().unwrap(),
            NamingMode::OwnerScoped
        );
        assert!("Shared".parse::<NamingMode>().is_err());
        assert_eq!(NamingMode::OwnerScoped.to_string(), "owner-scoped");
    }
}
