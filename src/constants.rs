// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name, used as the field manager and in log lines
pub const OPERATOR_NAME: &str = "wordpress-operator";

/// Owner custom resource coordinates and CRD polling configuration
pub mod crd {
    pub const GROUP: &str = "wordpress.example.com";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "Wordpress";
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Label keys and values shared by every managed child
pub mod labels {
    pub const APP: &str = "app";
    pub const TIER: &str = "tier";
    pub const INSTANCE: &str = "app.kubernetes.io/instance";
    pub const APP_VALUE: &str = "wordpress";
    pub const BACKEND_TIER: &str = "mysql";
    pub const FRONTEND_TIER: &str = "frontend";
}

/// Credentials secret layout
pub mod secret {
    pub const NAME: &str = "mysql-pass";
    pub const PASSWORD_KEY: &str = "password";
    pub const TYPE: &str = "Opaque";
}

/// Database tier
pub mod backend {
    pub const NAME: &str = "wordpress-mysql";
    pub const CLAIM_NAME: &str = "mysql-pv-claim";
    pub const CONTAINER_NAME: &str = "mysql";
    pub const IMAGE: &str = "mysql:5.6";
    pub const PORT: i32 = 3306;
    pub const VOLUME_NAME: &str = "mysql-persistent-storage";
    pub const MOUNT_PATH: &str = "/var/lib/mysql";
    pub const ROOT_PASSWORD_ENV: &str = "MYSQL_ROOT_PASSWORD";
}

/// Web tier
pub mod frontend {
    pub const NAME: &str = "wordpress";
    pub const CLAIM_NAME: &str = "wp-pv-claim";
    pub const CONTAINER_NAME: &str = "wordpress";
    pub const IMAGE: &str = "wordpress:4.8-apache";
    pub const PORT: i32 = 80;
    pub const VOLUME_NAME: &str = "wordpress-persistent-storage";
    pub const MOUNT_PATH: &str = "/var/www/html";
    pub const DB_HOST_ENV: &str = "WORDPRESS_DB_HOST";
    pub const DB_PASSWORD_ENV: &str = "WORDPRESS_DB_PASSWORD";
}

/// Persistent claims, identical for both tiers
pub mod storage {
    pub const ACCESS_MODE: &str = "ReadWriteOnce";
    pub const CAPACITY: &str = "10Gi";
}

/// Defaults for values that can be overridden from the environment
pub mod defaults {
    pub const REQUEUE_INTERVAL_SECS: u64 = 10;
    pub const ERROR_REQUEUE_SECS: u64 = 60;
}
