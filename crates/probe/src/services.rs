//! Catalog of services with a known readiness endpoint.
//!
//! | Service          | Endpoint  | Ready when                              |
//! |------------------|-----------|-----------------------------------------|
//! | Schema Registry  | `config`  | body contains `compatibilityLevel`      |
//! | Kafka REST Proxy | `topics`  | any 2xx                                 |
//! | Control Center   | `/`       | body contains `Control Center`          |
//! | Kafka Connect    | `/`       | body is a JSON object with `version`    |

use std::fmt;

use crate::checker::check_component_ready;
use crate::descriptor::{Expectation, ProbeDescriptor, ProbeTarget};
use crate::error::Result;

/// A service with a known readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    SchemaRegistry,
    KafkaRest,
    ControlCenter,
    Connect,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::SchemaRegistry,
        Service::KafkaRest,
        Service::ControlCenter,
        Service::Connect,
    ];

    /// Human-readable component name used in messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Service::SchemaRegistry => "Schema Registry",
            Service::KafkaRest => "Kafka REST Proxy",
            Service::ControlCenter => "Control Center",
            Service::Connect => "Kafka Connect",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Service::SchemaRegistry => "config",
            Service::KafkaRest => "topics",
            Service::ControlCenter | Service::Connect => "/",
        }
    }

    pub fn expectation(self) -> Expectation {
        match self {
            Service::SchemaRegistry => Expectation::Contains("compatibilityLevel".to_string()),
            Service::KafkaRest => Expectation::Status,
            Service::ControlCenter => Expectation::Contains("Control Center".to_string()),
            Service::Connect => Expectation::JsonField("version".to_string()),
        }
    }

    /// Full probe for this service at `target`.
    pub fn descriptor(self, target: ProbeTarget) -> ProbeDescriptor {
        ProbeDescriptor {
            target,
            endpoint: self.endpoint().to_string(),
            expectation: self.expectation(),
            component: self.display_name().to_string(),
        }
    }

    /// Wait until this service at `target` is ready.
    pub async fn check_ready(self, target: ProbeTarget) -> Result<()> {
        check_component_ready(&self.descriptor(target)).await
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Wait until Schema Registry answers `config` with its compatibility level.
pub async fn check_schema_registry_ready(target: ProbeTarget) -> Result<()> {
    Service::SchemaRegistry.check_ready(target).await
}

/// Wait until the Kafka REST Proxy answers `topics` with a 2xx status.
pub async fn check_kafka_rest_ready(target: ProbeTarget) -> Result<()> {
    Service::KafkaRest.check_ready(target).await
}

/// Wait until Control Center serves its landing page.
pub async fn check_control_center_ready(target: ProbeTarget) -> Result<()> {
    Service::ControlCenter.check_ready(target).await
}

/// Wait until Kafka Connect reports its version.
pub async fn check_connect_ready(target: ProbeTarget) -> Result<()> {
    Service::Connect.check_ready(target).await
}
