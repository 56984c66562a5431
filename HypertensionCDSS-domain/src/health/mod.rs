//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::services::AssessmentServiceTrait;

/// System health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// The service cannot produce assessments
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == SystemStatus::Healthy
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the classifier
    /// Returns the model description when loaded, an error message otherwise
    async fn check_model_status(&self) -> Result<String, String>;
}

/// Health service that reports on the assessment service's classifier
pub struct HealthService {
    assessment: Arc<dyn AssessmentServiceTrait>,
}

impl HealthService {
    pub fn new(assessment: Arc<dyn AssessmentServiceTrait>) -> Self {
        Self { assessment }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let model_component = match self.check_model_status().await {
            Ok(description) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: Some(description),
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e),
            },
        };

        // The API answers if this code runs at all
        let api_component = HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };

        let components: HashMap<String, HealthComponent> = vec![
            ("model".to_string(), model_component),
            ("api".to_string(), api_component),
        ]
        .into_iter()
        .collect();

        SystemHealth {
            status: overall_status(components.values()),
            components,
        }
    }

    async fn check_model_status(&self) -> Result<String, String> {
        self.assessment
            .model_description()
            .ok_or_else(|| "Model not loaded".to_string())
    }
}

/// The system is healthy only when every component is
pub fn overall_status<'a>(components: impl IntoIterator<Item = &'a HealthComponent>) -> SystemStatus {
    let all_healthy = components
        .into_iter()
        .all(|component| component.status == ComponentStatus::Healthy);

    if all_healthy {
        SystemStatus::Healthy
    } else {
        SystemStatus::Unhealthy
    }
}
