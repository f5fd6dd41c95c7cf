use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::{DatabaseHealthStatus, ReadinessReport},
};

pub trait HealthCheckRepository: Send + Sync {
    /// Round-trip time of a database ping, in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn readiness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}

pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn readiness(&self) -> impl Future<Output = Result<ReadinessReport, CoreError>> + Send;
}
