//! Kind-specific extractors turning a binding into a [`ServiceInfo`]

use super::{
    MongoServiceInfo, RabbitServiceInfo, RedisServiceInfo, RelationalServiceInfo, ServiceBinding,
    ServiceInfo,
};
use crate::error::Result;

/// Signature shared by every extractor in the registry
pub type Extractor = fn(&ServiceBinding<'_>) -> Result<ServiceInfo>;

const DEFAULT_VIRTUAL_HOST: &str = "/";

fn relational(binding: &ServiceBinding<'_>) -> Result<RelationalServiceInfo> {
    let id = binding.id()?;
    let creds = binding.credentials()?;

    Ok(RelationalServiceInfo {
        id: id.to_string(),
        host: creds.host()?,
        port: creds.port()?,
        username: creds.username()?,
        password: creds.password()?,
        database: creds.required_str(&["name", "database"])?,
    })
}

pub fn extract_mysql(binding: &ServiceBinding<'_>) -> Result<ServiceInfo> {
    relational(binding).map(ServiceInfo::Mysql)
}

pub fn extract_postgresql(binding: &ServiceBinding<'_>) -> Result<ServiceInfo> {
    relational(binding).map(ServiceInfo::Postgresql)
}

pub fn extract_redis(binding: &ServiceBinding<'_>) -> Result<ServiceInfo> {
    let id = binding.id()?;
    let creds = binding.credentials()?;

    Ok(ServiceInfo::Redis(RedisServiceInfo {
        id: id.to_string(),
        host: creds.host()?,
        port: creds.port()?,
        password: creds.optional_str(&["password", "pass"])?,
        name: creds.required_str(&["name"])?,
    }))
}

pub fn extract_rabbitmq(binding: &ServiceBinding<'_>) -> Result<ServiceInfo> {
    let id = binding.id()?;
    let creds = binding.credentials()?;

    Ok(ServiceInfo::RabbitMq(RabbitServiceInfo {
        id: id.to_string(),
        host: creds.host()?,
        port: creds.port()?,
        username: creds.username()?,
        password: creds.password()?,
        name: creds.required_str(&["name"])?,
        virtual_host: creds
            .optional_str(&["vhost", "virtual_host"])?
            .unwrap_or_else(|| DEFAULT_VIRTUAL_HOST.to_string()),
    }))
}

pub fn extract_mongodb(binding: &ServiceBinding<'_>) -> Result<ServiceInfo> {
    let id = binding.id()?;
    let creds = binding.credentials()?;

    Ok(ServiceInfo::MongoDb(MongoServiceInfo {
        id: id.to_string(),
        host: creds.host()?,
        port: creds.port()?,
        username: creds.username()?,
        password: creds.password()?,
        name: creds.required_str(&["name"])?,
        database: creds.required_str(&["db", "name"])?,
    }))
}
