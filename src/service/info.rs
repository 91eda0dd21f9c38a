//! Typed service descriptors produced from service bindings

use super::ServiceKind;
use crate::error::{ConnectorError, Result};
use serde::Serialize;
use url::Url;

/// Connection details for a relational database binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationalServiceInfo {
    pub id: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Connection details for a key-value store binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedisServiceInfo {
    pub id: String,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub name: String,
}

/// Connection details for a message queue binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RabbitServiceInfo {
    pub id: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Queue or exchange name
    pub name: String,
    pub virtual_host: String,
}

/// Connection details for a document store binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MongoServiceInfo {
    pub id: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Resource (collection group) name
    pub name: String,
    pub database: String,
}

/// One bound backing service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ServiceInfo {
    Mysql(RelationalServiceInfo),
    Postgresql(RelationalServiceInfo),
    Redis(RedisServiceInfo),
    MongoDb(MongoServiceInfo),
    RabbitMq(RabbitServiceInfo),
}

impl ServiceInfo {
    pub fn id(&self) -> &str {
        match self {
            ServiceInfo::Mysql(info) | ServiceInfo::Postgresql(info) => &info.id,
            ServiceInfo::Redis(info) => &info.id,
            ServiceInfo::MongoDb(info) => &info.id,
            ServiceInfo::RabbitMq(info) => &info.id,
        }
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceInfo::Mysql(_) => ServiceKind::Mysql,
            ServiceInfo::Postgresql(_) => ServiceKind::Postgresql,
            ServiceInfo::Redis(_) => ServiceKind::Redis,
            ServiceInfo::MongoDb(_) => ServiceKind::MongoDb,
            ServiceInfo::RabbitMq(_) => ServiceKind::RabbitMq,
        }
    }

    pub fn host(&self) -> &str {
        match self {
            ServiceInfo::Mysql(info) | ServiceInfo::Postgresql(info) => &info.host,
            ServiceInfo::Redis(info) => &info.host,
            ServiceInfo::MongoDb(info) => &info.host,
            ServiceInfo::RabbitMq(info) => &info.host,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            ServiceInfo::Mysql(info) | ServiceInfo::Postgresql(info) => info.port,
            ServiceInfo::Redis(info) => info.port,
            ServiceInfo::MongoDb(info) => info.port,
            ServiceInfo::RabbitMq(info) => info.port,
        }
    }

    /// Connection URI with percent-encoded credentials and path
    ///
    /// Fails when the host cannot appear in a URI (for example an empty host).
    pub fn uri(&self) -> Result<String> {
        let parts = match self {
            ServiceInfo::Mysql(info) => UriParts::relational("mysql", info),
            ServiceInfo::Postgresql(info) => UriParts::relational("postgres", info),
            ServiceInfo::Redis(info) => UriParts {
                scheme: "redis",
                host: &info.host,
                port: info.port,
                username: None,
                password: info.password.as_deref(),
                path: None,
            },
            ServiceInfo::MongoDb(info) => UriParts {
                scheme: "mongodb",
                host: &info.host,
                port: info.port,
                username: Some(&info.username),
                password: Some(&info.password),
                path: Some(&info.database),
            },
            ServiceInfo::RabbitMq(info) => UriParts {
                scheme: "amqp",
                host: &info.host,
                port: info.port,
                username: Some(&info.username),
                password: Some(&info.password),
                path: Some(&info.virtual_host),
            },
        };
        parts.build(self.id())
    }
}

struct UriParts<'a> {
    scheme: &'a str,
    host: &'a str,
    port: u16,
    username: Option<&'a str>,
    password: Option<&'a str>,
    /// Single path segment, percent-encoded as a whole (`/` becomes `%2F`)
    path: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    fn relational(scheme: &'a str, info: &'a RelationalServiceInfo) -> Self {
        Self {
            scheme,
            host: &info.host,
            port: info.port,
            username: Some(&info.username),
            password: Some(&info.password),
            path: Some(&info.database),
        }
    }

    fn build(&self, id: &str) -> Result<String> {
        let unusable = |field: &str, message: String| {
            ConnectorError::invalid_binding(id, field, message)
        };

        // IPv6 literals need brackets in the authority
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.to_string()
        };

        let mut url = Url::parse(&format!("{}://{}:{}", self.scheme, host, self.port))
            .map_err(|e| unusable("host", format!("cannot be used in a URI: {}", e)))?;
        let authority_intact = url.username().is_empty()
            && url.password().is_none()
            && url.port() == Some(self.port)
            && url.path().is_empty();
        if !authority_intact {
            return Err(unusable(
                "host",
                format!("'{}' is not a plain host name", self.host),
            ));
        }

        if let Some(username) = self.username {
            url.set_username(username)
                .map_err(|_| unusable("username", "cannot be set on the URI".to_string()))?;
        }
        if let Some(password) = self.password {
            url.set_password(Some(password))
                .map_err(|_| unusable("password", "cannot be set on the URI".to_string()))?;
        }
        if let Some(path) = self.path {
            url.path_segments_mut()
                .map_err(|_| unusable("path", "cannot be set on the URI".to_string()))?
                .push(path);
        }

        Ok(url.to_string())
    }
}
