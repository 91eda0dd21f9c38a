use regex::Regex;
use std::sync::OnceLock;

crate::define_id_enum! {
    /// Backing service kinds the connector knows how to extract
    ServiceKind {
        Mysql => "mysql",
        Postgresql => "postgresql" | "postgres",
        Redis => "redis",
        MongoDb => "mongodb" | "mongo",
        RabbitMq => "rabbitmq" | "rabbit",
    }
}

fn version_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-\d+(\.\d+)*$").expect("valid regex"))
}

/// Lower-cases a label and strips a trailing version (`MySQL-5.1` -> `mysql`)
pub fn normalize_label(label: &str) -> String {
    let lower = label.trim().to_lowercase();
    version_suffix().replace(&lower, "").into_owned()
}

impl ServiceKind {
    /// Resolves a service label, falling back to `Custom` with the normalized label
    pub fn from_label(label: &str) -> Self {
        let normalized = normalize_label(label);
        Self::from_name(&normalized).unwrap_or(Self::Custom(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_version() {
        assert_eq!(normalize_label("mysql-5.1"), "mysql");
        assert_eq!(normalize_label("postgresql-9.2"), "postgresql");
        assert_eq!(normalize_label("RabbitMQ-2.4"), "rabbitmq");
        assert_eq!(normalize_label("redis"), "redis");
    }

    #[test]
    fn test_normalize_keeps_non_version_dashes() {
        assert_eq!(normalize_label("user-provided"), "user-provided");
        assert_eq!(normalize_label("elephant-sql-2"), "elephant-sql");
    }

    #[test]
    fn test_from_label_aliases() {
        assert_eq!(ServiceKind::from_label("postgres"), ServiceKind::Postgresql);
        assert_eq!(ServiceKind::from_label("mongo-2.0"), ServiceKind::MongoDb);
        assert_eq!(ServiceKind::from_label("rabbit"), ServiceKind::RabbitMq);
    }

    #[test]
    fn test_from_label_unknown_is_custom() {
        let kind = ServiceKind::from_label("cleardb-1.0");
        assert_eq!(kind, ServiceKind::Custom("cleardb".to_string()));
        assert!(kind.is_custom());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(ServiceKind::RabbitMq.to_string(), "rabbitmq");
        assert_eq!(
            serde_json::to_string(&ServiceKind::MongoDb).unwrap(),
            "\"mongodb\""
        );
        let kind: ServiceKind = serde_json::from_str("\"postgres\"").unwrap();
        assert_eq!(kind, ServiceKind::Postgresql);
        let custom: ServiceKind = serde_json::from_str("\"smtp\"").unwrap();
        assert_eq!(custom, ServiceKind::Custom("smtp".to_string()));
    }

    #[test]
    fn test_all_variants() {
        assert_eq!(ServiceKind::all_variants().len(), 5);
        assert!(ServiceKind::all_variants().iter().all(|k| !k.is_custom()));
    }
}
