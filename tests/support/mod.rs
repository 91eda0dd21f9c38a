//! Builders for platform-shaped descriptor payloads

#![allow(dead_code)]

use serde_json::{json, Map, Value};

pub const HOSTNAME: &str = "10.20.30.40";
pub const PORT: u16 = 1234;
pub const USERNAME: &str = "myuser";
pub const PASSWORD: &str = "mypass";

pub fn application_payload(name: &str, uris: &[&str]) -> String {
    json!({
        "instance_id": format!("{}-instance", name),
        "instance_index": 0,
        "name": name,
        "uris": uris,
        "version": "b4ec63a2-0a1b-4c8f-a2ee-7a3b0f1cd1f4"
    })
    .to_string()
}

/// Groups entries under their `label`, keeping first-seen label order
pub fn services_payload(entries: Vec<Value>) -> String {
    let mut categories = Map::new();
    for entry in entries {
        let label = entry["label"].as_str().unwrap_or("unknown").to_string();
        categories
            .entry(label)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .expect("category is an array")
            .push(entry);
    }
    Value::Object(categories).to_string()
}

pub fn mysql_entry(version: &str, name: &str, database: &str) -> Value {
    json!({
        "name": name,
        "label": format!("mysql-{}", version),
        "plan": "free",
        "tags": ["mysql", format!("mysql-{}", version), "relational"],
        "credentials": {
            "name": database,
            "hostname": HOSTNAME,
            "host": HOSTNAME,
            "port": PORT,
            "user": USERNAME,
            "username": USERNAME,
            "password": PASSWORD
        }
    })
}

pub fn postgresql_entry(version: &str, name: &str, database: &str) -> Value {
    json!({
        "name": name,
        "label": format!("postgresql-{}", version),
        "plan": "free",
        "tags": ["postgresql", format!("postgresql-{}", version), "relational"],
        "credentials": {
            "name": database,
            "hostname": HOSTNAME,
            "host": HOSTNAME,
            "port": PORT,
            "user": USERNAME,
            "username": USERNAME,
            "password": PASSWORD
        }
    })
}

pub fn redis_entry(version: &str, name: &str, resource: &str) -> Value {
    json!({
        "name": name,
        "label": format!("redis-{}", version),
        "plan": "free",
        "tags": ["redis", format!("redis-{}", version), "key-value", "nosql"],
        "credentials": {
            "hostname": HOSTNAME,
            "host": HOSTNAME,
            "port": PORT,
            "password": PASSWORD,
            "name": resource
        }
    })
}

pub fn mongo_entry(version: &str, name: &str, resource: &str, db: &str) -> Value {
    json!({
        "name": name,
        "label": format!("mongodb-{}", version),
        "plan": "free",
        "tags": ["mongodb", format!("mongodb-{}", version), "nosql", "document"],
        "credentials": {
            "hostname": HOSTNAME,
            "host": HOSTNAME,
            "port": PORT,
            "username": USERNAME,
            "password": PASSWORD,
            "name": resource,
            "db": db
        }
    })
}

pub fn rabbit_entry(version: &str, name: &str, queue: &str, vhost: &str) -> Value {
    json!({
        "name": name,
        "label": format!("rabbitmq-{}", version),
        "plan": "free",
        "tags": ["rabbitmq", format!("rabbitmq-{}", version), "message-queue", "amqp"],
        "credentials": {
            "name": queue,
            "hostname": HOSTNAME,
            "host": HOSTNAME,
            "port": PORT,
            "vhost": vhost,
            "user": USERNAME,
            "username": USERNAME,
            "pass": PASSWORD,
            "password": PASSWORD
        }
    })
}

pub fn unsupported_entry(label: &str, name: &str) -> Value {
    json!({
        "name": name,
        "label": label,
        "plan": "basic",
        "credentials": {"api_key": "abc"}
    })
}
