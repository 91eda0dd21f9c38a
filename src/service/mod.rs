//! Service bindings and the typed records extracted from them
//!
//! A services descriptor maps a category label to a list of bindings. Each
//! binding is matched to a [`ServiceKind`] through its label, category or
//! tags, and the [`ExtractorRegistry`] runs the extractor for that kind.

pub mod binding;
pub mod credentials;
pub mod extractors;
pub mod id_enum_macro;
pub mod info;
pub mod kind;
pub mod registry;

pub use binding::ServiceBinding;
pub use credentials::Credentials;
pub use extractors::Extractor;
pub use info::{
    MongoServiceInfo, RabbitServiceInfo, RedisServiceInfo, RelationalServiceInfo, ServiceInfo,
};
pub use kind::{normalize_label, ServiceKind};
pub use registry::ExtractorRegistry;
