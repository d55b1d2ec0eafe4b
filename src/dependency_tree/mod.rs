/// Domain layer - dependency tree models and pure transformation services
pub mod domain;
pub mod services;
