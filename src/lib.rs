// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB and object-storage adapters
// - presentation: HTTP handlers and routing
// - application: use cases and ports
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
