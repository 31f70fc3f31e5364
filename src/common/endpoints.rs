// Endpoint catalogue of the monitored backend
use std::fmt;

/// Icon family shown next to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointCategory {
    Info,
    Health,
    Git,
    Settings,
    Memory,
    Metrics,
    Prometheus,
    Routing,
    Interceptors,
    Middleware,
    Docs,
    Spec,
}

impl EndpointCategory {
    pub fn glyph(self) -> &'static str {
        match self {
            EndpointCategory::Info => "ℹ️",
            EndpointCategory::Health => "💓",
            EndpointCategory::Git => "🌿",
            EndpointCategory::Settings => "⚙️",
            EndpointCategory::Memory => "🧠",
            EndpointCategory::Metrics => "📊",
            EndpointCategory::Prometheus => "📈",
            EndpointCategory::Routing => "🧭",
            EndpointCategory::Interceptors => "🧱",
            EndpointCategory::Middleware => "🔀",
            EndpointCategory::Docs => "📘",
            EndpointCategory::Spec => "🧾",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Info,
    Health,
    Git,
    Config,
    Memory,
    Metrics,
    Prometheus,
    Controllers,
    Interceptors,
    Middlewares,
    ApiDocs,
    SwaggerJson,
}

impl Endpoint {
    /// Actuator tabs in display order; the first one is fetched eagerly.
    pub const ACTUATOR: [Endpoint; 10] = [
        Endpoint::Info,
        Endpoint::Health,
        Endpoint::Git,
        Endpoint::Config,
        Endpoint::Memory,
        Endpoint::Metrics,
        Endpoint::Prometheus,
        Endpoint::Controllers,
        Endpoint::Interceptors,
        Endpoint::Middlewares,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Info => "/actuator/info",
            Endpoint::Health => "/actuator/health",
            Endpoint::Git => "/actuator/git",
            Endpoint::Config => "/actuator/config",
            Endpoint::Memory => "/actuator/memory",
            Endpoint::Metrics => "/actuator/metrics",
            Endpoint::Prometheus => "/actuator/prometheus",
            Endpoint::Controllers => "/actuator/controllers",
            Endpoint::Interceptors => "/actuator/interceptors",
            Endpoint::Middlewares => "/actuator/middlewares",
            Endpoint::ApiDocs => "/api-docs",
            Endpoint::SwaggerJson => "/api-docs/swagger.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Info => "Info",
            Endpoint::Health => "Health",
            Endpoint::Git => "Git",
            Endpoint::Config => "Config",
            Endpoint::Memory => "Memory",
            Endpoint::Metrics => "Metrics",
            Endpoint::Prometheus => "Prometheus",
            Endpoint::Controllers => "Controllers",
            Endpoint::Interceptors => "Interceptors",
            Endpoint::Middlewares => "Middlewares",
            Endpoint::ApiDocs => "Swagger UI",
            Endpoint::SwaggerJson => "OpenAPI Specification",
        }
    }

    pub fn category(self) -> EndpointCategory {
        match self {
            Endpoint::Info => EndpointCategory::Info,
            Endpoint::Health => EndpointCategory::Health,
            Endpoint::Git => EndpointCategory::Git,
            Endpoint::Config => EndpointCategory::Settings,
            Endpoint::Memory => EndpointCategory::Memory,
            Endpoint::Metrics => EndpointCategory::Metrics,
            Endpoint::Prometheus => EndpointCategory::Prometheus,
            Endpoint::Controllers => EndpointCategory::Routing,
            Endpoint::Interceptors => EndpointCategory::Interceptors,
            Endpoint::Middlewares => EndpointCategory::Middleware,
            Endpoint::ApiDocs => EndpointCategory::Docs,
            Endpoint::SwaggerJson => EndpointCategory::Spec,
        }
    }

    pub fn is_actuator(self) -> bool {
        Self::ACTUATOR.contains(&self)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
