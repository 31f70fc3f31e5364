use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Target backend of the dashboard. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub base_url: String,
    pub api_base_path: String,
}

impl Configuration {
    pub fn new(base_url: impl Into<String>, api_base_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_base_path: api_base_path.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.base_url.is_empty() && !self.api_base_path.is_empty()
    }

    /// Builds the request URL for a logical path. Actuator and docs paths
    /// live at the host root; everything else goes under the API prefix.
    pub fn resolve(&self, logical_path: &str) -> String {
        if logical_path.starts_with("/actuator") || logical_path.starts_with("/api-docs") {
            format!("{}{}", self.base_url, logical_path)
        } else {
            format!("{}{}{}", self.base_url, self.api_base_path, logical_path)
        }
    }
}

/// Top-level pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Actuator,
    OpenApiSpec,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Actuator => "/actuator",
            Route::OpenApiSpec => "/openapi-spec",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Dashboard),
            "/actuator" => Some(Route::Actuator),
            "/openapi-spec" => Some(Route::OpenApiSpec),
            _ => None,
        }
    }
}

/// Second decoding pass over a query value, so links built with an extra
/// `encodeURIComponent` still yield a usable value. Undecodable input is
/// kept as it came out of the query parser.
fn decode_component(value: &str) -> String {
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

/// Parameters carried by the launch link the app was opened with, e.g.
/// `/actuator?localAppUrl=http%3A%2F%2Flocalhost%3A9000&apiBasePath=%2Fapi`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParams {
    pub local_app_url: Option<String>,
    pub api_base_path: Option<String>,
    pub route: Option<Route>,
}

impl LaunchParams {
    pub fn parse(link: &str) -> Self {
        let link = link.trim();
        let (head, query) = match link.split_once('?') {
            Some((head, query)) => (head, query),
            None => (link, ""),
        };
        // Strip scheme and authority if a full URL was passed.
        let path = match head.find("://") {
            Some(idx) => {
                let rest = &head[idx + 3..];
                rest.find('/').map(|p| &rest[p..]).unwrap_or("")
            }
            None => head,
        };

        let mut params = LaunchParams {
            route: Route::from_path(path),
            ..Default::default()
        };
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "localAppUrl" => params.local_app_url = Some(decode_component(&value)),
                "apiBasePath" => params.api_base_path = Some(decode_component(&value)),
                _ => {}
            }
        }
        params
    }

    /// First CLI argument wins over the environment fallback.
    pub fn from_sources(arg: Option<String>, env_link: Option<String>) -> Self {
        arg.or(env_link).map(|l| Self::parse(&l)).unwrap_or_default()
    }

    /// Both parameters must be present and non-empty; partial presence counts as absent.
    pub fn configuration(&self) -> Option<Configuration> {
        match (&self.local_app_url, &self.api_base_path) {
            (Some(base), Some(path)) if !base.is_empty() && !path.is_empty() => {
                Some(Configuration::new(base.clone(), path.clone()))
            }
            _ => None,
        }
    }
}
