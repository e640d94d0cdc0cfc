const PROD_DEFAULT: &str = "https://autou-backend-ggdb.onrender.com";
const LOCAL_DEFAULT: &str = "http://127.0.0.1:8000";

// Render exposes the public hostname of the service to the process.
const PROD_HOST_SUFFIX: &str = "onrender.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
}

// The deployment pipeline substitutes API_BASE into the environment; a value
// still carrying template markers means the substitution never ran.
fn valid_injected(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains("{{") || trimmed.contains("}}") {
        return None;
    }
    Some(trimmed)
}

/// Resolve the API base URL. Cannot fail: an invalid or absent injected value
/// falls through to a hard-coded default picked by hostname.
pub fn resolve(injected: Option<&str>, hostname: Option<&str>) -> Config {
    let api_base = match injected.and_then(valid_injected) {
        Some(url) => url.to_string(),
        None => {
            if hostname.map_or(false, |h| h.ends_with(PROD_HOST_SUFFIX)) {
                PROD_DEFAULT.to_string()
            } else {
                LOCAL_DEFAULT.to_string()
            }
        }
    };
    Config { api_base }
}

/// Resolution as done at startup: an explicit flag wins over the `API_BASE`
/// environment variable; the hosting hostname comes from the environment too.
pub fn resolve_from_env(flag: Option<&str>) -> Config {
    let env_value = std::env::var("API_BASE").ok();
    let hostname = std::env::var("RENDER_EXTERNAL_HOSTNAME").ok();
    resolve(flag.or(env_value.as_deref()), hostname.as_deref())
}
