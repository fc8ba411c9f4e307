use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Glob the template engine loads views from
    pub templates_glob: String,
    /// Directory served for unmatched paths (stylesheets, images)
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: resolve_port(env::var("PORT").ok()),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            templates_glob: env::var("TEMPLATES_GLOB")
                .unwrap_or_else(|_| "templates/**/*.html".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "resources".to_string()),
        }
    }
}

/// An unset, empty, or unparsable PORT falls back to 3000.
fn resolve_port(raw: Option<String>) -> u16 {
    raw.filter(|p| !p.is_empty())
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}
