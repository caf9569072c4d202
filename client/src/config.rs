/// Default catalog endpoint
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/";

/// Default sprite location; `{id}.png` is appended
pub const SPRITE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

const BASE_URL_VAR: &str = "TYPEDEX_BASE_URL";
const SPRITE_URL_VAR: &str = "TYPEDEX_SPRITE_BASE_URL";
const MAX_CONCURRENT_VAR: &str = "TYPEDEX_MAX_CONCURRENT_REQUESTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub sprite_base_url: String,
    /// Cap on simultaneous catalog lookups during species assembly
    pub max_concurrent_requests: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            sprite_base_url: SPRITE_URL.to_string(),
            max_concurrent_requests: 8,
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `TYPEDEX_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(url);
        }
        if let Some(url) = lookup(SPRITE_URL_VAR) {
            config = config.with_sprite_base_url(url);
        }
        if let Some(raw) = lookup(MAX_CONCURRENT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_concurrent_requests = limit,
                _ => tracing::warn!(
                    variable = MAX_CONCURRENT_VAR,
                    value = %raw,
                    "Ignoring invalid concurrency limit"
                ),
            }
        }

        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = with_trailing_slash(url.into());
        self
    }

    pub fn with_sprite_base_url(mut self, url: impl Into<String>) -> Self {
        self.sprite_base_url = with_trailing_slash(url.into());
        self
    }

    pub fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit.max(1);
        self
    }

    /// Absolute URL of a catalog path such as `type/fire`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Image location for a species id
    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}{}.png", self.sprite_base_url, id)
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
