use std::env;

/// Fallback values for every request field, captured once at startup.
///
/// Handlers receive this as an immutable snapshot inside the shared state;
/// nothing reads the environment after boot.
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    pub title: String,
    pub content: String,
    pub appid: String,
    pub secret: String,
    pub userid: String,
    pub template_id: String,
    pub base_url: String,
    pub timezone: String,
}

impl Defaults {
    pub fn from_env() -> Self {
        Self {
            title: env::var("WXPUSH_TITLE").unwrap_or_default(),
            content: env::var("WXPUSH_CONTENT").unwrap_or_default(),
            appid: env::var("WXPUSH_APPID").unwrap_or_default(),
            secret: env::var("WXPUSH_SECRET").unwrap_or_default(),
            userid: env::var("WXPUSH_USERID").unwrap_or_default(),
            template_id: env::var("WXPUSH_TEMPLATE_ID").unwrap_or_default(),
            base_url: env::var("WXPUSH_BASE_URL").unwrap_or_default(),
            timezone: env::var("WXPUSH_TZ").unwrap_or_else(|_| "Asia/Shanghai".to_string()),
        }
    }
}

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the platform API. Overridable so tests and proxies can
    /// point the client elsewhere.
    pub api_base: String,
    pub defaults: Defaults,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("WXPUSH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5566);
        let api_base = env::var("WXPUSH_API_BASE")
            .unwrap_or_else(|_| "https://api.weixin.qq.com".to_string());

        Self {
            port,
            api_base,
            defaults: Defaults::from_env(),
        }
    }
}
