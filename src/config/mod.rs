use std::env;
use std::path::PathBuf;

pub const DEFAULT_FEED_URL: &str = "https://medium.com/feed/@itantife";
pub const DEFAULT_PROFILE_URL: &str = "https://medium.com/@itantife";

#[derive(Clone, Debug)]
pub struct Config {
    pub feed_url: String,
    pub profile_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub static_dir: PathBuf,
    pub is_dev: bool,
}

impl Config {
    /// Every setting has a default, so loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            feed_url: env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            profile_url: env::var("PROFILE_URL")
                .unwrap_or_else(|_| DEFAULT_PROFILE_URL.to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            is_dev: env::var("APP_ENV").as_deref() != Ok("production"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
