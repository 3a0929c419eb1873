use std::env;

const DEFAULT_DB_URL: &str = "flipvid.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;
const DEFAULT_MANIFEST_URL: &str = "https://flipvid.example/course_manifest.json";

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    pub manifest_url: String,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(pool_size) = env::var("DATABASE_CONNECTION_POOL_SIZE") {
            match pool_size.parse() {
                Ok(pool_size) => cfg.db_connection_pool_size = pool_size,
                Err(_) => {
                    log::warn!("Ignoring invalid DATABASE_CONNECTION_POOL_SIZE \"{pool_size}\"");
                }
            }
        }
        match env::var("MANIFEST_URL") {
            Ok(url) => {
                cfg.manifest_url = url;
            }
            Err(_) => {
                log::warn!("No course manifest URL found, using {DEFAULT_MANIFEST_URL}");
            }
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
        }
    }
}
