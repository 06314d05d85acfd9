// src/config.rs
use std::env;

/// 固定で許可するフロントエンドのオリジン
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:8501",
    "https://localhost:3000",
];

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 8000;

/// Supabase プロジェクトへの接続設定
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
    pub tickets_table: String,
    pub recordings_table: String,
    pub storage_bucket: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_allowed_origins: Vec<String>,
    pub supabase: SupabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー解決関数から設定を組み立てる（テストではプロセス環境を汚さずに使う）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| "SUPABASE_URL and SUPABASE_KEY must be set".to_string())
        };

        let supabase_url = required("SUPABASE_URL")?;
        let supabase_key = required("SUPABASE_KEY")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("Invalid PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let body_limit = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("Invalid MAX_UPLOAD_BYTES value: {}", raw))?,
            None => 50 * 1024 * 1024, // 50MB
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            cors_allowed_origins: allowed_origins(&frontend_url),
            frontend_url,
            supabase: SupabaseConfig {
                url: supabase_url,
                key: supabase_key,
                tickets_table: lookup("TICKETS_TABLE")
                    .unwrap_or_else(|| "opportunities".to_string()),
                recordings_table: lookup("RECORDINGS_TABLE")
                    .unwrap_or_else(|| "recordings".to_string()),
                storage_bucket: lookup("STORAGE_BUCKET").unwrap_or_else(|| "tickets".to_string()),
            },
            server: ServerConfig { body_limit },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// テスト用の設定を作成
    pub fn for_testing(supabase_url: &str) -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            cors_allowed_origins: allowed_origins(DEFAULT_FRONTEND_URL),
            supabase: SupabaseConfig {
                url: supabase_url.to_string(),
                key: "test-service-key".to_string(),
                tickets_table: "opportunities".to_string(),
                recordings_table: "recordings".to_string(),
                storage_bucket: "tickets".to_string(),
            },
            server: ServerConfig {
                body_limit: 50 * 1024 * 1024,
            },
        }
    }
}

/// FRONTEND_URL を先頭に、固定オリジンを重複なく並べる
fn allowed_origins(frontend_url: &str) -> Vec<String> {
    let mut origins = vec![frontend_url.to_string()];
    for origin in DEFAULT_ALLOWED_ORIGINS {
        if !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }
    origins
}
