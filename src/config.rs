use crate::auth::password;

/// Application configuration, resolved once at startup from the environment.
///
/// The gate credential is held as an argon2 hash. Operators either supply
/// `GATE_PASSWORD_HASH` directly, or supply `GATE_PASSWORD` and accept the
/// hash being derived on boot.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub bind_addr: String,
    pub gate_password_hash: String,
    pub vision_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let app_name =
            std::env::var("APP_NAME").unwrap_or_else(|_| "Vanguard".to_string());
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let gate_password_hash = match std::env::var("GATE_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => hash,
            _ => match std::env::var("GATE_PASSWORD") {
                Ok(password) if !password.is_empty() => {
                    log::warn!(
                        "GATE_PASSWORD_HASH not set — hashing GATE_PASSWORD at startup"
                    );
                    password::hash_password(&password)
                        .map_err(|e| format!("Failed to hash GATE_PASSWORD: {e}"))?
                }
                _ => {
                    return Err(
                        "No gate credential configured: set GATE_PASSWORD_HASH or GATE_PASSWORD"
                            .to_string(),
                    );
                }
            },
        };

        let vision_api_key = match std::env::var("GOOGLE_VISION_API_KEY") {
            Ok(key) if !key.is_empty() => Some(key),
            _ => {
                log::warn!("GOOGLE_VISION_API_KEY not set — OCR tool will report unavailable");
                None
            }
        };

        Ok(Self {
            app_name,
            bind_addr,
            gate_password_hash,
            vision_api_key,
        })
    }
}
