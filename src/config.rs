use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub default_page_size: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "quiz-engine".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(10),
        }
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "quiz-engine-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            default_page_size: 10,
        }
    }
}
