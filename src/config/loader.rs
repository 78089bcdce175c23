//! Configuration assembly from environment variables.

use crate::config::env::EnvSource;
use crate::config::parse::{parse_bool, parse_int, parse_list, parse_string};
use crate::config::schema::{
    vars, AppConfig, AuthConfig, CorsConfig, KeysConfig, LogConfig, PerformanceConfig,
    ServerConfig, UpstreamConfig, DEFAULT_ALLOWED_HEADERS, DEFAULT_ALLOWED_METHODS,
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_BASE_URLS,
};

const NO_KEYS: &[&str] = &[];

/// Build a candidate snapshot from `env`.
///
/// Every field resolves to its variable or its default; nothing here can
/// fail. The result still has to pass `validate_config`.
pub fn assemble(env: &impl EnvSource) -> AppConfig {
    let server = ServerConfig::default();
    let keys = KeysConfig::default();
    let upstream = UpstreamConfig::default();
    let cors = CorsConfig::default();
    let performance = PerformanceConfig::default();
    let log = LogConfig::default();

    AppConfig {
        server: ServerConfig {
            port: int(env, vars::PORT, server.port),
            host: text(env, vars::HOST, server.host.as_str()),
            read_timeout_secs: int(env, vars::SERVER_READ_TIMEOUT, server.read_timeout_secs),
            write_timeout_secs: int(env, vars::SERVER_WRITE_TIMEOUT, server.write_timeout_secs),
            idle_timeout_secs: int(env, vars::SERVER_IDLE_TIMEOUT, server.idle_timeout_secs),
            graceful_shutdown_timeout_secs: int(
                env,
                vars::SERVER_GRACEFUL_SHUTDOWN_TIMEOUT,
                server.graceful_shutdown_timeout_secs,
            ),
        },
        keys: KeysConfig {
            api_keys: list(env, vars::API_KEYS, NO_KEYS),
            start_index: int(env, vars::START_INDEX, keys.start_index),
            blacklist_threshold: int(env, vars::BLACKLIST_THRESHOLD, keys.blacklist_threshold),
            max_retries: int(env, vars::MAX_RETRIES, keys.max_retries),
        },
        upstream: UpstreamConfig {
            base_urls: list(env, vars::OPENAI_BASE_URL, DEFAULT_BASE_URLS),
            request_timeout_secs: int(env, vars::REQUEST_TIMEOUT, upstream.request_timeout_secs),
            response_timeout_secs: int(env, vars::RESPONSE_TIMEOUT, upstream.response_timeout_secs),
            idle_conn_timeout_secs: int(
                env,
                vars::IDLE_CONN_TIMEOUT,
                upstream.idle_conn_timeout_secs,
            ),
        },
        auth: AuthConfig::new(env.raw(vars::AUTH_KEY)),
        cors: CorsConfig {
            enabled: flag(env, vars::ENABLE_CORS, cors.enabled),
            allowed_origins: list(env, vars::ALLOWED_ORIGINS, DEFAULT_ALLOWED_ORIGINS),
            allowed_methods: list(env, vars::ALLOWED_METHODS, DEFAULT_ALLOWED_METHODS),
            allowed_headers: list(env, vars::ALLOWED_HEADERS, DEFAULT_ALLOWED_HEADERS),
            allow_credentials: flag(env, vars::ALLOW_CREDENTIALS, cors.allow_credentials),
        },
        performance: PerformanceConfig {
            max_concurrent_requests: int(
                env,
                vars::MAX_CONCURRENT_REQUESTS,
                performance.max_concurrent_requests,
            ),
            enable_gzip: flag(env, vars::ENABLE_GZIP, performance.enable_gzip),
        },
        log: LogConfig {
            level: text(env, vars::LOG_LEVEL, log.level.as_str()),
            format: text(env, vars::LOG_FORMAT, log.format.as_str()),
            enable_file: flag(env, vars::LOG_ENABLE_FILE, log.enable_file),
            file_path: text(env, vars::LOG_FILE_PATH, log.file_path.as_str()),
            enable_request: flag(env, vars::LOG_ENABLE_REQUEST, log.enable_request),
        },
    }
}

fn int(env: &impl EnvSource, key: &str, default: i64) -> i64 {
    parse_int(&env.raw(key), default)
}

fn flag(env: &impl EnvSource, key: &str, default: bool) -> bool {
    parse_bool(&env.raw(key), default)
}

fn text(env: &impl EnvSource, key: &str, default: &str) -> String {
    parse_string(&env.raw(key), default)
}

fn list(env: &impl EnvSource, key: &str, default: &[&str]) -> Vec<String> {
    parse_list(&env.raw(key), default)
}
