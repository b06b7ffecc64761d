// bluetick/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_CHECKOUT_REDIRECT_URL: &str = "https://forms.example.com/bluetick/verification-order";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// The single admin credential. Hashed at startup, never logged.
  pub admin_password: String,
  /// Code that sets the studio tier straight to Ultra.
  pub tier_unlock_code: String,

  /// External hosted form the visitor lands on after submitting an order,
  /// whether or not the order notification went out.
  pub checkout_redirect_url: String,
  pub order_notify_address: String,
  pub order_notify_sender: String,
  pub simulate_notify_failure: bool,

  pub submit_delay: Duration,
  pub redirect_delay: Duration,
  pub failure_redirect_delay: Duration,
  pub ai_delay: Duration,

  pub reader_scroll_px_per_sec: f64,
  /// Visitor sessions untouched for this long are dropped.
  pub session_ttl: Duration,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any key lookup; `from_env` passes the process env.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = parse_var::<u16>("SERVER_PORT", &get_or("SERVER_PORT", "8080"))?;

    let admin_password = lookup("ADMIN_PASSWORD")
      .filter(|p| !p.is_empty())
      .ok_or_else(|| AppError::Config("Missing environment variable 'ADMIN_PASSWORD'".to_string()))?;
    let tier_unlock_code = get_or("TIER_UNLOCK_CODE", "VIPULTRA");

    let checkout_redirect_url = get_or("CHECKOUT_REDIRECT_URL", DEFAULT_CHECKOUT_REDIRECT_URL);
    if !checkout_redirect_url.starts_with("https://") && !checkout_redirect_url.starts_with("http://") {
      return Err(AppError::Config(format!(
        "CHECKOUT_REDIRECT_URL must be an http(s) URL, got '{}'",
        checkout_redirect_url
      )));
    }
    let order_notify_address = get_or("ORDER_NOTIFY_ADDRESS", "orders@bluetick.example");
    let order_notify_sender = get_or("ORDER_NOTIFY_SENDER", "noreply@bluetick.example");
    let simulate_notify_failure = parse_var::<bool>("SIMULATE_NOTIFY_FAILURE", &get_or("SIMULATE_NOTIFY_FAILURE", "false"))?;

    let millis = |name: &str, default: &str| -> Result<Duration> {
      Ok(Duration::from_millis(parse_var::<u64>(name, &get_or(name, default))?))
    };
    let submit_delay = millis("SUBMIT_DELAY_MS", "1500")?;
    let redirect_delay = millis("REDIRECT_DELAY_MS", "2000")?;
    let failure_redirect_delay = millis("FAILURE_REDIRECT_DELAY_MS", "1000")?;
    let ai_delay = millis("AI_DELAY_MS", "2000")?;

    let reader_scroll_px_per_sec = parse_var::<f64>("READER_SCROLL_PX_PER_SEC", &get_or("READER_SCROLL_PX_PER_SEC", "30"))?;
    if !(reader_scroll_px_per_sec > 0.0) {
      return Err(AppError::Config("READER_SCROLL_PX_PER_SEC must be positive".to_string()));
    }

    let session_ttl = Duration::from_secs(parse_var::<u64>("SESSION_TTL_SECS", &get_or("SESSION_TTL_SECS", "7200"))?);
    if session_ttl.is_zero() {
      return Err(AppError::Config("SESSION_TTL_SECS must be positive".to_string()));
    }

    let log_format = match get_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "json" => LogFormat::Json,
      "pretty" | "text" => LogFormat::Pretty,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT: {}", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      admin_password,
      tier_unlock_code,
      checkout_redirect_url,
      order_notify_address,
      order_notify_sender,
      simulate_notify_failure,
      submit_delay,
      redirect_delay,
      failure_redirect_delay,
      ai_delay,
      reader_scroll_px_per_sec,
      session_ttl,
      log_format,
    })
  }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
  }

  #[test]
  fn defaults_fill_everything_but_the_admin_password() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("ADMIN_PASSWORD", "s3cret")])).unwrap();
    assert_eq!(cfg.server_port, 8080);
    assert_eq!(cfg.checkout_redirect_url, DEFAULT_CHECKOUT_REDIRECT_URL);
    assert_eq!(cfg.submit_delay, Duration::from_millis(1500));
    assert_eq!(cfg.log_format, LogFormat::Pretty);
    assert_eq!(cfg.session_ttl, Duration::from_secs(7200));
    assert!(!cfg.simulate_notify_failure);
  }

  #[test]
  fn missing_admin_password_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("ADMIN_PASSWORD")));
  }

  #[test]
  fn bad_numbers_are_config_errors() {
    let err = AppConfig::from_lookup(lookup_from(&[("ADMIN_PASSWORD", "x"), ("SUBMIT_DELAY_MS", "soon")])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("SUBMIT_DELAY_MS")));
  }

  #[test]
  fn sessions_must_expire_eventually() {
    let err = AppConfig::from_lookup(lookup_from(&[("ADMIN_PASSWORD", "x"), ("SESSION_TTL_SECS", "0")])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("SESSION_TTL_SECS")));
  }

  #[test]
  fn redirect_url_must_be_http() {
    let err =
      AppConfig::from_lookup(lookup_from(&[("ADMIN_PASSWORD", "x"), ("CHECKOUT_REDIRECT_URL", "ftp://nope")])).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }
}
