pub mod domain;
pub mod ephemeris;
pub mod forecast;
pub mod time;

pub mod config {
    use anyhow::Context;

    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub port: Option<u16>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT").ok() {
                Some(s) if !s.trim().is_empty() => Some(
                    s.trim()
                        .parse::<u16>()
                        .with_context(|| format!("PORT must be a valid port number (got {s:?})"))?,
                ),
                _ => None,
            };

            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                port,
            })
        }

        pub fn port_or_default(&self) -> u16 {
            self.port.unwrap_or(DEFAULT_PORT)
        }
    }

}
