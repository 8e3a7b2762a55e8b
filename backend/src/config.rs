use log::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Malformed `PORT` or `WORKERS` values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT ({}), falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let workers = match lookup("WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(w) if w > 0 => w,
                _ => {
                    warn!("Invalid WORKERS ({}), falling back to CPU count", raw);
                    num_cpus::get()
                }
            },
            None => num_cpus::get(),
        };

        ServerConfig {
            host,
            port,
            workers,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind_address(), "0.0.0.0:5000");
        assert_eq!(cfg.workers, num_cpus::get());
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[("HOST", "127.0.0.1"), ("PORT", "8081"), ("WORKERS", "3")]);
        assert_eq!(cfg.bind_address(), "127.0.0.1:8081");
        assert_eq!(cfg.workers, 3);
    }

    #[test]
    fn malformed_values_fall_back() {
        let cfg = config(&[("PORT", "http"), ("WORKERS", "0")]);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.workers, num_cpus::get());
    }
}
