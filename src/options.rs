//! Server configuration options.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::OptionsError;

/// Environment variable overriding [`ServerOptions::host`].
pub const HOST_VAR: &str = "BJROOM_HOST";
/// Environment variable overriding [`ServerOptions::port`].
pub const PORT_VAR: &str = "PORT";

/// Where the HTTP server listens.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjroom::ServerOptions;
///
/// let options = ServerOptions::default().with_port(9000);
/// assert_eq!(options.socket_addr().to_string(), "0.0.0.0:9000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerOptions {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl ServerOptions {
    /// Sets the bind address.
    #[must_use]
    pub const fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Sets the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Reads overrides from `BJROOM_HOST` and `PORT`, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OptionsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            let parsed = host.parse().map_err(|_| OptionsError::InvalidHost(host))?;
            options = options.with_host(parsed);
        }

        if let Some(port) = lookup(PORT_VAR) {
            let parsed = port.parse().map_err(|_| OptionsError::InvalidPort(port))?;
            options = options.with_port(parsed);
        }

        Ok(options)
    }

    /// Returns the address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
