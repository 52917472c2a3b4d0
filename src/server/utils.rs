//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::RegistryError;

impl HttpServer {
    /// Format a readable error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> RegistryError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => RegistryError::config(format!(
                "Port {} is already in use; set server.port or PORT to another port (e.g. {})",
                port,
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => RegistryError::config(format!(
                "Permission denied binding port {}; use a port >= 1024",
                port
            )),
            _ => RegistryError::config(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
