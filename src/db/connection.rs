use anyhow::Result;

use crate::config::ConnectionSettings;
use crate::error::{AppError, ErrorKind};

/// Default service registered for the schema; used when the caller supplies
/// raw connection info without a service of its own.
const DEFAULT_SERVICE: &str = "orcl";

/// Structured connection info supplied by a caller. Consumed only to build
/// a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub server_name: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Build the full keyword-form connection string for display and handoff.
///
/// Fails with an Argument error when the server name or username is blank.
pub fn build_connection_string(info: &ConnectionInfo) -> Result<String> {
    if info.server_name.trim().is_empty() {
        return Err(AppError::new(ErrorKind::Argument, "Connection info requires a server name").into());
    }
    if info.username.trim().is_empty() {
        return Err(AppError::new(ErrorKind::Argument, "Connection info requires a username").into());
    }

    Ok(format!(
        "Data Source={};User Id={};Password={};",
        descriptor(&info.server_name, info.port, DEFAULT_SERVICE),
        info.username,
        info.password,
    ))
}

/// The bare TNS descriptor handed to the driver for the configured service.
pub fn connect_descriptor(settings: &ConnectionSettings) -> String {
    descriptor(&settings.server, settings.port, &settings.service)
}

/// Descriptor for the administrative service, which always exists; used for
/// existence probes during provisioning.
pub fn admin_descriptor(settings: &ConnectionSettings) -> String {
    descriptor(&settings.server, settings.port, &settings.admin_service)
}

fn descriptor(host: &str, port: u16, service: &str) -> String {
    format!(
        "(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST={})(PORT={}))(CONNECT_DATA=(SERVER=DEDICATED)(SERVICE_NAME={})))",
        host, port, service
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{classify_error, ErrorKind};

    fn info() -> ConnectionInfo {
        ConnectionInfo {
            server_name: "db.example".to_string(),
            port: 1522,
            username: "hr".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn builds_keyword_connection_string() {
        let built = build_connection_string(&info()).unwrap();
        assert!(built.starts_with("Data Source=(DESCRIPTION="));
        assert!(built.contains("(HOST=db.example)"));
        assert!(built.contains("(PORT=1522)"));
        assert!(built.contains("User Id=hr;"));
        assert!(built.ends_with("Password=secret;"));
    }

    #[test]
    fn blank_server_name_is_an_argument_error() {
        let mut invalid = info();
        invalid.server_name = "  ".to_string();
        let err = build_connection_string(&invalid).unwrap_err();
        assert_eq!(classify_error(&err), ErrorKind::Argument);
    }

    #[test]
    fn blank_username_is_an_argument_error() {
        let mut invalid = info();
        invalid.username = String::new();
        let err = build_connection_string(&invalid).unwrap_err();
        assert_eq!(classify_error(&err), ErrorKind::Argument);
    }

    #[test]
    fn descriptors_use_configured_and_admin_services() {
        let mut settings = ConnectionSettings::default();
        settings.server = "db.example".to_string();
        settings.service = "plant".to_string();
        settings.admin_service = "root".to_string();

        assert!(connect_descriptor(&settings).contains("(SERVICE_NAME=plant)"));
        assert!(admin_descriptor(&settings).contains("(SERVICE_NAME=root)"));
    }
}
