use crate::utils::error::{Result, RiskError};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    if addr.trim().is_empty() {
        return Err(RiskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    addr.parse::<SocketAddr>()
        .map_err(|e| RiskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RiskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RiskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(RiskError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}
