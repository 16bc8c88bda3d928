//! Runtime configuration from the environment.
//! Used by: main.

use std::env::VarError;
use std::net::SocketAddr;

use crate::error::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var("BIND_ADDR"))
    }

    fn from_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(raw) => Self::from_bind_addr(Some(&raw)),
            Err(VarError::NotPresent) => Self::from_bind_addr(None),
            Err(VarError::NotUnicode(raw)) => {
                Err(Error::InvalidBindAddr(raw.to_string_lossy().into_owned()))
            }
        }
    }

    fn from_bind_addr(raw: Option<&str>) -> Result<Self> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw
            .parse()
            .map_err(|_| Error::InvalidBindAddr(raw.to_owned()))?;
        Ok(Self { bind_addr })
    }
}
