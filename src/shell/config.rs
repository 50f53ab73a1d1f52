use anyhow::Context;
use std::net::SocketAddr;

use crate::modules::attendance::core::timesheet::DEFAULT_STANDARD_MINUTES_PER_DAY;
use crate::shared::core::primitives::Minutes;

pub const ADDR_VAR: &str = "ATTENDANCE_ADDR";
pub const STANDARD_MINUTES_VAR: &str = "ATTENDANCE_STANDARD_MINUTES_PER_DAY";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub standard_minutes_per_day: Minutes,
}

impl AppConfig {
    /// Read from the process environment, after loading a local `.env` when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("{ADDR_VAR} is not a socket address: {addr}"))?;

        let standard_minutes_per_day = match lookup(STANDARD_MINUTES_VAR) {
            Some(raw) => {
                let value: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{STANDARD_MINUTES_VAR} is not a number: {raw}"))?;
                Minutes::new(value).with_context(|| format!("invalid {STANDARD_MINUTES_VAR}"))?
            }
            None => Minutes::new(DEFAULT_STANDARD_MINUTES_PER_DAY)?,
        };

        Ok(Self {
            addr,
            standard_minutes_per_day,
        })
    }
}
