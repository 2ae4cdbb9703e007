use std::str::FromStr;

use crate::error::ConfigError;

const UNKNOWN_PARTICIPANT_VAR: &str = "CHANNEL_SYNC_UNKNOWN_PARTICIPANT";
const UNRESOLVED_SWEEP_VAR: &str = "CHANNEL_SYNC_UNRESOLVED_SWEEP";

/// What to do when an incoming overwrite names a role or user missing from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownParticipantPolicy {
    /// Abort the whole message; changes already applied stay applied.
    #[default]
    Abort,
    /// Log and skip the entry, then continue with the rest of the message.
    Skip,
}

impl FromStr for UnknownParticipantPolicy {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(()),
        }
    }
}

/// What the removal sweep does with a stale overwrite whose participant is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedSweepPolicy {
    /// Leave the entry in the cache and emit nothing.
    #[default]
    Keep,
    /// Drop the entry from the cache without emitting an event.
    Remove,
}

impl FromStr for UnresolvedSweepPolicy {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "remove" => Ok(Self::Remove),
            _ => Err(()),
        }
    }
}

/// Behavior switches for the update handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub unknown_participant: UnknownParticipantPolicy,
    pub unresolved_sweep: UnresolvedSweepPolicy,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every set variable held an accepted value
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set to an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            unknown_participant: parse_var(&lookup, UNKNOWN_PARTICIPANT_VAR)?.unwrap_or_default(),
            unresolved_sweep: parse_var(&lookup, UNRESOLVED_SWEEP_VAR)?.unwrap_or_default(),
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

#[cfg(test)]
mod test;
