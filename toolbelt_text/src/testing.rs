//! Messages printed while running tests, filtered by tier.

use crate::message::Tier;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use std::{
    env,
    io::{self, Write},
};

/// Environment variable selecting which tiers of testing messages are
/// printed. Holds a comma-separated list of tier names, or `all` or `none`.
pub const TESTING_MESSAGES_ENV_VAR: &str = "TOOLBELT_TESTING_MESSAGES";

/// Which tiers of testing messages are printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestingMessageConfig {
    pub primary: bool,
    pub secondary: bool,
    pub tertiary: bool,
}

lazy_static! {
    static ref TESTING_MESSAGE_CONFIG: TestingMessageConfig =
        TestingMessageConfig::from_env_or_default();
}

impl TestingMessageConfig {
    /// Configuration printing no testing messages.
    pub const fn none() -> Self {
        Self {
            primary: false,
            secondary: false,
            tertiary: false,
        }
    }

    /// Configuration printing testing messages of every tier.
    pub const fn all() -> Self {
        Self {
            primary: true,
            secondary: true,
            tertiary: true,
        }
    }

    /// The process-wide configuration used by the free functions in this
    /// module. It is read from [`TESTING_MESSAGES_ENV_VAR`] the first time it
    /// is accessed and never changes afterwards.
    pub fn global() -> &'static Self {
        &TESTING_MESSAGE_CONFIG
    }

    /// Parses a comma-separated list of tier names into a configuration
    /// enabling exactly those tiers. `all` and `none` (or an empty string)
    /// are also accepted.
    ///
    /// # Errors
    /// Returns an error if any of the names is not a known tier.
    pub fn parse(tiers: &str) -> Result<Self> {
        match tiers.trim() {
            "" | "none" => return Ok(Self::none()),
            "all" => return Ok(Self::all()),
            _ => {}
        }

        let mut config = Self::none();
        for name in tiers.split(',').map(str::trim) {
            let tier = Tier::from_name(name)
                .with_context(|| format!("Unknown testing message tier `{name}`"))?;
            config.set_enabled(tier, true);
        }
        Ok(config)
    }

    /// Reads the configuration from [`TESTING_MESSAGES_ENV_VAR`]. Returns
    /// [`None`] if the variable is not set.
    ///
    /// # Errors
    /// Returns an error if the variable is set but does not hold valid
    /// unicode or a valid list of tiers.
    pub fn from_env() -> Result<Option<Self>> {
        match env::var(TESTING_MESSAGES_ENV_VAR) {
            Ok(tiers) => Self::parse(&tiers)
                .with_context(|| format!("Invalid value for {TESTING_MESSAGES_ENV_VAR}"))
                .map(Some),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("Could not read {TESTING_MESSAGES_ENV_VAR}")),
        }
    }

    fn from_env_or_default() -> Self {
        let config = match Self::from_env() {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                log::warn!("{err:#}, using default testing message configuration");
                Self::default()
            }
        };
        log::debug!("Using testing message configuration {config:?}");
        config
    }

    /// Whether testing messages of the given tier are printed.
    pub const fn is_enabled(&self, tier: Tier) -> bool {
        match tier {
            Tier::Primary => self.primary,
            Tier::Secondary => self.secondary,
            Tier::Tertiary => self.tertiary,
        }
    }

    /// Enables or disables testing messages of the given tier.
    pub fn set_enabled(&mut self, tier: Tier, enabled: bool) {
        match tier {
            Tier::Primary => self.primary = enabled,
            Tier::Secondary => self.secondary = enabled,
            Tier::Tertiary => self.tertiary = enabled,
        }
    }

    /// Prints the given message with the decoration of the given tier, or
    /// nothing if the tier is disabled.
    ///
    /// # Errors
    /// Returns an error if writing to the output fails.
    pub fn print<W: Write + ?Sized>(
        &self,
        tier: Tier,
        output: &mut W,
        message: &str,
    ) -> io::Result<()> {
        if self.is_enabled(tier) {
            tier.print(output, message)
        } else {
            Ok(())
        }
    }

    /// Prints a primary message if primary testing messages are enabled.
    ///
    /// # Errors
    /// Returns an error if writing to the output fails.
    pub fn primary<W: Write + ?Sized>(&self, output: &mut W, message: &str) -> io::Result<()> {
        self.print(Tier::Primary, output, message)
    }

    /// Prints a secondary message if secondary testing messages are enabled.
    ///
    /// # Errors
    /// Returns an error if writing to the output fails.
    pub fn secondary<W: Write + ?Sized>(&self, output: &mut W, message: &str) -> io::Result<()> {
        self.print(Tier::Secondary, output, message)
    }

    /// Prints a tertiary message if tertiary testing messages are enabled.
    ///
    /// # Errors
    /// Returns an error if writing to the output fails.
    pub fn tertiary<W: Write + ?Sized>(&self, output: &mut W, message: &str) -> io::Result<()> {
        self.print(Tier::Tertiary, output, message)
    }
}

impl Default for TestingMessageConfig {
    fn default() -> Self {
        Self {
            primary: true,
            secondary: true,
            tertiary: false,
        }
    }
}

/// Prints a primary testing message if enabled in the
/// [global](TestingMessageConfig::global) configuration.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn primary<W: Write + ?Sized>(output: &mut W, message: &str) -> io::Result<()> {
    TestingMessageConfig::global().primary(output, message)
}

/// Prints a secondary testing message if enabled in the
/// [global](TestingMessageConfig::global) configuration.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn secondary<W: Write + ?Sized>(output: &mut W, message: &str) -> io::Result<()> {
    TestingMessageConfig::global().secondary(output, message)
}

/// Prints a tertiary testing message if enabled in the
/// [global](TestingMessageConfig::global) configuration.
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn tertiary<W: Write + ?Sized>(output: &mut W, message: &str) -> io::Result<()> {
    TestingMessageConfig::global().tertiary(output, message)
}
