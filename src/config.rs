//! # Chip Variant Configuration
//!
//! The 6502 family has members that differ in ways visible to software.
//! The NMOS part performs BCD arithmetic when the Decimal flag is set and
//! executes a set of undocumented-but-reproducible opcodes; the Ricoh 2A03
//! used in the NES dropped the BCD circuitry. [`CpuConfig`] selects between
//! these behaviors when a [`CPU`](crate::CPU) is constructed.

use std::fmt;
use std::str::FromStr;

/// Construction-time switches selecting the emulated chip variant.
///
/// # Examples
///
/// ```
/// use core6502::CpuConfig;
///
/// let config = CpuConfig::default();
/// assert!(config.enable_decimal_mode);
/// assert!(config.enable_undocumented_opcodes);
///
/// let nes: CpuConfig = "2a03".parse().unwrap();
/// assert!(!nes.enable_decimal_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Execute the predictable undocumented opcodes (LAX, SAX, DCP, ISB,
    /// SLO, RLA, SRE, RRA). When false those opcodes run as NOPs of the
    /// same length.
    pub enable_undocumented_opcodes: bool,

    /// Honor the Decimal flag in ADC and SBC.
    pub enable_decimal_mode: bool,
}

impl CpuConfig {
    /// NMOS 6502 with BCD arithmetic and undocumented opcodes.
    pub const fn nmos() -> Self {
        Self {
            enable_undocumented_opcodes: true,
            enable_decimal_mode: true,
        }
    }

    /// NMOS 6502 restricted to the documented instruction set.
    pub const fn documented() -> Self {
        Self {
            enable_undocumented_opcodes: false,
            enable_decimal_mode: true,
        }
    }

    /// Ricoh 2A03 (NES): undocumented opcodes present, no BCD.
    pub const fn ricoh_2a03() -> Self {
        Self {
            enable_undocumented_opcodes: true,
            enable_decimal_mode: false,
        }
    }
}

/// The default is a stock NMOS part, the chip found in 6502 single-board
/// computers whose monitor ROMs use decimal mode. Use
/// [`CpuConfig::ricoh_2a03`] for a BCD-less core.
impl Default for CpuConfig {
    fn default() -> Self {
        Self::nmos()
    }
}

impl FromStr for CpuConfig {
    type Err = ConfigError;

    /// Parses a preset name: `nmos`/`6502`, `documented`, or `2a03`/`nes`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nmos" | "6502" => Ok(Self::nmos()),
            "documented" => Ok(Self::documented()),
            "2a03" | "nes" => Ok(Self::ricoh_2a03()),
            "" => Err(ConfigError::EmptyPreset),
            _ => Err(ConfigError::UnknownPreset(s.trim().to_string())),
        }
    }
}

/// Errors produced when building a [`CpuConfig`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No preset name was given.
    EmptyPreset,

    /// The preset name is not recognized.
    ///
    /// Contains the offending name for diagnostics.
    UnknownPreset(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::EmptyPreset => write!(f, "CPU preset name is empty"),
            ConfigError::UnknownPreset(name) => write!(
                f,
                "unknown CPU preset '{}' (expected nmos, documented or 2a03)",
                name
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
