//! The addressing modes the generated dispatch table can resolve.
//!
//! Each documented label maps to a short code, which is also the name of the
//! resolver macro the generated code invokes (e.g. `zpx!(self, memory)`).
//! Modes whose resolvers haven't been written yet stay in the registry with
//! `enabled: false`, so rows using them are rejected loudly rather than
//! producing a call to a resolver that doesn't exist.
use lazy_static::lazy_static;
use std::collections::HashMap;

/// One addressing mode the documents may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCapability {
    /// label as written in the documents' tables
    pub label: &'static str,
    /// resolver name in the generated code
    pub code: &'static str,
    pub enabled: bool,
}

macro_rules! mode {
    ($label:literal, $code:literal, $enabled:literal) => {
        ModeCapability {
            label: $label,
            code: $code,
            enabled: $enabled,
        }
    };
}

pub const MODES: &[ModeCapability] = &[
    mode!("Implied", "imp", true),
    mode!("Immediate", "imm", true),
    mode!("Zero Page", "zp0", true),
    mode!("Zero Page,X", "zpx", true),
    mode!("Zero Page,Y", "zpy", true),
    mode!("Absolute", "abs", true),
    mode!("Absolute,X", "abx", true),
    mode!("Absolute,Y", "aby", true),
    mode!("Indirect,X", "izx", true),
    mode!("Indirect,Y", "izy", true),
    mode!("Indirect", "ind", false),
    mode!("Accumulator", "acc", false),
    mode!("Relative", "rel", false),
];

/// Mode code used for the placeholder entries seeded from the reference table.
pub const IMPLIED: &str = "imp";

lazy_static! {
    static ref BY_LABEL: HashMap<&'static str, &'static ModeCapability> =
        MODES.iter().map(|m| (m.label, m)).collect();
}

/// Why a label can't be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// the registry has never heard of this label
    Unknown,
    /// the label is known but its resolver isn't implemented
    Disabled(&'static ModeCapability),
}

/// Looks up the capability for a table label. Labels are matched exactly.
pub fn lookup(label: &str) -> Result<&'static ModeCapability, Unsupported> {
    match BY_LABEL.get(label).copied() {
        Some(m) if m.enabled => Ok(m),
        Some(m) => Err(Unsupported::Disabled(m)),
        None => Err(Unsupported::Unknown),
    }
}

/// Codes of every enabled mode, in registry order.
pub fn enabled_codes() -> impl Iterator<Item = &'static str> { MODES.iter().filter(|m| m.enabled).map(|m| m.code) }
