//! Absent values, assignment shortcuts, numeric literals and string replacement.
//!
//! Optional chaining maps to `?` on `Option`: the first missing link ends the
//! lookup with `None`. Nullish coalescing maps to `Option::unwrap_or`: only an
//! absent value takes the fallback, so `0` and `false` survive. The falsy `or`
//! ([`or_falsy`]) is the contrast: it also replaces zero, `false` and `""`.

use serde::Deserialize;

// ============================================================================
// Optional chaining
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub address: Option<Address>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
}

impl User {
    /// A user with an address in 北京 and no contact details.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            profile: Some(Profile {
                address: Some(Address {
                    city: Some("北京".to_string()),
                }),
                contact: None,
            }),
        }
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.profile.as_ref()?.address.as_ref()?.city.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.profile.as_ref()?.contact.as_ref()?.phone.as_deref()
    }
}

// ============================================================================
// Nullish coalescing
// ============================================================================

pub const DEFAULT_THEME: &str = "default";
pub const DEFAULT_TIMEOUT: u64 = 5000;
pub const DEFAULT_DEBUG: bool = true;

/// Settings where `null` (absent) and falsy-but-present are different things.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub theme: Option<String>,
    pub timeout: Option<u64>,
    pub debug: Option<bool>,
}

impl Settings {
    /// `theme: null`, `timeout: 0`, `debug: false`.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            theme: None,
            timeout: Some(0),
            debug: Some(false),
        }
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    #[must_use]
    pub fn timeout(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(DEFAULT_DEBUG)
    }
}

/// Values with a notion of falsiness: zero, `false`, the empty string, `None`.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// `value || fallback`.
pub fn or_falsy<T: Truthy>(value: T, fallback: T) -> T {
    if value.is_truthy() { value } else { fallback }
}

// ============================================================================
// Logical assignment
// ============================================================================

/// `slot ||= value`: assigns only when the slot is falsy.
pub fn or_assign<T: Truthy>(slot: &mut T, value: T) {
    if !slot.is_truthy() {
        *slot = value;
    }
}

/// `slot ??= value`: assigns only when the slot is absent.
pub fn nullish_assign<T>(slot: &mut Option<T>, value: T) -> &mut T {
    slot.get_or_insert(value)
}

// ============================================================================
// Numeric separators and replace-all
// ============================================================================

pub const MILLION: u32 = 1_000_000;
pub const BINARY: u8 = 0b1010_0001;
pub const HEX: u32 = 0xFF_EC_DE_5E;

/// Replace every occurrence of `from`, not only the first.
#[must_use]
pub fn replace_all(text: &str, from: &str, to: &str) -> String {
    text.replace(from, to)
}
