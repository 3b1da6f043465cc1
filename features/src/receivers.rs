//! Call-time receivers versus creation-time captures.
//!
//! A method gets the object it runs on at the moment it is called, so the
//! same method reports a different name when invoked on a different object.
//! A closure captures its enclosing context when it is created and keeps
//! reporting that context no matter which object it is called through.

use std::fmt;

/// How a callable finds the context it describes.
pub enum Receiver {
    /// Takes the receiver as an explicit argument on every call.
    Method(fn(&NamedObject) -> String),
    /// Captured its context at creation and ignores the caller's receiver.
    Captured(Box<dyn Fn() -> String + Send + Sync>),
}

impl Receiver {
    pub fn call(&self, receiver: &NamedObject) -> String {
        match self {
            Self::Method(method) => method(receiver),
            Self::Captured(closure) => closure(),
        }
    }

    #[must_use]
    pub fn binds_at_call(&self) -> bool {
        matches!(self, Self::Method(_))
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(_) => f.write_str("Receiver::Method"),
            Self::Captured(_) => f.write_str("Receiver::Captured"),
        }
    }
}

#[derive(Debug)]
pub struct NamedObject {
    pub name: String,
    traditional: Receiver,
    arrow: Receiver,
}

impl NamedObject {
    /// `enclosing` is the name visible where the object is written; module
    /// scope has none, which the captured closure reports as `undefined`.
    pub fn new(name: impl Into<String>, enclosing: Option<&str>) -> Self {
        let captured = enclosing.map(str::to_string);
        Self {
            name: name.into(),
            traditional: Receiver::Method(|object: &NamedObject| {
                format!("传统函数：{}", object.name)
            }),
            arrow: Receiver::Captured(Box::new(move || {
                format!("箭头函数：{}", captured.as_deref().unwrap_or("undefined"))
            })),
        }
    }

    /// The object as written at module scope: named `对象`, no enclosing name.
    #[must_use]
    pub fn module_level() -> Self {
        Self::new("对象", None)
    }

    #[must_use]
    pub fn traditional(&self) -> String {
        self.traditional.call(self)
    }

    #[must_use]
    pub fn arrow(&self) -> String {
        self.arrow.call(self)
    }

    /// Borrow this object's method but run it on `other`.
    #[must_use]
    pub fn traditional_on(&self, other: &NamedObject) -> String {
        self.traditional.call(other)
    }

    /// Borrow this object's closure but run it on `other`.
    #[must_use]
    pub fn arrow_on(&self, other: &NamedObject) -> String {
        self.arrow.call(other)
    }
}
