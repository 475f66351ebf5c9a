//! Locator ports

use crate::error::Result;
use crate::location::Location;
use crate::record::State;
use crate::value::Value;

/// A value source bound to one source-state instance
///
/// `Ok(None)` means the name is absent; a present but zero value is
/// returned as `Ok(Some(..))`.
pub trait Locator {
    /// Kind of the provider that created this locator
    fn kind(&self) -> &str;

    /// Look up `name`
    fn value(&self, name: &str) -> Result<Option<Value>>;
}

/// Factory of locators, registered under a kind with a priority
///
/// Lower priorities are resolved first.
pub trait LocatorProvider: Send + Sync {
    /// Kind this provider serves
    fn kind(&self) -> &str;

    /// Resolution priority
    fn priority(&self) -> i32;

    /// Bind a locator to the session state
    fn locate<'a>(&'a self, state: State<'a>) -> Result<Box<dyn Locator + 'a>>;
}

/// Resolves arbitrary locations against the current session
///
/// Handed to transformers that need auxiliary lookups.
pub trait Resolver {
    fn value(&self, location: &Location) -> Result<Option<Value>>;
}
