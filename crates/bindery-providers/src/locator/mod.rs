//! Locator providers
//!
//! | Provider | Source | Lookup |
//! |----------|--------|--------|
//! | [`StructProvider`] | session state | dotted path below a root selector |
//! | [`MapProvider`] | map field of the session state | key |
//! | [`DirectProvider`] | fixed value | dotted path |

pub mod direct;
pub mod map;
pub mod state;

pub use direct::DirectProvider;
pub use map::MapProvider;
pub use state::StructProvider;
