//! Edge-list provider: a user count followed by one friendship per line.

mod errors;
mod parse;
mod provider;

pub use errors::EdgeListError;
pub use provider::EdgeListProvider;
