pub mod provider;

pub use provider::{FetchError, TarkovMarket};
