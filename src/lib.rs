//! One-shot sync of tarkov.dev flea-market prices into MongoDB.
//!
//! Each process invocation does a single fetch → filter → persist pass:
//! pull the item list from the GraphQL endpoint, drop entries without a
//! last low price, upsert the rest into the `items` collection keyed by
//! `id`. Scheduling is external (cron or similar); the binary exits after
//! one pass.

pub mod config;
pub mod logging;
pub mod market;
pub mod model;
pub mod store;
