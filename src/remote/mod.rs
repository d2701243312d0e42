//! Remote lookup service client

pub mod client;

pub use client::LookupClient;
