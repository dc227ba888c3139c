//! Graph API client.
//!
//! This module provides [`GraphClient`], which issues authenticated GET, POST
//! and DELETE requests and decodes responses with `serde`.
//!
//! # Request URLs
//!
//! Targets are resolved by [`build_request_url`](crate::clients::build_request_url):
//!
//! - Relative targets are joined to `https://graph.facebook.com/`, with a
//!   `v<version>/` segment when an API version is set
//! - A single leading `/` is stripped: `/me` -> `me`
//! - Targets starting with `http` are used as given
//! - `access_token=<token>` is appended with `?` or `&` as needed
//!
//! # Errors
//!
//! Only `200 OK` is treated as success. Other responses are decoded as an
//! error envelope and classified into an
//! [`ApiError`](crate::clients::ApiError). The client never retries.

mod client;

pub use client::GraphClient;
