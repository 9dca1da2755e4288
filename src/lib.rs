//! Client library for VLC's HTTP control interface.
//!
//! VLC exposes a small set of JSON resources (`status`, `playlist`,
//! `browse`) over HTTP, plus an album-art endpoint at the server root.
//! This crate wraps them in a typed [`client::Client`] whose convenience
//! methods translate semantic operations (play, pause, seek, sort the
//! playlist) into the query-string command vocabulary the player expects.
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[macro_use]
extern crate log;

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod protocol;
