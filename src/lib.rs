//! Multilingual information site for the Can Ribot Portocolom vacation rental.

pub mod availability;
pub mod config;
pub mod controller;
pub mod gallery;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod server;
pub mod session;
