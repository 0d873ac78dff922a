//! HTTP request handlers

pub mod api;
pub mod pages;
pub mod params;
