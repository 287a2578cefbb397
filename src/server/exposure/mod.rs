//! API exposure layers

pub mod rest;

pub use rest::RestExposure;
