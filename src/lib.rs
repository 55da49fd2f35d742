pub mod api;
pub mod config;
pub mod controller;
pub mod export;
pub mod i18n;
pub mod qa;
pub mod security;
pub mod translation;
pub mod view;
