//! HTML page and service routes

pub mod pages;
