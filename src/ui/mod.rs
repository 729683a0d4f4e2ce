//! UI module - reusable widgets shared by the drawer and pages

pub mod components;
