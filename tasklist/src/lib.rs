//! `Tasklist`: terminal to-do list manager library.

pub mod app;
pub mod config;
pub mod persistence;
pub mod storage;
pub mod ui;
