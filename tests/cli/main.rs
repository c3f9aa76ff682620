//! Integration tests for the pathgraph commands

mod config;
mod connected;
mod inspect;
mod path;
mod support;
