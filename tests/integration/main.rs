//! Integration tests for the folio binary

mod helpers;

mod cli_test;
mod config_test;
mod terminal_test;
