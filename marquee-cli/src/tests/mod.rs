//! Unit coverage for the CLI.
