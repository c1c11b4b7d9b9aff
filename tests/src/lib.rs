//! Cross-module tests: parse, interpolate and format as the command line does.

#[cfg(test)]
mod integration;
