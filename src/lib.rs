//! NASA image gallery: archive search client, pagination controller, and
//! the terminal front end that drives them.

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
