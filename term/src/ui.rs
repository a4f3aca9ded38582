//! Terminal UI components, views, and colors.

pub mod colors;
pub mod components;
pub mod views;

#[cfg(test)]
pub mod test_utils;
