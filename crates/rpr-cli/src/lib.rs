//! Library components for the decision data studio CLI.

pub mod logging;
