//! Mock upstream servers for fetch integration testing

pub mod adzan;

pub use adzan::MockAdzanServer;
