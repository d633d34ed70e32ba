pub mod attributes;
pub mod chart;
pub mod health;
