pub mod charts;
pub mod dashboard;
pub mod ops;
pub mod reference;
pub mod ws;
