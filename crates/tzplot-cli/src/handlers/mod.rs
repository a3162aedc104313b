pub mod live;
pub mod plot;
