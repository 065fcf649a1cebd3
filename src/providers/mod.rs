pub mod geocode;
pub mod ipinfo;
pub mod resolve;
