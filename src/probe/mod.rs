pub mod http_probe;
pub mod throttle;

pub use http_probe::Prober;
pub use throttle::HttpThrottle;
