pub mod dedup;
pub mod private_ip;
pub mod risk;
pub mod takeover;

pub use dedup::Fingerprinter;
pub use private_ip::is_private_ip;
pub use risk::score;
pub use takeover::check_takeover;
