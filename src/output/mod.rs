pub mod csv;
pub mod json;
pub mod txt;

pub use csv::write_csv;
pub use json::write_json;
pub use txt::write_txt;
