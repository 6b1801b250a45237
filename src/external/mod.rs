pub mod axfr;
pub mod nuclei;
pub mod process_runner;
