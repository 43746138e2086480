pub mod headless;
pub mod report;
