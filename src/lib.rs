pub mod decomposition;
pub mod errors;
pub mod lexicon;
pub mod ui;
pub mod wordroot_config;
