pub mod export;
pub mod probes;
pub mod screening;
