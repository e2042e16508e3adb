pub mod adaptors;
pub mod extract;
pub mod hash;
pub mod scoring;
pub mod screening;
pub mod taxonomy;
