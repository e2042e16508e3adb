pub mod contact;
pub mod read;
pub mod skills;
