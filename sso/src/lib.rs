pub mod console;
pub mod identity;
pub mod login;
