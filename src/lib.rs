//! PassGen: a small form that builds an alphabet from character-class
//! toggles and samples a random password from it.

pub mod app;
pub mod form;
pub mod password;
pub mod settings;
