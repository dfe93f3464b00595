pub mod inspect;
pub mod settings;
