pub mod character;
pub mod health;
