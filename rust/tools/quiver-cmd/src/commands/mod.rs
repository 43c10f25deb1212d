pub mod add;
pub mod fields;
