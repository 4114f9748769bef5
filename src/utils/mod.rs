pub mod dom;
pub mod scroll;
pub mod validation;
