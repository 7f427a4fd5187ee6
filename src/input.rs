pub mod input_render;
mod text_field;

pub use text_field::{FieldId, TextField};
