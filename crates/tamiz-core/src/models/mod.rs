pub mod record;
pub mod styles;
