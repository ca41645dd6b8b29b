pub mod html;
pub mod tables;
