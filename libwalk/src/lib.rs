pub mod dir;
pub mod error;
pub mod options;
pub mod pathstr;
pub mod traverse;
