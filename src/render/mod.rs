//! Article views and their markup.

pub mod articles;
pub mod markup;
