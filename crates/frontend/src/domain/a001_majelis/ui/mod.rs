pub mod list;

pub use list::MajelisList;
