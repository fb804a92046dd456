pub mod a001_majelis;
pub mod a002_reservation;
