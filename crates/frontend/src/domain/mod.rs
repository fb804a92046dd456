pub mod a001_majelis;
