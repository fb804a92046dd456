pub mod d400_default_dashboard;
