pub mod d400_proms;
