pub mod composition;
pub mod error;
pub mod fasta;
pub mod io;
pub mod kmer;
pub mod model;
pub mod window;
