pub mod composition_txt;
pub mod kmer_txt;
pub mod window_tsv;
