use crate::core::kmer::MAX_K;
use crate::core::model::DEFAULT_MAX_LEN;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kira-seqcomp",
    version,
    about = "Per-symbol composition of the sequence lines of a FASTA file"
)]
pub struct Cli {
    /// FASTA file (plain or gzip). Read from stdin when omitted.
    pub input: Option<PathBuf>,

    /// Upper bound on the merged sequence length, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: u64,

    /// Also report k-mer percentages over ACGT.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_K as i64))]
    pub kmer: Option<u32>,

    /// Also report A/C/G/T relative frequencies over a sliding window.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub window: Option<u32>,
}
