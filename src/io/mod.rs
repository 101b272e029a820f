pub mod fasta;
pub mod report;
pub mod trace;
