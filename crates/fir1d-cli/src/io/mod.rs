pub mod jsonl;
pub mod naming;
pub mod pgm;
pub mod vector_file;
