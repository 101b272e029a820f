use anyhow::{anyhow, bail, Result};
use log::debug;
use std::io::BufRead;

use crate::util::dna;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// 逐行收集记录：`>` 行开启新记录（id 取第一个词），其余行去掉空白后拼接。
///
/// 首个 `>` 之前只允许空行。
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records: Vec<FastaRecord> = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or("").to_string();
            records.push(FastaRecord { id, seq: Vec::new() });
            continue;
        }
        match records.last_mut() {
            Some(rec) => rec.seq.extend(line.bytes().filter(|b| !b.is_ascii_whitespace())),
            None if line.trim().is_empty() => {}
            None => bail!("line {}: sequence data before the first '>' header", lineno + 1),
        }
    }
    for rec in &mut records {
        rec.seq = dna::normalize_seq(&rec.seq);
    }
    Ok(records)
}

/// 读取 FASTA 中的全部序列，作为采样语料（顺序与文件一致）。
pub fn read_sequences(path: &str) -> Result<Vec<Vec<u8>>> {
    let fh = std::fs::File::open(path).map_err(|e| anyhow!("cannot open FASTA '{}': {}", path, e))?;
    let records = parse_records(std::io::BufReader::new(fh)).map_err(|e| anyhow!("{}: {}", path, e))?;
    if records.is_empty() {
        bail!("FASTA file '{}' contains no sequences", path);
    }
    Ok(records
        .into_iter()
        .map(|rec| {
            debug!("loaded {} ({} bp)", rec.id, rec.seq.len());
            rec.seq
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let recs = parse_records(Cursor::new(&b">s1 first\nACgT\n>s2\nuuA\n"[..])).unwrap();
        assert_eq!(
            recs,
            vec![
                FastaRecord { id: "s1".into(), seq: b"ACGT".to_vec() },
                FastaRecord { id: "s2".into(), seq: b"TTA".to_vec() },
            ]
        );
    }

    #[test]
    fn parse_wrapped_lines_with_crlf() {
        let recs = parse_records(Cursor::new(&b"\n>s1 desc\r\nAC g t\r\n acgt\r\n>s2 \r\n GG \r\n"[..])).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id, "s1");
        assert_eq!(recs[0].seq, b"ACGTACGT");
        assert_eq!(recs[1].id, "s2");
        assert_eq!(recs[1].seq, b"GG");
    }

    #[test]
    fn header_without_sequence_is_kept_empty() {
        let recs = parse_records(Cursor::new(&b">a\n>b\nAC\n"[..])).unwrap();
        assert_eq!(recs.len(), 2);
        assert!(recs[0].seq.is_empty());
        assert_eq!(recs[1].seq, b"AC");
    }

    #[test]
    fn data_before_header_is_an_error() {
        let err = parse_records(Cursor::new(&b"\nACGT\n>a\nAC\n"[..])).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn read_sequences_from_file() {
        let path = std::env::temp_dir().join(format!("gibbs_motif_fasta_{}.fa", std::process::id()));
        std::fs::write(&path, ">a\nTTACCTTAAC\n>b\nGATGTCTGTC\n").unwrap();
        let seqs = read_sequences(path.to_str().unwrap()).unwrap();
        assert_eq!(seqs, vec![b"TTACCTTAAC".to_vec(), b"GATGTCTGTC".to_vec()]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_sequences_rejects_empty_file() {
        let path = std::env::temp_dir().join(format!("gibbs_motif_empty_{}.fa", std::process::id()));
        std::fs::write(&path, "\n").unwrap();
        assert!(read_sequences(path.to_str().unwrap()).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
