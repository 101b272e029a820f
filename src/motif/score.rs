use crate::util::dna::{self, SIGMA, SYMBOL_PRIORITY};

/// 各列符号计数，下标顺序同 [`SYMBOL_PRIORITY`]。
fn column_counts<M: AsRef<[u8]>>(motifs: &[M], col: usize) -> [u32; SIGMA] {
    let mut counts = [0u32; SIGMA];
    for m in motifs {
        if let Some(a) = dna::to_index(m.as_ref()[col]) {
            counts[a] += 1;
        }
    }
    counts
}

/// 多数符号；计数相同时按 A > C > G > T 取第一个。
pub fn majority(counts: &[u32; SIGMA]) -> u8 {
    let mut best = 0usize;
    for a in 1..SIGMA {
        if counts[a] > counts[best] {
            best = a;
        }
    }
    SYMBOL_PRIORITY[best]
}

/// 计算 (consensus, score)。
///
/// score 为每条 motif 在各列与该列多数符号不一致的次数之和，越小越好，0 表示全部相同。
/// 空集合返回空串与 0。
pub fn score_motifs<M: AsRef<[u8]>>(motifs: &[M]) -> (String, u32) {
    let k = match motifs.first() {
        Some(m) => m.as_ref().len(),
        None => return (String::new(), 0),
    };

    let mut consensus = String::with_capacity(k);
    let mut score = 0u32;
    for col in 0..k {
        let sym = majority(&column_counts(motifs, col));
        consensus.push(char::from(sym));
        score += motifs.iter().filter(|m| m.as_ref()[col] != sym).count() as u32;
    }
    (consensus, score)
}

pub fn score<M: AsRef<[u8]>>(motifs: &[M]) -> u32 {
    score_motifs(motifs).1
}

pub fn consensus<M: AsRef<[u8]>>(motifs: &[M]) -> String {
    score_motifs(motifs).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_motifs_score_zero() {
        let (cons, s) = score_motifs(&["AAAA", "AAAA", "AAAA"]);
        assert_eq!(cons, "AAAA");
        assert_eq!(s, 0);
    }

    #[test]
    fn ties_follow_priority_order() {
        assert_eq!(majority(&[2, 2, 0, 0]), b'A');
        assert_eq!(majority(&[0, 1, 1, 1]), b'C');
        assert_eq!(majority(&[0, 0, 3, 3]), b'G');
        assert_eq!(majority(&[0, 0, 0, 0]), b'A');
        assert_eq!(majority(&[1, 0, 0, 2]), b'T');
    }

    #[test]
    fn all_columns_tied() {
        // every column is one A against one C; A wins each tie
        let (cons, s) = score_motifs(&["AACC", "CCAA"]);
        assert_eq!(cons, "AAAA");
        assert_eq!(s, 4);
    }

    #[test]
    fn counts_mismatches_per_column() {
        let motifs = ["ACGT", "ACGA", "TCGT", "ACCT"];
        let (cons, s) = score_motifs(&motifs);
        assert_eq!(cons, "ACGT");
        assert_eq!(s, 3);
        assert_eq!(score(&motifs), 3);
        assert_eq!(consensus(&motifs), "ACGT");
    }

    #[test]
    fn zero_iff_identical() {
        assert_eq!(score(&["GATTACA", "GATTACA"]), 0);
        assert!(score(&["GATTACA", "GATTACC"]) > 0);
    }

    #[test]
    fn empty_set() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(score_motifs(&empty), (String::new(), 0));
    }
}
