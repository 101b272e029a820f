pub const SIGMA: usize = 4; // {0:A, 1:C, 2:G, 3:T}

/// 多数票平局时的符号优先级：A > C > G > T。
/// 下标即 profile 的列号。
pub const SYMBOL_PRIORITY: [u8; SIGMA] = [b'A', b'C', b'G', b'T'];

#[inline]
pub fn to_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

#[inline]
pub fn from_index(i: usize) -> u8 {
    SYMBOL_PRIORITY[i]
}

/// 大写化，U 视为 T；其余字符原样保留，交给语料校验报错。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq {
        let up = b.to_ascii_uppercase();
        out.push(if up == b'U' { b'T' } else { up });
    }
    out
}

/// 返回第一个不属于 {A,C,G,T} 的符号及其位置。
pub fn first_invalid(seq: &[u8]) -> Option<(usize, u8)> {
    seq.iter()
        .enumerate()
        .find(|(_, &b)| to_index(b).is_none())
        .map(|(i, &b)| (i, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips_in_priority_order() {
        for (i, &b) in SYMBOL_PRIORITY.iter().enumerate() {
            assert_eq!(to_index(b), Some(i));
            assert_eq!(from_index(i), b);
        }
        assert_eq!(to_index(b'N'), None);
        assert_eq!(to_index(b'a'), None);
    }

    #[test]
    fn normalize_uppercases_and_maps_u() {
        assert_eq!(normalize_seq(b"acgu"), b"ACGT");
        assert_eq!(normalize_seq(b"AcNt"), b"ACNT");
    }

    #[test]
    fn first_invalid_reports_position() {
        assert_eq!(first_invalid(b"ACGT"), None);
        assert_eq!(first_invalid(b"ACXT"), Some((2, b'X')));
    }
}
