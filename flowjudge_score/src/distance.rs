// Edit distance and length-normalized similarity.
//
// `levenshtein` is the textbook dynamic-programming distance with unit costs
// for insertion, deletion and substitution. It is generic over slices so the
// rhyme checker can compare `Vowel` sequences directly; `levenshtein_str`
// is the char-level convenience for plain strings.
//
// `similarity` maps a distance onto a 0-100 percentage relative to the
// longer input. Two empty inputs are perfectly similar.

/// Edit distance between two sequences.
///
/// Fills a `(b.len() + 1) × (a.len() + 1)` table row by row, where
/// `table[j][i]` is the distance between `a[..i]` and `b[..j]`.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut table = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (i, cell) in table[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in table.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[j][i] = (table[j][i - 1] + 1)
                .min(table[j - 1][i] + 1)
                .min(table[j - 1][i - 1] + cost);
        }
    }

    table[b.len()][a.len()]
}

/// Edit distance between two strings, counted in chars.
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// Similarity percentage for a distance between inputs of the given lengths.
pub fn similarity(distance: usize, len1: usize, len2: usize) -> u8 {
    let max_len = len1.max(len2);
    if max_len == 0 {
        return 100;
    }
    let ratio = 1.0 - distance as f64 / max_len as f64;
    percent(ratio * 100.0)
}

/// Round a percentage and clamp it into `0..=100`.
pub fn percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}
