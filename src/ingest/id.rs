use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LENGTH: usize = 5;

/// Builds `TXN<epoch millis>_<row index>_<5 base36 chars>` for rows that carry no id.
///
/// The row index keeps ids distinct inside one parse even when two rows are
/// identical and land on the same millisecond.
pub fn synthesize_transaction_id(row_index: usize) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!("TXN{}_{}_{}", Utc::now().timestamp_millis(), row_index, suffix)
}
