use super::Base58Error;

/// The Bitcoin Base58 alphabet. A symbol's position is its digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of symbols in [`ALPHABET`].
pub const BASE: u64 = ALPHABET.len() as u64;

/// Width of every full encoding.
///
/// `log(2^64) / log(58) ≈ 10.93`, so 11 symbols hold any `u64`.
pub const ENCODED_LEN: usize = 11;

/// Encoding of `0`.
pub const MIN_ENCODED: &str = "11111111111";

/// Encoding of `u64::MAX`. Any 11 character string that sorts above this one
/// does not fit in 64 bits.
pub const MAX_ENCODED: &str = "jpXCZedGfVQ";

const NO_VALUE: u8 = 255;

/// Lookup table for Base58 decoding.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Writes the fixed-width encoding of `payload` into `buf`, least significant
/// symbol last. Positions left over once the value is exhausted get the zero
/// symbol `1`.
#[inline]
pub(crate) fn encode_base58(payload: u64, buf: &mut [u8; ENCODED_LEN]) {
    let mut v = payload;
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(v % BASE) as usize];
        v /= BASE;
    }
}

/// Accumulates the positional value of `input`.
///
/// At most 11 symbols are ever accumulated and `58^11 < 2^128`, so the
/// intermediate never overflows; callers narrow to `u64` afterwards.
#[inline]
pub(crate) fn unpack(input: &[u8]) -> Result<u128, Base58Error> {
    let mut acc = 0_u128;
    for (index, &byte) in input.iter().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Base58Error::DecodeInvalidAscii { byte, index });
        }
        acc = acc * u128::from(BASE) + u128::from(val);
    }
    Ok(acc)
}

/// Returns `true` if every byte of `input` is in the alphabet.
#[inline]
pub(crate) fn all_in_alphabet(input: &[u8]) -> bool {
    input.iter().all(|&b| LOOKUP[b as usize] != NO_VALUE)
}

/// Narrows an accumulated value to `u64`.
#[inline]
pub(crate) fn narrow(acc: u128) -> Result<u64, Base58Error> {
    u64::try_from(acc).map_err(|_| Base58Error::DecodeOverflow)
}

/// `58^n` for padding a partial decode out to full width.
#[inline]
pub(crate) const fn scale(n: usize) -> u128 {
    (BASE as u128).pow(n as u32)
}
