//! Random strings shaped like password hashes

use std::fmt;

use rand::Rng;
use serde::Serialize;

const HEX: &[u8] = b"0123456789abcdef";
const BCRYPT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789./";
const BASE64_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Hash families the fake crackers report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HashKind {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Ntlm,
    Bcrypt,
    Scrypt,
    Argon2,
}

impl HashKind {
    pub const ALL: [HashKind; 8] = [
        HashKind::Md5,
        HashKind::Sha1,
        HashKind::Sha256,
        HashKind::Sha512,
        HashKind::Ntlm,
        HashKind::Bcrypt,
        HashKind::Scrypt,
        HashKind::Argon2,
    ];

    /// Display name, e.g. `SHA-256`
    pub fn label(self) -> &'static str {
        match self {
            HashKind::Md5 => "MD5",
            HashKind::Sha1 => "SHA-1",
            HashKind::Sha256 => "SHA-256",
            HashKind::Sha512 => "SHA-512",
            HashKind::Ntlm => "NTLM",
            HashKind::Bcrypt => "bcrypt",
            HashKind::Scrypt => "scrypt",
            HashKind::Argon2 => "Argon2",
        }
    }

    /// Pick a kind uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Generate a string with this kind's shape
    pub fn fake<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            HashKind::Md5 | HashKind::Ntlm => random_chars(HEX, 32, rng),
            HashKind::Sha1 => random_chars(HEX, 40, rng),
            HashKind::Sha256 => random_chars(HEX, 64, rng),
            HashKind::Sha512 => random_chars(HEX, 128, rng),
            HashKind::Bcrypt => format!("$2b$12${}", random_chars(BCRYPT_ALPHABET, 53, rng)),
            HashKind::Scrypt => format!(
                "$scrypt$N=16384,r=8,p=1${}${}",
                random_chars(HEX, 32, rng),
                random_chars(HEX, 64, rng)
            ),
            HashKind::Argon2 => format!(
                "$argon2id$v=19$m=4096,t=3,p=1${}${}",
                random_chars(BASE64_ALPHABET, 22, rng),
                random_chars(BASE64_ALPHABET, 43, rng)
            ),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hex digest of MD5 (70%) or SHA-256 (30%) length
pub fn quick_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = if rng.gen_bool(0.3) { 64 } else { 32 };
    random_chars(HEX, len, rng)
}

fn random_chars<R: Rng + ?Sized>(alphabet: &[u8], len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
