//! Word pools for fake cracking output

use rand::seq::SliceRandom;
use rand::Rng;

pub const PASSWORDS: &[&str] = &[
    "password123", "admin", "letmein", "welcome", "monkey", "123456789", "password1",
    "qwerty123", "abc123", "Password1", "secret", "root", "toor", "admin123",
    "welcome123", "hello", "love", "princess", "dragon", "master", "shadow",
    "superman", "michael", "jennifer", "jordan", "michelle", "daniel", "jessica",
    "killer", "hunter", "tigger", "charlie", "football", "baseball", "soccer",
];

pub const USERNAMES: &[&str] = &[
    "admin", "administrator", "root", "user", "test", "guest", "demo", "backup",
    "manager", "service", "operator", "support", "webmaster", "ftp", "mail",
    "www", "web", "db", "database", "mysql", "oracle", "postgres", "jenkins",
    "tomcat", "apache", "nginx", "elastic", "redis", "mongo", "node", "docker",
];

pub const ALGORITHMS: &[&str] = &["Dictionary", "Brute-force", "Hybrid", "Rule-based", "Markov", "PRINCE"];

pub const TECHNIQUES: &[&str] = &[
    "Loading custom wordlist: leaked_passwords_2024.txt (47.2M passwords)",
    "Applying mutation rules: l33t speak, capitalization, numbers",
    "Implementing mask attack: ?l?l?l?l?d?d?d?d",
    "Using combinator attack: wordlist1.txt + wordlist2.txt",
    "Executing PRINCE algorithm with keyspace reduction",
    "Applying Markov chains for statistical password generation",
    "Loading hashcat rules: best64.rule, d3ad0ne.rule, dive.rule",
    "Implementing distributed cracking across 47 nodes",
    "Using GPU optimization: CUDA cores fully utilized",
    "Loading rainbow tables: 8.4TB ntlm_mixalpha-numeric#1-9",
    "Applying social engineering wordlists: company names, dates",
    "Using OSINT-gathered passwords from breach databases",
];

pub const VULNERABILITIES: &[&str] = &[
    "Weak password policy detected: minimum 6 characters",
    "Password reuse detected across multiple accounts",
    "Default credentials found: admin/admin, root/toor",
    "Plaintext passwords stored in database",
    "Unsalted MD5 hashes detected - CRITICAL vulnerability",
    "Service account with weak password discovered",
    "Shared service account detected: backup/backup123",
    "Admin account with password based on company name",
];

/// Pick one entry; empty pools yield `""`
pub fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(USERNAMES.contains(&pick(USERNAMES, &mut rng)));
        }
        assert_eq!(pick(&[], &mut rng), "");
    }
}
