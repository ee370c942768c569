//! Tab completion over a fixed command vocabulary

/// Result of completing an input prefix
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Nothing in the vocabulary starts with the prefix
    NoMatch,
    /// Exactly one candidate
    Unique(String),
    /// Several candidates, in vocabulary order
    Ambiguous(Vec<String>),
}

/// Complete `prefix` against `vocabulary` by plain prefix match
pub fn complete<'a, I>(prefix: &str, vocabulary: I) -> Completion
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches: Vec<String> = vocabulary
        .into_iter()
        .filter(|cmd| cmd.starts_with(prefix))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Unique(matches.remove(0)),
        _ => Completion::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: &[&str] = &["nmap", "nikto", "nslookup", "netstat", "hydra"];

    #[test]
    fn test_unique_match() {
        assert_eq!(
            complete("ns", VOCAB.iter().copied()),
            Completion::Unique("nslookup".to_string())
        );
    }

    #[test]
    fn test_ambiguous_match_keeps_order() {
        assert_eq!(
            complete("n", VOCAB.iter().copied()),
            Completion::Ambiguous(vec![
                "nmap".to_string(),
                "nikto".to_string(),
                "nslookup".to_string(),
                "netstat".to_string(),
            ])
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete("zz", VOCAB.iter().copied()), Completion::NoMatch);
    }
}
