use std::collections::HashMap;

/// Column-name lookup that ignores ASCII case and returns the name as it
/// appears in the source.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = name.trim().to_ascii_uppercase();
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(&name.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.trim().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_preserves_source_spelling() {
        let set = CaseInsensitiveSet::new(["FirstName", "dob"]);
        assert_eq!(set.get("firstname"), Some("FirstName"));
        assert_eq!(set.get("DOB"), Some("dob"));
        assert!(set.contains(" firstname "));
        assert!(!set.contains("LastName"));
    }

    #[test]
    fn first_spelling_wins_on_collision() {
        let set = CaseInsensitiveSet::new(["SSN", "ssn"]);
        assert_eq!(set.get("Ssn"), Some("SSN"));
    }
}
