//! The six fixed life domains and a fixed-size map keyed by them

use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the six tracked life categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeDomain {
    Career,
    Relationships,
    Health,
    Meaning,
    Finances,
    Fun,
}

impl LifeDomain {
    /// All domains in display order
    pub const ALL: [LifeDomain; 6] = [
        LifeDomain::Career,
        LifeDomain::Relationships,
        LifeDomain::Health,
        LifeDomain::Meaning,
        LifeDomain::Finances,
        LifeDomain::Fun,
    ];

    /// Lowercase key (e.g. "career")
    pub fn key(&self) -> &'static str {
        match self {
            LifeDomain::Career => "career",
            LifeDomain::Relationships => "relationships",
            LifeDomain::Health => "health",
            LifeDomain::Meaning => "meaning",
            LifeDomain::Finances => "finances",
            LifeDomain::Fun => "fun",
        }
    }

    /// Capitalized label used in templates and charts (e.g. "Career")
    pub fn label(&self) -> &'static str {
        match self {
            LifeDomain::Career => "Career",
            LifeDomain::Relationships => "Relationships",
            LifeDomain::Health => "Health",
            LifeDomain::Meaning => "Meaning",
            LifeDomain::Finances => "Finances",
            LifeDomain::Fun => "Fun",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LifeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LifeDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        LifeDomain::ALL
            .into_iter()
            .find(|d| d.key() == normalized)
            .ok_or_else(|| s.trim().to_string())
    }
}

/// One value per life domain, always all six
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainValues<T> {
    values: [T; 6],
}

impl<T> DomainValues<T> {
    /// Build by computing a value for each domain in order
    pub fn from_fn(mut f: impl FnMut(LifeDomain) -> T) -> Self {
        DomainValues {
            values: LifeDomain::ALL.map(&mut f),
        }
    }

    pub fn get(&self, domain: LifeDomain) -> &T {
        &self.values[domain.index()]
    }

    pub fn set(&mut self, domain: LifeDomain, value: T) {
        self.values[domain.index()] = value;
    }

    /// Iterate `(domain, value)` pairs in fixed domain order
    pub fn iter(&self) -> impl Iterator<Item = (LifeDomain, &T)> {
        LifeDomain::ALL.into_iter().zip(self.values.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(LifeDomain, &T) -> U) -> DomainValues<U> {
        DomainValues::from_fn(|domain| f(domain, self.get(domain)))
    }
}

impl<T> Index<LifeDomain> for DomainValues<T> {
    type Output = T;

    fn index(&self, domain: LifeDomain) -> &T {
        self.get(domain)
    }
}

impl<T> IndexMut<LifeDomain> for DomainValues<T> {
    fn index_mut(&mut self, domain: LifeDomain) -> &mut T {
        &mut self.values[domain.index()]
    }
}

impl<T: Serialize> Serialize for DomainValues<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(6))?;
        for (domain, value) in self.iter() {
            map.serialize_entry(domain.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_case_insensitive() {
        assert_eq!("career".parse::<LifeDomain>().unwrap(), LifeDomain::Career);
        assert_eq!("FUN".parse::<LifeDomain>().unwrap(), LifeDomain::Fun);
        assert_eq!(
            " Relationships ".parse::<LifeDomain>().unwrap(),
            LifeDomain::Relationships
        );
        assert_eq!("hobbies".parse::<LifeDomain>().unwrap_err(), "hobbies");
    }

    #[test]
    fn test_fixed_order() {
        let labels: Vec<&str> = LifeDomain::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec!["Career", "Relationships", "Health", "Meaning", "Finances", "Fun"]
        );
    }

    #[test]
    fn test_domain_values_index() {
        let mut values: DomainValues<i32> = DomainValues::default();
        values[LifeDomain::Health] = 7;
        values.set(LifeDomain::Fun, 3);

        assert_eq!(values[LifeDomain::Health], 7);
        assert_eq!(*values.get(LifeDomain::Fun), 3);
        assert_eq!(values[LifeDomain::Career], 0);
    }

    #[test]
    fn test_domain_values_serialize_as_map() {
        let values = DomainValues::from_fn(|d| d.index() as i32);
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            r#"{"career":0,"relationships":1,"health":2,"meaning":3,"finances":4,"fun":5}"#
        );
    }

    #[test]
    fn test_domain_serializes_as_key() {
        for domain in LifeDomain::ALL {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.key()));
        }
    }
}
