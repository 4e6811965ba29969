//! Fixed company directory backing the picker.

/// Ordered company directory: display name paired with its ticker symbol.
/// Fixed for the process lifetime; the picker indexes into it directly.
const COMPANIES: [(&str, &str); 6] = [
    ("Facebook", "FB"),
    ("Apple", "AAPL"),
    ("Amazon", "AMZN"),
    ("Netflix", "NFLX"),
    ("Google", "GOOG"),
    ("Vanguard index FAANG", "VUG"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyDirectory;

impl CompanyDirectory {
    pub fn len(&self) -> usize {
        COMPANIES.len()
    }

    pub fn is_empty(&self) -> bool {
        COMPANIES.is_empty()
    }

    pub fn name_at(&self, index: usize) -> Option<&'static str> {
        COMPANIES.get(index).map(|(name, _)| *name)
    }

    pub fn symbol_at(&self, index: usize) -> Option<&'static str> {
        COMPANIES.get(index).map(|(_, symbol)| *symbol)
    }

    /// Resolve a user-supplied argument against the directory, matching the
    /// display name or the ticker symbol case-insensitively.
    pub fn resolve(&self, query: &str) -> Option<&'static str> {
        let query = query.trim();
        COMPANIES
            .iter()
            .find(|(name, symbol)| {
                name.eq_ignore_ascii_case(query) || symbol.eq_ignore_ascii_case(query)
            })
            .map(|(_, symbol)| *symbol)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        COMPANIES.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_six_companies_in_fixed_order() {
        let directory = CompanyDirectory;
        assert_eq!(directory.len(), 6);
        assert_eq!(directory.name_at(0), Some("Facebook"));
        assert_eq!(directory.symbol_at(0), Some("FB"));
        assert_eq!(directory.name_at(5), Some("Vanguard index FAANG"));
        assert_eq!(directory.symbol_at(5), Some("VUG"));
        assert_eq!(directory.name_at(6), None);
    }

    #[test]
    fn resolves_by_name_or_symbol() {
        let directory = CompanyDirectory;
        assert_eq!(directory.resolve("apple"), Some("AAPL"));
        assert_eq!(directory.resolve("nflx"), Some("NFLX"));
        assert_eq!(directory.resolve(" Google "), Some("GOOG"));
        assert_eq!(directory.resolve("Tesla"), None);
    }
}
