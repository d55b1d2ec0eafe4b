use std::collections::HashSet;

/// PackageFilter - the set of package names a tree is restricted to
///
/// Built from the raw comma-separated filter string supplied by the user.
/// Matching is exact and case-sensitive on the package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilter {
    names: HashSet<String>,
}

impl PackageFilter {
    /// Parses a comma-separated list such as `"react, lodash"`.
    ///
    /// Each entry is trimmed and empty entries are dropped. Returns `None`
    /// when the string contains no names at all, meaning "no filtering".
    pub fn parse(raw: &str) -> Option<Self> {
        let names: HashSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    pub fn matches(&self, package_name: &str) -> bool {
        self.names.contains(package_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
