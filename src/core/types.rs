use serde::Serialize;
use std::fmt;

/// How a method authenticates against the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    /// Unsigned, read-only call
    None,
    /// Needs a session key (`sk`) and a signature
    Required,
    /// Signed, but used to obtain the session key in the first place
    SessionBootstrap,
}

impl AuthMode {
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Required | Self::SessionBootstrap)
    }

    pub const fn needs_session(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Default value of an optional parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamDefault {
    /// Left out of the request unless supplied
    Absent,
    /// Sent with this literal value unless overridden
    Value(&'static str),
    /// The configured username, read when the request is built
    Username,
}

impl ParamDefault {
    /// Resolve against the current username; empty usernames count as absent.
    pub fn resolve(self, username: &str) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Value(value) => Some(value.to_string()),
            Self::Username if username.is_empty() => None,
            Self::Username => Some(username.to_string()),
        }
    }
}

/// Static description of one remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub group: &'static str,
    pub name: &'static str,
    pub auth: AuthMode,
    /// Positional parameters, in call order
    pub required: &'static [&'static str],
    /// Keyword parameters with their defaults, in declaration order
    pub optional: &'static [(&'static str, ParamDefault)],
    /// One selector per record field
    pub selectors: &'static [&'static str],
}

impl MethodDescriptor {
    /// Wire identifier, e.g. `artist.getInfo`
    pub fn id(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }

    pub fn is(&self, group: &str, name: &str) -> bool {
        self.group == group && self.name == name
    }

    pub fn optional_names(&self) -> impl Iterator<Item = &'static str> {
        let optional: &'static [(&'static str, ParamDefault)] = self.optional;
        optional.iter().map(|(name, _)| *name)
    }

    pub fn accepts_keyword(&self, key: &str) -> bool {
        self.optional_names().any(|name| name == key)
    }

    /// Field labels for records produced by this method
    pub fn labels(&self) -> Vec<String> {
        self.selectors.iter().map(|s| field_label(s)).collect()
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Label for a selector: `>` becomes `_`, whitespace is dropped.
///
/// `"artist > name"` gives `"artist_name"`, `"track name"` gives `"trackname"`.
pub fn field_label(selector: &str) -> String {
    selector
        .replace('>', "_")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Ordered request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries with this key
    pub fn count(&self, key: &str) -> usize {
        self.entries.iter().filter(|(k, _)| k == key).count()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Stable sort by key, byte-wise lexicographic
    pub fn sort_by_key(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        sorted.sort_by_key();
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One result row: a field per selector, in selector order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// First field; the whole value for single-selector methods
    pub fn value(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    /// Pair each field with the label of the selector it came from
    pub fn labeled(&self, descriptor: &MethodDescriptor) -> Vec<(String, &str)> {
        descriptor
            .labels()
            .into_iter()
            .zip(self.0.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH: MethodDescriptor = MethodDescriptor {
        group: "artist",
        name: "search",
        auth: AuthMode::None,
        required: &["artist"],
        optional: &[("limit", ParamDefault::Absent)],
        selectors: &["artistmatches > artist > name", "artist listeners"],
    };

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("artist > name"), "artist_name");
        assert_eq!(field_label("track name"), "trackname");
        assert_eq!(field_label("a>b > c"), "a_b_c");
    }

    #[test]
    fn test_descriptor_id_and_keywords() {
        assert_eq!(SEARCH.id(), "artist.search");
        assert_eq!(SEARCH.to_string(), "artist.search");
        assert!(SEARCH.accepts_keyword("limit"));
        assert!(!SEARCH.accepts_keyword("artist"));
        assert_eq!(
            SEARCH.labels(),
            vec!["artistmatches_artist_name", "artistlisteners"]
        );
    }

    #[test]
    fn test_param_default_resolution() {
        assert_eq!(ParamDefault::Absent.resolve("rj"), None);
        assert_eq!(ParamDefault::Value("1").resolve("rj"), Some("1".to_string()));
        assert_eq!(ParamDefault::Username.resolve("rj"), Some("rj".to_string()));
        assert_eq!(ParamDefault::Username.resolve(""), None);
    }

    #[test]
    fn test_parameter_set_sort_is_bytewise() {
        let mut params: ParameterSet = [("method", "m"), ("api_key", "k"), ("Zed", "z"), ("foo", "bar")]
            .into_iter()
            .collect();
        params.sort_by_key();
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["Zed", "api_key", "foo", "method"]
        );
        assert_eq!(params.get("foo"), Some("bar"));
        assert_eq!(params.count("foo"), 1);
    }

    #[test]
    fn test_record_labeled() {
        let record = Record::new(vec!["Cher".to_string(), "1000".to_string()]);
        let labeled = record.labeled(&SEARCH);
        assert_eq!(labeled[0], ("artistmatches_artist_name".to_string(), "Cher"));
        assert_eq!(labeled[1], ("artistlisteners".to_string(), "1000"));
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"["Cher","1000"]"#);
    }
}
