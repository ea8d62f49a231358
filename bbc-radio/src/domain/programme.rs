//! Programme record.

use std::fmt;
use std::str::FromStr;

/// The six fields a [`Programme`] carries, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammeField {
    StartDate,
    SeriesName,
    Name,
    Description,
    Identifier,
    Url,
}

impl ProgrammeField {
    /// All fields, in canonical order.
    pub const ALL: [ProgrammeField; 6] = [
        ProgrammeField::StartDate,
        ProgrammeField::SeriesName,
        ProgrammeField::Name,
        ProgrammeField::Description,
        ProgrammeField::Identifier,
        ProgrammeField::Url,
    ];

    /// The key used for this field in keyed construction.
    pub fn key(self) -> &'static str {
        match self {
            ProgrammeField::StartDate => "start_date",
            ProgrammeField::SeriesName => "series_name",
            ProgrammeField::Name => "name",
            ProgrammeField::Description => "description",
            ProgrammeField::Identifier => "identifier",
            ProgrammeField::Url => "url",
        }
    }
}

impl fmt::Display for ProgrammeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a key is not one of the six programme fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown programme field: {0}")]
pub struct UnknownField(String);

impl FromStr for ProgrammeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProgrammeField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A single broadcast item on a schedule.
///
/// Every field is optional: `None` means the source had no data for it,
/// which is distinct from `Some("")`. Equality is structural over the six
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Programme {
    start_date: Option<String>,
    series_name: Option<String>,
    name: Option<String>,
    description: Option<String>,
    identifier: Option<String>,
    url: Option<String>,
}

impl Programme {
    /// Start a builder with every field absent.
    pub fn builder() -> ProgrammeBuilder {
        ProgrammeBuilder::default()
    }

    /// Build a programme from `(key, value)` pairs.
    ///
    /// Only the six keys named by [`ProgrammeField::key`] are recognised;
    /// any other key is ignored. A repeated key keeps its last value.
    ///
    /// ```
    /// use bbc_radio::domain::Programme;
    ///
    /// let programme = Programme::from_fields([
    ///     ("name", "Vintage Culture"),
    ///     ("identifier", "m000rcdj"),
    ///     ("presenter", "ignored"),
    /// ]);
    /// assert_eq!(programme.name(), Some("Vintage Culture"));
    /// assert_eq!(programme.series_name(), None);
    /// ```
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut builder = ProgrammeBuilder::default();
        for (key, value) in fields {
            if let Ok(field) = key.as_ref().parse::<ProgrammeField>() {
                builder = builder.set(field, value);
            }
        }
        builder.build()
    }

    /// Start timestamp, ISO-8601 with offset (e.g. `2021-01-23T00:00:00+00:00`).
    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    pub fn series_name(&self) -> Option<&str> {
        self.series_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Broadcaster-assigned programme identifier (a PID such as `m000rcdj`).
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Look up a field by name.
    pub fn get(&self, field: ProgrammeField) -> Option<&str> {
        match field {
            ProgrammeField::StartDate => self.start_date(),
            ProgrammeField::SeriesName => self.series_name(),
            ProgrammeField::Name => self.name(),
            ProgrammeField::Description => self.description(),
            ProgrammeField::Identifier => self.identifier(),
            ProgrammeField::Url => self.url(),
        }
    }

    /// All six fields in canonical order.
    pub fn fields(&self) -> [(ProgrammeField, Option<&str>); 6] {
        ProgrammeField::ALL.map(|field| (field, self.get(field)))
    }
}

/// Builder for [`Programme`].
#[derive(Debug, Clone, Default)]
pub struct ProgrammeBuilder {
    inner: Programme,
}

impl ProgrammeBuilder {
    /// Set a field by name.
    pub fn set(mut self, field: ProgrammeField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ProgrammeField::StartDate => self.inner.start_date = value,
            ProgrammeField::SeriesName => self.inner.series_name = value,
            ProgrammeField::Name => self.inner.name = value,
            ProgrammeField::Description => self.inner.description = value,
            ProgrammeField::Identifier => self.inner.identifier = value,
            ProgrammeField::Url => self.inner.url = value,
        }
        self
    }

    /// Set a field only when a value is present.
    pub fn set_opt(self, field: ProgrammeField, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(field, value),
            None => self,
        }
    }

    pub fn start_date(self, value: impl Into<String>) -> Self {
        self.set(ProgrammeField::StartDate, value)
    }

    pub fn series_name(self, value: impl Into<String>) -> Self {
        self.set(ProgrammeField::SeriesName, value)
    }

    pub fn name(self, value: impl Into<String>) -> Self {
        self.set(ProgrammeField::Name, value)
    }

    pub fn description(self, value: impl Into<String>) -> Self {
        self.set(ProgrammeField::Description, value)
    }

    pub fn identifier(self, value: impl Into<String>) -> Self {
        self.set(ProgrammeField::Identifier, value)
    }

    pub fn url(self, value: impl Into<String>) -> Self {
        self.set(ProgrammeField::Url, value)
    }

    pub fn build(self) -> Programme {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wind_down() -> [(&'static str, &'static str); 6] {
        [
            ("start_date", "2021-01-24T05:00:00+00:00"),
            ("series_name", "Radio 1's Wind Down Presents..."),
            ("name", "Integral: Emma G & MC Tali"),
            (
                "description",
                "Integral's Emma G & MC Tali provide the Wind Down Mix.",
            ),
            ("identifier", "m000qkz2"),
            ("url", "https://www.bbc.co.uk/programmes/m000qkz2"),
        ]
    }

    #[test]
    fn default_is_all_absent() {
        let programme = Programme::builder().build();
        for (_, value) in programme.fields() {
            assert_eq!(value, None);
        }
    }

    #[test]
    fn from_fields_with_all_values() {
        let programme = Programme::from_fields(wind_down());

        let expected = Programme::builder()
            .start_date("2021-01-24T05:00:00+00:00")
            .series_name("Radio 1's Wind Down Presents...")
            .name("Integral: Emma G & MC Tali")
            .description("Integral's Emma G & MC Tali provide the Wind Down Mix.")
            .identifier("m000qkz2")
            .url("https://www.bbc.co.uk/programmes/m000qkz2")
            .build();

        assert_eq!(programme, expected);
    }

    #[test]
    fn from_fields_ignores_unknown_keys() {
        let mut with_extra = wind_down().to_vec();
        with_extra.push(("nonhandled_info", "Some unnecessary information"));

        assert_eq!(
            Programme::from_fields(with_extra),
            Programme::from_fields(wind_down())
        );
    }

    #[test]
    fn empty_string_is_not_absent() {
        let programme = Programme::builder().description("").build();
        assert_eq!(programme.description(), Some(""));
        assert_ne!(programme, Programme::builder().build());
    }

    #[test]
    fn set_opt_skips_none() {
        let programme = Programme::builder()
            .set_opt(ProgrammeField::Name, Some("Four Tet 2010"))
            .set_opt(ProgrammeField::SeriesName, None::<String>)
            .build();
        assert_eq!(programme.name(), Some("Four Tet 2010"));
        assert_eq!(programme.series_name(), None);
    }

    #[test]
    fn fields_in_canonical_order() {
        let programme = Programme::from_fields(wind_down());
        let keys: Vec<_> = programme.fields().iter().map(|(f, _)| f.key()).collect();
        assert_eq!(
            keys,
            vec!["start_date", "series_name", "name", "description", "identifier", "url"]
        );
        assert_eq!(programme.fields()[4], (ProgrammeField::Identifier, Some("m000qkz2")));
    }

    #[test]
    fn parse_field_names() {
        for field in ProgrammeField::ALL {
            assert_eq!(field.key().parse::<ProgrammeField>(), Ok(field));
        }
        assert_eq!(
            "presenter".parse::<ProgrammeField>(),
            Err(UnknownField("presenter".to_string()))
        );
    }
}
