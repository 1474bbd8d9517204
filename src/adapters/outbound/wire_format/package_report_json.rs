use crate::package_scoring::domain::{
    Package, PackageReport, PackageScoreInput, ReportDetails, Severity, VulnerabilityCounts,
};
use crate::shared::error::ScoreError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

// Spellings per field, in precedence order: the first non-null key wins.
const PACKAGE_KEYS: &[&str] = &["package", "name", "package_name"];
const VERSION_KEYS: &[&str] = &["version", "package_version"];
const FRESHNESS_KEYS: &[&str] = &["npmsio_score", "freshness_score", "freshnessScore"];
const ALL_DEPS_KEYS: &[&str] = &["all_deps", "all_dep_count", "allDependencyCount", "all-deps"];
const IMMEDIATE_DEPS_KEYS: &[&str] = &[
    "immediate_deps",
    "direct_dep_count",
    "immediateDependencyCount",
    "immediate-deps",
];
const AUTHORS_KEYS: &[&str] = &["authors"];
const CONTRIBUTORS_KEYS: &[&str] = &["contributors"];
const SCORING_DATE_KEYS: &[&str] = &["scoring_date", "scoringDate"];
const RELEASE_DATE_KEYS: &[&str] = &["release_date", "releaseDate"];

/// Package report as served by `/api/v1/package`
///
/// Historical backends disagree on key spelling (`*_score` vs `*_count`,
/// camelCase vs hyphenated, `Moderate` vs `Medium`) and transitional
/// payloads carry several spellings of one field at once. Scalar fields are
/// kept as raw JSON and resolved in [`WirePackageReport::into_domain`]:
/// the first non-null spelling in precedence order wins, so nothing past
/// this adapter sees the drift. Missing or `null` counts are zero. Unknown
/// keys (`id`, `score_code`, `graph_id`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct WirePackageReport {
    /// Nested form: `{"critical": 1, "moderate": 2}`. Entries here override
    /// the flat keys for the severities they name.
    #[serde(default, rename = "directVulnerabilityCounts")]
    direct_vulnerability_counts: Option<HashMap<String, Option<i64>>>,
    #[serde(default, rename = "indirectVulnerabilityCounts")]
    indirect_vulnerability_counts: Option<HashMap<String, Option<i64>>>,

    #[serde(default)]
    dependencies: Option<Vec<WirePackageReport>>,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Parses a report document into the domain model
///
/// # Arguments
/// * `json` - Raw report JSON
/// * `source_name` - File path or URL, for error messages
///
/// # Errors
/// Returns [`ScoreError::ReportParseError`] for malformed JSON or mistyped
/// fields and [`ScoreError::InvalidInput`] for negative counts.
pub fn parse_package_report(json: &str, source_name: &str) -> Result<PackageReport> {
    let wire: WirePackageReport =
        serde_json::from_str(json).map_err(|e| parse_error(source_name, e.to_string()))?;
    wire.into_domain(source_name)
}

/// Flat count keys for one scope and severity, in precedence order:
/// `_score`, `_count`, hyphenated, then the `Moderate` spellings of medium.
fn severity_keys(scope: &str, severity: Severity) -> Vec<String> {
    let mut keys = vec![
        format!("{}Vulns{}_score", scope, severity.capitalized()),
        format!("{}Vulns{}_count", scope, severity.capitalized()),
        format!("{}-vulns-{}", scope, severity.as_str()),
    ];
    if severity == Severity::Medium {
        keys.push(format!("{}VulnsModerate_score", scope));
        keys.push(format!("{}VulnsModerate_count", scope));
        keys.push(format!("{}-vulns-moderate", scope));
    }
    keys
}

impl WirePackageReport {
    /// Normalizes this report and all nested dependency reports
    pub fn into_domain(self, source_name: &str) -> Result<PackageReport> {
        let name = self
            .string_field(source_name, PACKAGE_KEYS)?
            .ok_or_else(|| parse_error(source_name, "missing field `package`".to_string()))?;
        let version = self
            .string_field(source_name, VERSION_KEYS)?
            .ok_or_else(|| parse_error(source_name, "missing field `version`".to_string()))?;
        let package = Package::new(name, version)?;
        let context = package.to_string();

        let direct = self.vulnerability_counts(
            source_name,
            &context,
            "direct",
            self.direct_vulnerability_counts.as_ref(),
        )?;
        let indirect = self.vulnerability_counts(
            source_name,
            &context,
            "indirect",
            self.indirect_vulnerability_counts.as_ref(),
        )?;

        let all_deps = self.count_field(source_name, &context, ALL_DEPS_KEYS)?.unwrap_or(0);
        let freshness = self
            .number_field(source_name, FRESHNESS_KEYS)?
            .unwrap_or(0.0);
        let score_input = PackageScoreInput::new(freshness, all_deps, direct, indirect)
            .map_err(|e| with_context(&context, e))?;

        let details = ReportDetails {
            scoring_date: self.string_field(source_name, SCORING_DATE_KEYS)?,
            release_date: self.string_field(source_name, RELEASE_DATE_KEYS)?,
            authors: self.count_field(source_name, &context, AUTHORS_KEYS)?,
            contributors: self.count_field(source_name, &context, CONTRIBUTORS_KEYS)?,
            immediate_dependency_count: self.count_field(
                source_name,
                &context,
                IMMEDIATE_DEPS_KEYS,
            )?,
        };

        let dependencies = self
            .dependencies
            .unwrap_or_default()
            .into_iter()
            .map(|dependency| dependency.into_domain(source_name))
            .collect::<Result<Vec<_>>>()?;

        Ok(PackageReport::new(package, score_input)
            .with_details(details)
            .with_dependencies(dependencies))
    }

    /// First non-null value among `keys`, with the key it was found under
    fn first<'k, K: AsRef<str>>(&self, keys: &'k [K]) -> Option<(&'k str, &Value)> {
        keys.iter().find_map(|key| {
            let key: &str = key.as_ref();
            match self.fields.get(key) {
                None | Some(Value::Null) => None,
                Some(value) => Some((key, value)),
            }
        })
    }

    fn string_field<K: AsRef<str>>(&self, source_name: &str, keys: &[K]) -> Result<Option<String>> {
        match self.first(keys) {
            None => Ok(None),
            Some((_, Value::String(s))) => Ok(Some(s.clone())),
            Some((key, other)) => Err(type_error(source_name, key, "a string", other)),
        }
    }

    fn number_field<K: AsRef<str>>(&self, source_name: &str, keys: &[K]) -> Result<Option<f64>> {
        match self.first(keys) {
            None => Ok(None),
            Some((key, value)) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| type_error(source_name, key, "a number", value)),
        }
    }

    /// Non-negative integer count; the first key names the field in errors
    fn count_field<K: AsRef<str>>(
        &self,
        source_name: &str,
        context: &str,
        keys: &[K],
    ) -> Result<Option<u64>> {
        let field: &str = keys.first().map_or("", |key| key.as_ref());
        match self.first(keys) {
            None => Ok(None),
            Some((key, value)) => {
                let count = value
                    .as_i64()
                    .ok_or_else(|| type_error(source_name, key, "an integer", value))?;
                non_negative(context, field, Some(count))
            }
        }
    }

    fn vulnerability_counts(
        &self,
        source_name: &str,
        context: &str,
        scope: &str,
        nested: Option<&HashMap<String, Option<i64>>>,
    ) -> Result<VulnerabilityCounts> {
        let mut counts = VulnerabilityCounts::default();
        for severity in Severity::ALL {
            let keys = severity_keys(scope, severity);
            if let Some((key, value)) = self.first(keys.as_slice()) {
                let count = value
                    .as_i64()
                    .ok_or_else(|| type_error(source_name, key, "an integer", value))?;
                // Errors name the logical field, whichever spelling carried it
                let field = format!("{}Vulns{}", scope, severity.capitalized());
                if let Some(count) = non_negative(context, &field, Some(count))? {
                    counts = counts.with(severity, count);
                }
            }
        }

        let Some(nested) = nested else {
            return Ok(counts);
        };

        let mut entries = nested
            .iter()
            .map(|(key, value)| {
                let severity: Severity = key
                    .parse()
                    .map_err(|details: String| parse_error(source_name, details))?;
                let is_alias = key.trim().to_lowercase() != severity.as_str();
                Ok((severity, is_alias, *value))
            })
            .collect::<Result<Vec<_>>>()?;
        // Non-null before null, then `medium` before `moderate`
        entries.sort_by_key(|(severity, is_alias, value)| (*severity, value.is_none(), *is_alias));
        entries.dedup_by_key(|(severity, _, _)| *severity);

        for (severity, _, value) in entries {
            let field = format!("{}Vulns{}", scope, severity.capitalized());
            counts = counts.with(severity, non_negative(context, &field, value)?.unwrap_or(0));
        }

        Ok(counts)
    }
}

fn parse_error(source_name: &str, details: String) -> ScoreError {
    ScoreError::ReportParseError {
        source_name: source_name.to_string(),
        details,
    }
}

fn type_error(source_name: &str, key: &str, expected: &str, found: &Value) -> anyhow::Error {
    parse_error(
        source_name,
        format!("field `{}` must be {}, found {}", key, expected, found),
    )
    .into()
}

fn non_negative(context: &str, field: &str, value: Option<i64>) -> Result<Option<u64>> {
    match value {
        None => Ok(None),
        Some(v) if v < 0 => Err(ScoreError::invalid_input(
            format!("{} ({})", field, context),
            format!("count is negative ({})", v),
        )
        .into()),
        Some(v) => Ok(Some(v as u64)),
    }
}

fn with_context(context: &str, error: ScoreError) -> ScoreError {
    match error {
        ScoreError::InvalidInput { field, reason } => ScoreError::InvalidInput {
            field: format!("{} ({})", field, context),
            reason,
        },
        other => other,
    }
}
