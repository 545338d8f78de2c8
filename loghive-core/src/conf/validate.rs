use crate::analysis::{AnalysisParams, SuspiciousParams};
use crate::conf::error::{ConfigError, InvalidArgument};
use crate::conf::types::{CONFIG_VERSION, InputConfig, JobConfig, JobSpec, Overrides};
use crate::export::{ExportOptions, default_extension};
use crate::record::ReaderOptions;

impl JobSpec {
    /// Layer command-line values over the file settings.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(input) = &overrides.input {
            self.input.path = Some(input.clone());
        }
        if let Some(dir) = &overrides.output_dir {
            self.output.dir = dir.clone();
        }
        if let Some(delimiter) = &overrides.delimiter {
            self.input.delimiter = delimiter.clone();
        }
        if let Some(top_n) = overrides.top_n {
            self.analysis.top_n = top_n;
        }
        if let Some(threshold) = overrides.threshold {
            self.analysis.suspicious_threshold = threshold;
        }
        if let Some(len) = overrides.truncate_len {
            self.analysis.timestamp_truncate_len = len;
        }
        if overrides.skip_header {
            self.input.skip_header = true;
        }
        if overrides.sequential {
            self.analysis.parallel = false;
        }
    }

    /// Check every setting and lower the spec into a [`JobConfig`].
    ///
    /// All problems are collected so the operator sees them in one pass.
    pub fn validate(&self) -> Result<JobConfig, ConfigError> {
        let mut issues = Issues::default();

        if self.version != CONFIG_VERSION {
            issues.push(
                "version",
                format!("must be {CONFIG_VERSION}, got {}", self.version),
            );
        }

        let path = self.input.path.clone();
        if path.is_none() {
            issues.push("input.path", "is required (set it in the job file or pass --input)");
        }
        if self.input.pattern.trim().is_empty() {
            issues.push("input.pattern", "must not be empty");
        }

        let input_delimiter = issues.delimiter("input.delimiter", &self.input.delimiter);
        let output_delimiter = match &self.output.delimiter {
            Some(d) => issues.delimiter("output.delimiter", d),
            None => input_delimiter,
        };

        let top_n = issues.positive("analysis.top_n", self.analysis.top_n);
        let truncate_len = issues.positive(
            "analysis.timestamp_truncate_len",
            self.analysis.timestamp_truncate_len,
        );

        let threshold = match u64::try_from(self.analysis.suspicious_threshold) {
            Ok(t) => t,
            Err(_) => {
                issues.push(
                    "analysis.suspicious_threshold",
                    format!("must not be negative, got {}", self.analysis.suspicious_threshold),
                );
                0
            }
        };

        if self.analysis.suspicious_statuses.is_empty() {
            issues.push("analysis.suspicious_statuses", "must list at least one status");
        }
        let mut failure_statuses = Vec::new();
        for status in &self.analysis.suspicious_statuses {
            match u16::try_from(*status) {
                Ok(s) if (100..=599).contains(&s) => failure_statuses.push(s),
                _ => issues.push(
                    "analysis.suspicious_statuses",
                    format!("{status} is not an HTTP status code"),
                ),
            }
        }

        issues.finish()?;

        let (
            Some(path),
            Some(input_delimiter),
            Some(output_delimiter),
            Some(top_n),
            Some(truncate_len),
        ) = (path, input_delimiter, output_delimiter, top_n, truncate_len)
        else {
            // every None above was recorded as an issue
            return Err(ConfigError::Invalid { issues: Vec::new() });
        };

        Ok(JobConfig {
            input: InputConfig {
                path,
                pattern: self.input.pattern.clone(),
                reader: ReaderOptions {
                    delimiter: input_delimiter,
                    skip_header: self.input.skip_header,
                },
            },
            analysis: AnalysisParams {
                top_n,
                suspicious: SuspiciousParams {
                    failure_statuses,
                    threshold,
                },
                timestamp_truncate_len: truncate_len,
            },
            parallel: self.analysis.parallel,
            export: ExportOptions {
                dir: self.output.dir.clone(),
                delimiter: output_delimiter,
                header: self.output.header,
                extension: default_extension(output_delimiter).to_string(),
            },
            partitions: self.output.partitions,
            max_reported_errors: self.output.max_reported_errors,
        })
    }
}

/// Parse a delimiter setting: one character, or `tab` / `\t` spelled out.
pub fn parse_delimiter(value: &str) -> Option<char> {
    match value {
        "tab" | "\\t" => return Some('\t'),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '\n' && c != '\r' && c != '"' => Some(c),
        _ => None,
    }
}

#[derive(Default)]
struct Issues(Vec<InvalidArgument>);

impl Issues {
    fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.0.push(InvalidArgument {
            field,
            reason: reason.into(),
        });
    }

    fn delimiter(&mut self, field: &'static str, value: &str) -> Option<char> {
        let parsed = parse_delimiter(value);
        if parsed.is_none() {
            self.push(
                field,
                format!("must be a single character or \"tab\", got {value:?}"),
            );
        }
        parsed
    }

    fn positive(&mut self, field: &'static str, value: i64) -> Option<usize> {
        match usize::try_from(value) {
            Ok(v) if v > 0 => Some(v),
            _ => {
                self.push(field, format!("must be greater than zero, got {value}"));
                None
            }
        }
    }

    fn finish(self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid { issues: self.0 })
        }
    }
}
