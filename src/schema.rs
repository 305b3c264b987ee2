//! Target table schemas and report column layouts
//!
//! A [`TableSchema`] names the table, the ordered SQL column list, and the
//! [`ColumnMap`] telling the interpreter where each field sits in the sheet.
//! Two presets cover the report template in use today; anything else can be
//! supplied as a YAML file.
//!
//! ```yaml
//! table: mis_reports
//! created_by: system
//! columns: [no, particular, ref, units, previous_month, during_month_increased,
//!           during_month_decreased, report_month, branch_name]
//! layout:
//!   no: 0
//!   particular: 1
//!   reference: 5
//!   units: 6
//!   previous_month: 7
//!   increased: 8
//!   decreased: 9
//! ```

use crate::error::{MisError, MisResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default table for both presets
pub const DEFAULT_TABLE: &str = "mis_reports";

/// Audit author written by schemas with a `created_by` column
pub const DEFAULT_CREATED_BY: &str = "system";

//==============================================================================
// Sheet layout
//==============================================================================

/// Zero-based column index (A = 0) of every field read from the report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub no: usize,
    pub particular: usize,
    /// Secondary label appended to the particular as `"<particular> - <label>"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<usize>,
    pub reference: usize,
    pub units: usize,
    pub previous_month: usize,
    pub increased: usize,
    pub decreased: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub this_month: Option<usize>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            no: 0,
            particular: 1,
            sub_label: None,
            reference: 5,
            units: 6,
            previous_month: 7,
            increased: 8,
            decreased: 9,
            this_month: None,
        }
    }
}

impl ColumnMap {
    /// Layout of the extended template: sub-category labels in column D and a
    /// closing balance in column K.
    pub fn extended() -> Self {
        Self {
            sub_label: Some(3),
            this_month: Some(10),
            ..Self::default()
        }
    }
}

//==============================================================================
// SQL columns
//==============================================================================

/// A column of the target table and where its value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlColumn {
    #[serde(rename = "no")]
    No,
    #[serde(rename = "particular")]
    Particular,
    #[serde(rename = "ref")]
    Ref,
    #[serde(rename = "units")]
    Units,
    #[serde(rename = "previous_month")]
    PreviousMonth,
    #[serde(rename = "during_month_increased")]
    Increased,
    #[serde(rename = "during_month_decreased")]
    Decreased,
    #[serde(rename = "this_month")]
    ThisMonth,
    #[serde(rename = "report_month")]
    ReportMonth,
    #[serde(rename = "branch_name")]
    BranchName,
    #[serde(rename = "office_id")]
    OfficeId,
    #[serde(rename = "created_by")]
    CreatedBy,
}

impl SqlColumn {
    pub fn name(&self) -> &'static str {
        match self {
            SqlColumn::No => "no",
            SqlColumn::Particular => "particular",
            SqlColumn::Ref => "ref",
            SqlColumn::Units => "units",
            SqlColumn::PreviousMonth => "previous_month",
            SqlColumn::Increased => "during_month_increased",
            SqlColumn::Decreased => "during_month_decreased",
            SqlColumn::ThisMonth => "this_month",
            SqlColumn::ReportMonth => "report_month",
            SqlColumn::BranchName => "branch_name",
            SqlColumn::OfficeId => "office_id",
            SqlColumn::CreatedBy => "created_by",
        }
    }
}

impl fmt::Display for SqlColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==============================================================================
// Table schema
//==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<SqlColumn>,
    #[serde(default = "default_created_by")]
    pub created_by: String,
    #[serde(default)]
    pub layout: ColumnMap,
}

fn default_created_by() -> String {
    DEFAULT_CREATED_BY.to_string()
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::branch()
    }
}

impl TableSchema {
    /// Names accepted by [`TableSchema::preset`]
    pub const PRESETS: [&'static str; 2] = ["branch", "office"];

    /// Rows keyed by report month and branch name, no office linkage.
    pub fn branch() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            columns: vec![
                SqlColumn::No,
                SqlColumn::Particular,
                SqlColumn::Ref,
                SqlColumn::Units,
                SqlColumn::PreviousMonth,
                SqlColumn::Increased,
                SqlColumn::Decreased,
                SqlColumn::ReportMonth,
                SqlColumn::BranchName,
            ],
            created_by: default_created_by(),
            layout: ColumnMap::default(),
        }
    }

    /// Rows keyed by office ID with an audit author and closing balance.
    pub fn office() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            columns: vec![
                SqlColumn::No,
                SqlColumn::Particular,
                SqlColumn::Ref,
                SqlColumn::Units,
                SqlColumn::PreviousMonth,
                SqlColumn::Increased,
                SqlColumn::Decreased,
                SqlColumn::ThisMonth,
                SqlColumn::ReportMonth,
                SqlColumn::OfficeId,
                SqlColumn::CreatedBy,
            ],
            created_by: default_created_by(),
            layout: ColumnMap::extended(),
        }
    }

    pub fn preset(name: &str) -> MisResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "branch" => Ok(Self::branch()),
            "office" => Ok(Self::office()),
            other => Err(MisError::Config(format!(
                "Unknown schema '{}'. Available schemas: {}",
                other,
                Self::PRESETS.join(", ")
            ))),
        }
    }

    pub fn from_yaml_str(content: &str) -> MisResult<Self> {
        let schema: TableSchema = serde_yaml::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn from_yaml_file(path: &Path) -> MisResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MisError::Config(format!(
                "Failed to read schema file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Resolve the active schema: a config file wins over a preset name,
    /// and the `branch` preset is the fallback.
    pub fn resolve(config: Option<&Path>, preset: Option<&str>) -> MisResult<Self> {
        match (config, preset) {
            (Some(path), _) => Self::from_yaml_file(path),
            (None, Some(name)) => Self::preset(name),
            (None, None) => Ok(Self::branch()),
        }
    }

    pub fn to_yaml(&self) -> MisResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> MisResult<()> {
        if self.table.trim().is_empty() {
            return Err(MisError::Config("Schema table name is empty".to_string()));
        }
        if self.columns.is_empty() {
            return Err(MisError::Config(format!(
                "Schema for table '{}' has no columns",
                self.table
            )));
        }
        if self.columns.contains(&SqlColumn::ThisMonth) && self.layout.this_month.is_none() {
            return Err(MisError::Config(
                "Column 'this_month' requires 'layout.this_month' to be set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn requires_office_id(&self) -> bool {
        self.columns.contains(&SqlColumn::OfficeId)
    }

    /// Comma-separated column list for the `INSERT` header
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(SqlColumn::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_preset_columns() {
        let schema = TableSchema::branch();
        assert_eq!(
            schema.column_list(),
            "no, particular, ref, units, previous_month, during_month_increased, during_month_decreased, report_month, branch_name"
        );
        assert!(!schema.requires_office_id());
        assert_eq!(schema.layout, ColumnMap::default());
    }

    #[test]
    fn test_office_preset_columns() {
        let schema = TableSchema::office();
        assert!(schema.requires_office_id());
        assert!(schema.columns.contains(&SqlColumn::CreatedBy));
        assert!(!schema.columns.contains(&SqlColumn::BranchName));
        assert_eq!(schema.layout.this_month, Some(10));
        assert_eq!(schema.layout.sub_label, Some(3));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(TableSchema::preset(" Office ").unwrap(), TableSchema::office());
        let err = TableSchema::preset("ledger").unwrap_err();
        assert!(err.to_string().contains("Unknown schema 'ledger'"));
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let yaml = r#"
table: branch_reports
columns: [no, particular, ref, report_month, branch_name]
"#;
        let schema = TableSchema::from_yaml_str(yaml).unwrap();
        assert_eq!(schema.table, "branch_reports");
        assert_eq!(schema.created_by, DEFAULT_CREATED_BY);
        assert_eq!(schema.layout, ColumnMap::default());
        assert_eq!(
            schema.column_list(),
            "no, particular, ref, report_month, branch_name"
        );
    }

    #[test]
    fn test_from_yaml_custom_layout() {
        let yaml = r#"
table: mis_reports
columns: [no, particular, this_month, office_id]
layout:
  no: 1
  particular: 2
  reference: 4
  units: 5
  previous_month: 6
  increased: 7
  decreased: 8
  this_month: 9
"#;
        let schema = TableSchema::from_yaml_str(yaml).unwrap();
        assert_eq!(schema.layout.no, 1);
        assert_eq!(schema.layout.this_month, Some(9));
        assert_eq!(schema.layout.sub_label, None);
    }

    #[test]
    fn test_validate_rejects_this_month_without_layout() {
        let yaml = "table: t\ncolumns: [no, this_month]\n";
        let err = TableSchema::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, MisError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_table_and_columns() {
        assert!(TableSchema::from_yaml_str("table: ' '\ncolumns: [no]\n").is_err());
        assert!(TableSchema::from_yaml_str("table: t\ncolumns: []\n").is_err());
    }

    #[test]
    fn test_unknown_column_is_yaml_error() {
        let err = TableSchema::from_yaml_str("table: t\ncolumns: [nope]\n").unwrap_err();
        assert!(matches!(err, MisError::Yaml(_)));
    }

    #[test]
    fn test_yaml_round_trip_of_preset() {
        let yaml = TableSchema::office().to_yaml().unwrap();
        assert!(yaml.contains("office_id"));
        assert_eq!(TableSchema::from_yaml_str(&yaml).unwrap(), TableSchema::office());
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(TableSchema::resolve(None, None).unwrap(), TableSchema::branch());
        assert_eq!(
            TableSchema::resolve(None, Some("office")).unwrap(),
            TableSchema::office()
        );
        let err = TableSchema::resolve(Some(Path::new("/nonexistent/schema.yaml")), Some("office"))
            .unwrap_err();
        assert!(matches!(err, MisError::Config(_)));
    }
}
