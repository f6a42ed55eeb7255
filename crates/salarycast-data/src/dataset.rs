//! Loading of the cleaned salary dataset.
//!
//! The dataset is an externally produced CSV (one row per reported salary)
//! consumed read-only by the analysis pages. Loading is tolerant: rows that
//! fail to parse are skipped with a warning rather than failing the load.

use crate::error::{DataError, DataResult};
use salarycast_core::input::{CompanySize, CountryCode, ExperienceLevel};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Columns the dataset must carry.
const REQUIRED_COLUMNS: [&str; 9] = [
    "work_year",
    "experience_level",
    "employment_type",
    "job_title",
    "salary_in_usd",
    "employee_residence",
    "remote_ratio",
    "company_location",
    "company_size",
];

/// One reported salary from the cleaned dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRecord {
    /// Year the salary was reported for.
    pub work_year: u16,

    /// Seniority of the role.
    pub experience_level: ExperienceLevel,

    /// Employment-type wire code (kept raw; not all dataset rows use the
    /// four canonical codes).
    pub employment_type: String,

    /// Job title as reported.
    pub job_title: String,

    /// Annual salary in USD.
    pub salary_in_usd: f64,

    /// Country the employee lives in.
    pub employee_residence: CountryCode,

    /// Remote percentage as reported (0, 50 or 100 in the cleaned data).
    pub remote_ratio: u32,

    /// Country the employer operates from.
    pub company_location: CountryCode,

    /// Headcount band of the employer.
    pub company_size: CompanySize,
}

/// The cleaned salary dataset, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    records: Vec<SalaryRecord>,
}

impl SalaryDataset {
    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a CSV file.
    ///
    /// The header is used to locate columns by name, so column order does
    /// not matter. Rows with the wrong field count or unparseable values are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is empty, or its header
    /// lacks one of the required columns.
    pub fn load(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = lines
            .next()
            .transpose()?
            .ok_or_else(|| DataError::EmptyFile(path.display().to_string()))?;

        let column_index: HashMap<&str, usize> = header
            .split(',')
            .enumerate()
            .map(|(i, name)| (name.trim(), i))
            .collect();

        for required in REQUIRED_COLUMNS {
            if !column_index.contains_key(required) {
                return Err(DataError::MissingColumn(required.to_string()));
            }
        }
        let field_count = column_index.len();
        let col = |name: &str| column_index[name];

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (line_no, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != field_count {
                warn!(line = line_no + 2, "skipping row with wrong field count");
                skipped += 1;
                continue;
            }

            match Self::parse_record(&fields, &col) {
                Some(record) => records.push(record),
                None => {
                    warn!(line = line_no + 2, "skipping unparseable row");
                    skipped += 1;
                }
            }
        }

        info!(
            records = records.len(),
            skipped,
            path = %path.display(),
            "loaded salary dataset"
        );
        Ok(Self { records })
    }

    fn parse_record(fields: &[&str], col: &dyn Fn(&str) -> usize) -> Option<SalaryRecord> {
        let field = |name: &str| fields[col(name)].trim();

        Some(SalaryRecord {
            work_year: field("work_year").parse().ok()?,
            experience_level: field("experience_level").parse().ok()?,
            employment_type: field("employment_type").to_string(),
            job_title: field("job_title").to_string(),
            salary_in_usd: field("salary_in_usd").parse().ok()?,
            employee_residence: field("employee_residence").parse().ok()?,
            remote_ratio: field("remote_ratio").parse().ok()?,
            company_location: field("company_location").parse().ok()?,
            company_size: field("company_size").parse().ok()?,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in file order.
    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// Distinct company locations present in the dataset.
    pub fn distinct_company_locations(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.company_location.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Percentile rank of a salary against the dataset: the fraction of
    /// recorded salaries strictly below it, times 100.
    pub fn salary_percentile(&self, salary_usd: f64) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let below = self
            .records
            .iter()
            .filter(|r| r.salary_in_usd < salary_usd)
            .count();
        below as f64 / self.records.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "work_year,experience_level,employment_type,job_title,salary_in_usd,employee_residence,remote_ratio,company_location,company_size";

    fn write_csv(rows: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean_data.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        (dir, path)
    }

    #[test]
    fn test_load_valid_rows() {
        let (_dir, path) = write_csv(&[
            "2023,SE,FT,Data Scientist,150000,US,100,US,L",
            "2024,EN,FT,Data Analyst,65000,IN,0,IN,M",
        ]);
        let dataset = SalaryDataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.work_year, 2023);
        assert_eq!(first.experience_level, ExperienceLevel::Senior);
        assert_eq!(first.job_title, "Data Scientist");
        assert_eq!(first.salary_in_usd, 150_000.0);
        assert_eq!(first.company_size, CompanySize::Large);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let (_dir, path) = write_csv(&[
            "2023,SE,FT,Data Scientist,150000,US,100,US,L",
            "not,a,valid,row",
            "2023,??,FT,Data Engineer,140000,US,100,US,L",
            "2024,MI,FT,ML Engineer,120000,GB,50,GB,M",
        ]);
        let dataset = SalaryDataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean_data.csv");
        std::fs::write(&path, "work_year,job_title\n2023,Data Scientist\n").unwrap();

        let result = SalaryDataset::load(&path);
        assert!(matches!(result, Err(DataError::MissingColumn(_))));
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean_data.csv");
        std::fs::write(&path, "").unwrap();

        let result = SalaryDataset::load(&path);
        assert!(matches!(result, Err(DataError::EmptyFile(_))));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = SalaryDataset::load("/nonexistent/clean_data.csv");
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_salary_percentile() {
        let (_dir, path) = write_csv(&[
            "2023,SE,FT,A,100000,US,0,US,L",
            "2023,SE,FT,B,200000,US,0,US,L",
            "2023,SE,FT,C,300000,US,0,US,L",
            "2023,SE,FT,D,400000,US,0,US,L",
        ]);
        let dataset = SalaryDataset::load(&path).unwrap();
        assert_eq!(dataset.salary_percentile(250_000.0), 50.0);
        assert_eq!(dataset.salary_percentile(50_000.0), 0.0);
        assert_eq!(dataset.salary_percentile(500_000.0), 100.0);
    }

    #[test]
    fn test_empty_dataset_percentile() {
        let dataset = SalaryDataset::default();
        assert_eq!(dataset.salary_percentile(100_000.0), 0.0);
    }

    #[test]
    fn test_distinct_company_locations() {
        let (_dir, path) = write_csv(&[
            "2023,SE,FT,A,100000,US,0,US,L",
            "2023,SE,FT,B,200000,IN,0,IN,L",
            "2023,SE,FT,C,300000,GB,0,GB,L",
        ]);
        let dataset = SalaryDataset::load(&path).unwrap();
        assert_eq!(dataset.distinct_company_locations(), 3);
    }
}
