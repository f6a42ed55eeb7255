//! Raw input domain types for salary prediction.
//!
//! These types describe one prediction's worth of user-supplied job
//! attributes. The closed categorical enums carry the fixed ordinal
//! encodings the consumed model was trained against, so the mapping here is
//! part of the artifact contract, not a presentation detail.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seniority of the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// Entry level (EN).
    #[serde(rename = "EN")]
    Entry,
    /// Mid level (MI).
    #[serde(rename = "MI")]
    Mid,
    /// Senior (SE).
    #[serde(rename = "SE")]
    Senior,
    /// Executive (EX).
    #[serde(rename = "EX")]
    Executive,
}

impl ExperienceLevel {
    /// All levels in ordinal order.
    pub fn all() -> &'static [ExperienceLevel] {
        &[Self::Entry, Self::Mid, Self::Senior, Self::Executive]
    }

    /// The ordinal encoding used at training time (EN=1 .. EX=4).
    pub fn ordinal(&self) -> u32 {
        match self {
            Self::Entry => 1,
            Self::Mid => 2,
            Self::Senior => 3,
            Self::Executive => 4,
        }
    }

    /// The two-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Entry => "EN",
            Self::Mid => "MI",
            Self::Senior => "SE",
            Self::Executive => "EX",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "EN" => Ok(Self::Entry),
            "MI" => Ok(Self::Mid),
            "SE" => Ok(Self::Senior),
            "EX" => Ok(Self::Executive),
            other => Err(CoreError::InvalidExperienceLevel(other.to_string())),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Contract form of the engagement.
///
/// Canonical ordinal mapping: PT=1, FL=2, CT=3, FT=4. The three upstream
/// application variants disagreed on this ordering; the exported model
/// artifacts are required to match this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Part-time (PT).
    #[serde(rename = "PT")]
    PartTime,
    /// Freelance (FL).
    #[serde(rename = "FL")]
    Freelance,
    /// Contract (CT).
    #[serde(rename = "CT")]
    Contract,
    /// Full-time (FT).
    #[serde(rename = "FT")]
    FullTime,
}

impl EmploymentType {
    /// All employment types in ordinal order.
    pub fn all() -> &'static [EmploymentType] {
        &[Self::PartTime, Self::Freelance, Self::Contract, Self::FullTime]
    }

    /// The ordinal encoding used at training time (PT=1, FL=2, CT=3, FT=4).
    pub fn ordinal(&self) -> u32 {
        match self {
            Self::PartTime => 1,
            Self::Freelance => 2,
            Self::Contract => 3,
            Self::FullTime => 4,
        }
    }

    /// The two-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PartTime => "PT",
            Self::Freelance => "FL",
            Self::Contract => "CT",
            Self::FullTime => "FT",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "PT" => Ok(Self::PartTime),
            "FL" => Ok(Self::Freelance),
            "CT" => Ok(Self::Contract),
            "FT" => Ok(Self::FullTime),
            other => Err(CoreError::InvalidEmploymentType(other.to_string())),
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Headcount band of the employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    /// Fewer than 50 employees (S).
    #[serde(rename = "S")]
    Small,
    /// 50-250 employees (M).
    #[serde(rename = "M")]
    Medium,
    /// More than 250 employees (L).
    #[serde(rename = "L")]
    Large,
}

impl CompanySize {
    /// All sizes in ordinal order.
    pub fn all() -> &'static [CompanySize] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    /// The ordinal encoding used at training time (S=1, M=2, L=3).
    pub fn ordinal(&self) -> u32 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    /// The one-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

impl FromStr for CompanySize {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "S" => Ok(Self::Small),
            "M" => Ok(Self::Medium),
            "L" => Ok(Self::Large),
            other => Err(CoreError::InvalidCompanySize(other.to_string())),
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Remote-work arrangement, expressed as the percentage worked remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RemoteRatio {
    /// Fully on-site (0%).
    OnSite,
    /// Hybrid (50%).
    Hybrid,
    /// Fully remote (100%).
    Remote,
}

impl RemoteRatio {
    /// Build from a raw percentage. Only 0, 50 and 100 are valid.
    pub fn from_percent(percent: u32) -> CoreResult<Self> {
        match percent {
            0 => Ok(Self::OnSite),
            50 => Ok(Self::Hybrid),
            100 => Ok(Self::Remote),
            other => Err(CoreError::InvalidRemoteRatio(other)),
        }
    }

    /// The raw percentage value.
    pub fn percent(&self) -> u32 {
        match self {
            Self::OnSite => 0,
            Self::Hybrid => 50,
            Self::Remote => 100,
        }
    }

    /// Whether this arrangement is fully remote.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote)
    }

    /// Whether this arrangement is hybrid.
    pub fn is_hybrid(&self) -> bool {
        matches!(self, Self::Hybrid)
    }
}

impl TryFrom<u32> for RemoteRatio {
    type Error = CoreError;

    fn try_from(value: u32) -> CoreResult<Self> {
        Self::from_percent(value)
    }
}

impl From<RemoteRatio> for u32 {
    fn from(ratio: RemoteRatio) -> u32 {
        ratio.percent()
    }
}

impl fmt::Display for RemoteRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percent())
    }
}

/// Validated ISO-2 country code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse and normalize a two-letter country code.
    pub fn new(code: &str) -> CoreResult<Self> {
        let trimmed = code.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(CoreError::InvalidCountryCode(code.to_string()))
        }
    }

    /// The uppercase two-letter code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> String {
        code.0
    }
}

impl FromStr for CountryCode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar year the salary applies to, bounded to the dataset's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct WorkYear(u16);

impl WorkYear {
    /// Earliest supported year.
    pub const MIN: u16 = 2020;

    /// Latest supported year.
    pub const MAX: u16 = 2030;

    /// Validate a year into the supported range.
    pub fn new(year: u16) -> CoreResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(CoreError::YearOutOfRange(year))
        }
    }

    /// The raw year value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for WorkYear {
    type Error = CoreError;

    fn try_from(value: u16) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<WorkYear> for u16 {
    fn from(year: WorkYear) -> u16 {
        year.0
    }
}

impl fmt::Display for WorkYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One prediction's worth of raw job attributes.
///
/// Ephemeral: constructed per interaction, consumed by one encode-predict
/// cycle and then dropped.
///
/// # Example
///
/// ```
/// use salarycast_core::input::{
///     CompanySize, EmploymentType, ExperienceLevel, RawInput, RemoteRatio,
/// };
///
/// let input = RawInput::builder()
///     .experience_level(ExperienceLevel::Senior)
///     .employment_type(EmploymentType::FullTime)
///     .job_title("Data Scientist")
///     .company_size(CompanySize::Large)
///     .company_location("US".parse().unwrap())
///     .employee_residence("IN".parse().unwrap())
///     .remote_ratio(RemoteRatio::Hybrid)
///     .work_year(2024.try_into().unwrap())
///     .build()
///     .unwrap();
///
/// assert!(!input.same_location());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Seniority of the role.
    pub experience_level: ExperienceLevel,

    /// Contract form of the engagement.
    pub employment_type: EmploymentType,

    /// Free-text job title, e.g. "Data Scientist".
    pub job_title: String,

    /// Headcount band of the employer.
    pub company_size: CompanySize,

    /// Country the employer operates from.
    pub company_location: CountryCode,

    /// Country the employee lives in.
    pub employee_residence: CountryCode,

    /// Remote-work arrangement.
    pub remote_ratio: RemoteRatio,

    /// Year the salary applies to.
    pub work_year: WorkYear,
}

impl RawInput {
    /// Create a new builder.
    pub fn builder() -> RawInputBuilder {
        RawInputBuilder::default()
    }

    /// Whether the employee lives in the employer's country.
    pub fn same_location(&self) -> bool {
        self.employee_residence == self.company_location
    }
}

/// Builder for [`RawInput`].
#[derive(Debug, Default)]
pub struct RawInputBuilder {
    experience_level: Option<ExperienceLevel>,
    employment_type: Option<EmploymentType>,
    job_title: Option<String>,
    company_size: Option<CompanySize>,
    company_location: Option<CountryCode>,
    employee_residence: Option<CountryCode>,
    remote_ratio: Option<RemoteRatio>,
    work_year: Option<WorkYear>,
}

impl RawInputBuilder {
    /// Set the experience level.
    pub fn experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    /// Set the employment type.
    pub fn employment_type(mut self, employment: EmploymentType) -> Self {
        self.employment_type = Some(employment);
        self
    }

    /// Set the job title.
    pub fn job_title(mut self, title: impl Into<String>) -> Self {
        self.job_title = Some(title.into());
        self
    }

    /// Set the company size.
    pub fn company_size(mut self, size: CompanySize) -> Self {
        self.company_size = Some(size);
        self
    }

    /// Set the company location.
    pub fn company_location(mut self, location: CountryCode) -> Self {
        self.company_location = Some(location);
        self
    }

    /// Set the employee residence.
    pub fn employee_residence(mut self, residence: CountryCode) -> Self {
        self.employee_residence = Some(residence);
        self
    }

    /// Set the remote ratio.
    pub fn remote_ratio(mut self, ratio: RemoteRatio) -> Self {
        self.remote_ratio = Some(ratio);
        self
    }

    /// Set the work year.
    pub fn work_year(mut self, year: WorkYear) -> Self {
        self.work_year = Some(year);
        self
    }

    /// Validate and build the raw input.
    ///
    /// # Errors
    ///
    /// Returns an error if any field was never set, or if the job title is
    /// empty after trimming.
    pub fn build(self) -> CoreResult<RawInput> {
        let job_title = self
            .job_title
            .ok_or(CoreError::MissingField("job_title"))?
            .trim()
            .to_string();
        if job_title.is_empty() {
            return Err(CoreError::EmptyJobTitle);
        }

        Ok(RawInput {
            experience_level: self
                .experience_level
                .ok_or(CoreError::MissingField("experience_level"))?,
            employment_type: self
                .employment_type
                .ok_or(CoreError::MissingField("employment_type"))?,
            job_title,
            company_size: self
                .company_size
                .ok_or(CoreError::MissingField("company_size"))?,
            company_location: self
                .company_location
                .ok_or(CoreError::MissingField("company_location"))?,
            employee_residence: self
                .employee_residence
                .ok_or(CoreError::MissingField("employee_residence"))?,
            remote_ratio: self
                .remote_ratio
                .ok_or(CoreError::MissingField("remote_ratio"))?,
            work_year: self.work_year.ok_or(CoreError::MissingField("work_year"))?,
        })
    }
}
