use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::parse_birth_date;
use crate::shared::api_error::ApiError;
use crate::shared::loose;

// ============================================================================
// Wire shape (GET /records, GET /records/search)
// ============================================================================

/// Maid profile exactly as the backend returns it.
///
/// Every field is optional on the wire; the lenient deserializers keep a bad
/// field from failing the whole list. Use [`super::record::normalize`] before
/// filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaidDto {
    #[serde(default, alias = "_id", deserialize_with = "loose::opt_string")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub name: Option<String>,

    #[serde(default, alias = "nationality", deserialize_with = "loose::opt_string")]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub religion: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub marital_status: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub supplier: Option<String>,

    #[serde(default, deserialize_with = "loose::flag")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "loose::flag")]
    pub is_employed: bool,

    #[serde(default, alias = "dob", deserialize_with = "loose::opt_string")]
    pub date_of_birth: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub height: Option<f64>,

    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub weight: Option<f64>,

    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub salary: Option<f64>,

    #[serde(default, alias = "loan", deserialize_with = "loose::opt_f64")]
    pub loan_amount: Option<f64>,

    #[serde(default, alias = "children", deserialize_with = "loose::opt_f64")]
    pub number_of_children: Option<f64>,

    #[serde(default, deserialize_with = "loose::string_list")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "loose::string_list")]
    pub languages: Vec<String>,

    #[serde(default, rename = "type", deserialize_with = "loose::string_list")]
    pub maid_type: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub photo_url: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_object")]
    pub details: Option<MaidDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaidDetails {
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub education: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub remarks: Option<String>,

    #[serde(default, deserialize_with = "loose::object_list")]
    pub employment_history: Vec<EmploymentRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRecord {
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub employer: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub years: Option<f64>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub duties: Option<String>,
}

// ============================================================================
// Write shape (POST /records, PUT /records/{id})
// ============================================================================

/// Numeric inputs accepted by the form, inclusive.
pub const HEIGHT_LIMITS: (f64, f64) = (50.0, 250.0);
pub const WEIGHT_LIMITS: (f64, f64) = (20.0, 200.0);
pub const SALARY_LIMITS: (f64, f64) = (0.0, 1_000_000.0);
pub const LOAN_LIMITS: (f64, f64) = (0.0, 1_000_000.0);
pub const CHILDREN_LIMITS: (f64, f64) = (0.0, 20.0);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaidWriteDto {
    pub name: String,
    pub country: String,
    pub supplier: String,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub salary: Option<f64>,
    pub loan_amount: Option<f64>,
    pub number_of_children: Option<f64>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    #[serde(rename = "type")]
    pub maid_type: Vec<String>,
    pub is_active: bool,
    pub is_employed: bool,
    pub details: Option<MaidDetails>,
}

impl From<&MaidDto> for MaidWriteDto {
    fn from(dto: &MaidDto) -> Self {
        Self {
            name: dto.name.clone().unwrap_or_default(),
            country: dto.country.clone().unwrap_or_default(),
            supplier: dto.supplier.clone().unwrap_or_default(),
            religion: dto.religion.clone(),
            marital_status: dto.marital_status.clone(),
            date_of_birth: dto
                .date_of_birth
                .as_deref()
                .and_then(parse_birth_date)
                .map(|d| d.format("%Y-%m-%d").to_string()),
            height: dto.height,
            weight: dto.weight,
            salary: dto.salary,
            loan_amount: dto.loan_amount,
            number_of_children: dto.number_of_children,
            skills: dto.skills.clone(),
            languages: dto.languages.clone(),
            maid_type: dto.maid_type.clone(),
            is_active: dto.is_active,
            is_employed: dto.is_employed,
            details: dto.details.clone(),
        }
    }
}

impl MaidWriteDto {
    /// Checks run before any request is built. `today` bounds the birth date.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(invalid("Name is required"));
        }
        if self.country.trim().is_empty() {
            return Err(invalid("Country is required"));
        }
        if self.supplier.trim().is_empty() {
            return Err(invalid("Supplier is required"));
        }

        if let Some(raw) = self.date_of_birth.as_deref().filter(|s| !s.trim().is_empty()) {
            match parse_birth_date(raw) {
                Some(dob) if dob < today => {}
                Some(_) => return Err(invalid("Date of birth must be in the past")),
                None => return Err(invalid("Date of birth is not a valid date")),
            }
        }

        check_limits("Height", self.height, HEIGHT_LIMITS)?;
        check_limits("Weight", self.weight, WEIGHT_LIMITS)?;
        check_limits("Salary", self.salary, SALARY_LIMITS)?;
        check_limits("Loan amount", self.loan_amount, LOAN_LIMITS)?;
        check_limits("Number of children", self.number_of_children, CHILDREN_LIMITS)?;

        if let Some(children) = self.number_of_children {
            if children.fract() != 0.0 {
                return Err(invalid("Number of children must be a whole number"));
            }
        }
        Ok(())
    }

    /// Trim text fields and drop empty list entries before sending.
    pub fn normalized(mut self) -> Self {
        fn clean(list: Vec<String>) -> Vec<String> {
            list.into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }
        fn clean_opt(value: Option<String>) -> Option<String> {
            value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }

        self.name = self.name.trim().to_string();
        self.country = self.country.trim().to_string();
        self.supplier = self.supplier.trim().to_string();
        self.religion = clean_opt(self.religion);
        self.marital_status = clean_opt(self.marital_status);
        self.date_of_birth = clean_opt(self.date_of_birth);
        self.skills = clean(self.skills);
        self.languages = clean(self.languages);
        self.maid_type = clean(self.maid_type);
        self
    }
}

fn invalid(msg: &str) -> ApiError {
    ApiError::Validation(msg.to_string())
}

fn check_limits(label: &str, value: Option<f64>, (lo, hi): (f64, f64)) -> Result<(), ApiError> {
    match value {
        Some(v) if !v.is_finite() || v < lo || v > hi => Err(ApiError::Validation(format!(
            "{} must be between {} and {}",
            label, lo, hi
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_form() -> MaidWriteDto {
        MaidWriteDto {
            name: "Maria Santos".into(),
            country: "Philippines".into(),
            supplier: "Agency A".into(),
            date_of_birth: Some("1990-02-14".into()),
            height: Some(155.0),
            number_of_children: Some(2.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_loose_record() {
        let json = r#"{
            "_id": "64f0c1",
            "name": "Maria",
            "nationality": "Filipino",
            "isActive": "true",
            "isEmployed": false,
            "dateOfBirth": "1995-05-20T00:00:00.000Z",
            "height": "155",
            "salary": 600,
            "loan": "",
            "skills": "Cooking, Cleaning",
            "type": ["Transfer"],
            "details": { "employmentHistory": [ { "country": "Singapore", "years": "2" } ] }
        }"#;
        let dto: MaidDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id.as_deref(), Some("64f0c1"));
        assert_eq!(dto.country.as_deref(), Some("Filipino"));
        assert!(dto.is_active);
        assert_eq!(dto.height, Some(155.0));
        assert_eq!(dto.loan_amount, None);
        assert_eq!(dto.skills, vec!["Cooking", "Cleaning"]);
        assert_eq!(dto.maid_type, vec!["Transfer"]);
        assert!(dto.languages.is_empty());
        let details = dto.details.unwrap();
        assert_eq!(details.employment_history[0].years, Some(2.0));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(today()), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let mut form = valid_form();
        form.name = "  ".into();
        assert_eq!(
            form.validate(today()),
            Err(ApiError::Validation("Name is required".into()))
        );

        let mut form = valid_form();
        form.country.clear();
        assert!(matches!(form.validate(today()), Err(ApiError::Validation(_))));

        let mut form = valid_form();
        form.supplier.clear();
        assert_eq!(
            form.validate(today()),
            Err(ApiError::Validation("Supplier is required".into()))
        );
    }

    #[test]
    fn test_out_of_range_numbers() {
        let mut form = valid_form();
        form.height = Some(400.0);
        assert_eq!(
            form.validate(today()),
            Err(ApiError::Validation("Height must be between 50 and 250".into()))
        );

        let mut form = valid_form();
        form.salary = Some(-1.0);
        assert!(form.validate(today()).is_err());

        let mut form = valid_form();
        form.number_of_children = Some(1.5);
        assert!(form.validate(today()).is_err());
    }

    #[test]
    fn test_birth_date_checks() {
        let mut form = valid_form();
        form.date_of_birth = Some("2030-01-01".into());
        assert!(form.validate(today()).is_err());

        form.date_of_birth = Some("not a date".into());
        assert!(form.validate(today()).is_err());

        form.date_of_birth = Some("   ".into());
        assert_eq!(form.validate(today()), Ok(()));
    }

    #[test]
    fn test_write_dto_from_record_and_normalize() {
        let dto = MaidDto {
            name: Some("Ana".into()),
            country: Some("Indonesia".into()),
            date_of_birth: Some("1992-03-04T10:00:00Z".into()),
            skills: vec!["Cooking".into()],
            ..Default::default()
        };
        let form = MaidWriteDto::from(&dto);
        assert_eq!(form.date_of_birth.as_deref(), Some("1992-03-04"));
        assert_eq!(form.supplier, "");

        let cleaned = MaidWriteDto {
            name: " Ana ".into(),
            religion: Some("  ".into()),
            skills: vec![" Baking ".into(), "".into()],
            ..form
        }
        .normalized();
        assert_eq!(cleaned.name, "Ana");
        assert_eq!(cleaned.religion, None);
        assert_eq!(cleaned.skills, vec!["Baking"]);
    }

    #[test]
    fn test_write_dto_wire_names() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert!(json.get("dateOfBirth").is_some());
        assert!(json.get("numberOfChildren").is_some());
        assert!(json.get("type").is_some());
        assert!(json.get("isEmployed").is_some());
    }
}
