use crate::domain::a001_maid::api;
use crate::shared::notices::Notices;
use crate::system::session::SessionContext;
use chrono::{Local, NaiveDate};
use contracts::domain::a001_maid::{MaidDetails, MaidDto, MaidWriteDto};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Editable form text. Numbers and lists stay strings until submit so a
/// half-typed value never gets rewritten under the cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaidForm {
    pub name: String,
    pub country: String,
    pub supplier: String,
    pub religion: String,
    pub marital_status: String,
    pub date_of_birth: String,
    pub height: String,
    pub weight: String,
    pub salary: String,
    pub loan_amount: String,
    pub number_of_children: String,
    /// comma separated
    pub skills: String,
    pub languages: String,
    pub maid_type: String,
    pub is_active: bool,
    pub is_employed: bool,
    pub details: Option<MaidDetails>,
}

fn number_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_number(label: &str, raw: &str) -> Result<Option<f64>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.replace(',', "")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ApiError::Validation(format!("{} must be a number", label)))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}

fn opt_text(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|s| !s.is_empty())
}

impl MaidForm {
    pub fn from_dto(dto: &MaidDto) -> Self {
        let write = MaidWriteDto::from(dto);
        Self {
            name: write.name,
            country: write.country,
            supplier: write.supplier,
            religion: write.religion.unwrap_or_default(),
            marital_status: write.marital_status.unwrap_or_default(),
            date_of_birth: write.date_of_birth.unwrap_or_default(),
            height: number_text(write.height),
            weight: number_text(write.weight),
            salary: number_text(write.salary),
            loan_amount: number_text(write.loan_amount),
            number_of_children: number_text(write.number_of_children),
            skills: write.skills.join(", "),
            languages: write.languages.join(", "),
            maid_type: write.maid_type.join(", "),
            is_active: write.is_active,
            is_employed: write.is_employed,
            details: write.details,
        }
    }

    /// Parse and validate. Any error here is shown inline and nothing is sent.
    pub fn to_write_dto(&self, today: NaiveDate) -> Result<MaidWriteDto, ApiError> {
        let dto = MaidWriteDto {
            name: self.name.clone(),
            country: self.country.clone(),
            supplier: self.supplier.clone(),
            religion: opt_text(&self.religion),
            marital_status: opt_text(&self.marital_status),
            date_of_birth: opt_text(&self.date_of_birth),
            height: parse_number("Height", &self.height)?,
            weight: parse_number("Weight", &self.weight)?,
            salary: parse_number("Salary", &self.salary)?,
            loan_amount: parse_number("Loan amount", &self.loan_amount)?,
            number_of_children: parse_number("Number of children", &self.number_of_children)?,
            skills: split_list(&self.skills),
            languages: split_list(&self.languages),
            maid_type: split_list(&self.maid_type),
            is_active: self.is_active,
            is_employed: self.is_employed,
            details: self.details.clone(),
        }
        .normalized();
        dto.validate(today)?;
        Ok(dto)
    }
}

/// ViewModel for the create/edit modal
#[derive(Clone, Copy)]
pub struct MaidDetailsViewModel {
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<MaidForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl MaidDetailsViewModel {
    pub fn new(initial: Option<&MaidDto>) -> Self {
        Self {
            id: StoredValue::new(initial.and_then(|dto| dto.id.clone())),
            form: RwSignal::new(initial.map(MaidForm::from_dto).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(|id| id.is_some())
    }

    /// Validate, then create or update. `on_saved` runs after a 2xx.
    pub fn save_command(&self, session: SessionContext, notices: Notices, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = match self.form.with_untracked(|f| f.to_write_dto(Local::now().date_naive())) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let id = self.id.get_value();
        let error = self.error;
        let saving = self.saving;
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_maid(id, dto).await,
                None => api::create_maid(dto).await,
            };
            let _ = saving.try_set(false);
            match result {
                Ok(_) => {
                    session.confirm();
                    notices.success(if id.is_some() { "Record updated" } else { "Record created" });
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("saving maid record failed: {}", e);
                    if !session.report(&e) {
                        let _ = error.try_set(Some(e.user_message()));
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled() -> MaidForm {
        MaidForm {
            name: " Ana ".into(),
            country: "Philippines".into(),
            supplier: "Agency One".into(),
            height: "160".into(),
            salary: "1,500".into(),
            skills: "Cooking, , Baking ".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_write_dto_parses_and_trims() {
        let dto = filled().to_write_dto(today()).unwrap();
        assert_eq!(dto.name, "Ana");
        assert_eq!(dto.height, Some(160.0));
        assert_eq!(dto.salary, Some(1500.0));
        assert_eq!(dto.weight, None);
        assert_eq!(dto.skills, vec!["Cooking", "Baking"]);
        assert_eq!(dto.religion, None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let form = MaidForm {
            supplier: "  ".into(),
            ..filled()
        };
        let err = form.to_write_dto(today()).unwrap_err();
        assert_eq!(err, ApiError::Validation("Supplier is required".into()));
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let form = MaidForm {
            weight: "sixty".into(),
            ..filled()
        };
        let err = form.to_write_dto(today()).unwrap_err();
        assert_eq!(err, ApiError::Validation("Weight must be a number".into()));
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let form = MaidForm {
            height: "20".into(),
            ..filled()
        };
        assert!(matches!(
            form.to_write_dto(today()),
            Err(ApiError::Validation(msg)) if msg.starts_with("Height must be between")
        ));
    }

    #[test]
    fn test_from_dto_round_trips_through_the_form() {
        let dto = MaidDto {
            id: Some("m1".into()),
            name: Some("Bea".into()),
            country: Some("Indonesia".into()),
            supplier: Some("Agency Two".into()),
            date_of_birth: Some("15/03/1994".into()),
            weight: Some(52.5),
            languages: vec!["English".into(), "Malay".into()],
            ..Default::default()
        };
        let form = MaidForm::from_dto(&dto);
        assert_eq!(form.date_of_birth, "1994-03-15");
        assert_eq!(form.weight, "52.5");
        assert_eq!(form.languages, "English, Malay");

        let write = form.to_write_dto(today()).unwrap();
        assert_eq!(write.languages, vec!["English", "Malay"]);
        assert_eq!(write.weight, Some(52.5));
    }
}
