//! Flat view model consumed by the filter engine, table and catalogue.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::aggregate::MaidDto;

/// Placement status shown in lists and used as a filter category.
///
/// Always derived from `(is_employed, is_active)`; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Availability {
    Employed,
    Available,
    Draft,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Available,
        Availability::Employed,
        Availability::Draft,
    ];

    pub fn derive(is_employed: bool, is_active: bool) -> Self {
        if is_employed {
            Availability::Employed
        } else if is_active {
            Availability::Available
        } else {
            Availability::Draft
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Employed => "Employed",
            Availability::Available => "Available",
            Availability::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaidRecord {
    pub id: String,
    pub name: String,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    pub supplier: Option<String>,
    pub is_active: bool,
    pub is_employed: bool,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub salary: Option<f64>,
    pub loan_amount: Option<f64>,
    pub children: Option<f64>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub maid_type: Vec<String>,
    pub photo_url: Option<String>,
    /// "Nationality · Religion · Marital status", skipping unknown parts.
    pub summary: String,
    /// Original payload, kept so the edit form can round-trip unknown details.
    pub source: MaidDto,
}

impl MaidRecord {
    pub fn availability(&self) -> Availability {
        Availability::derive(self.is_employed, self.is_active)
    }

    /// Full years on `today`. `None` without a usable birth date.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.and_then(|dob| age_on(dob, today))
    }
}

/// Full years between `dob` and `today`; `None` for a birth date in the future.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    if dob > today {
        return None;
    }
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Accepts `YYYY-MM-DD`, an ISO timestamp, `DD/MM/YYYY` or `DD.MM.YYYY`.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);
    ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Map one backend record. Records without an id cannot be addressed by
/// edit/delete and are skipped.
pub fn normalize(dto: &MaidDto) -> Option<MaidRecord> {
    let id = dto.id.clone()?;

    let summary = [&dto.country, &dto.religion, &dto.marital_status]
        .iter()
        .filter_map(|part| part.as_deref())
        .collect::<Vec<_>>()
        .join(" · ");

    Some(MaidRecord {
        id,
        name: dto.name.clone().unwrap_or_else(|| "Unnamed".to_string()),
        nationality: dto.country.clone(),
        religion: dto.religion.clone(),
        marital_status: dto.marital_status.clone(),
        supplier: dto.supplier.clone(),
        is_active: dto.is_active,
        is_employed: dto.is_employed,
        date_of_birth: dto.date_of_birth.as_deref().and_then(parse_birth_date),
        height: dto.height,
        weight: dto.weight,
        salary: dto.salary,
        loan_amount: dto.loan_amount,
        children: dto.number_of_children,
        skills: dto.skills.clone(),
        languages: dto.languages.clone(),
        maid_type: dto.maid_type.clone(),
        photo_url: dto.photo_url.clone(),
        summary,
        source: dto.clone(),
    })
}

pub fn normalize_all(dtos: &[MaidDto]) -> Vec<MaidRecord> {
    dtos.iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_availability_is_derived() {
        assert_eq!(Availability::derive(true, true), Availability::Employed);
        assert_eq!(Availability::derive(true, false), Availability::Employed);
        assert_eq!(Availability::derive(false, true), Availability::Available);
        assert_eq!(Availability::derive(false, false), Availability::Draft);
    }

    #[test]
    fn test_age_counts_full_years() {
        let dob = date(1990, 6, 15);
        assert_eq!(age_on(dob, date(2024, 6, 14)), Some(33));
        assert_eq!(age_on(dob, date(2024, 6, 15)), Some(34));
        assert_eq!(age_on(dob, date(1990, 6, 15)), Some(0));
        assert_eq!(age_on(dob, date(1990, 6, 14)), None);
    }

    #[test]
    fn test_parse_birth_date_formats() {
        let expected = Some(date(1995, 5, 20));
        assert_eq!(parse_birth_date("1995-05-20"), expected);
        assert_eq!(parse_birth_date("1995-05-20T00:00:00.000Z"), expected);
        assert_eq!(parse_birth_date("20/05/1995"), expected);
        assert_eq!(parse_birth_date("20.05.1995"), expected);
        assert_eq!(parse_birth_date("May 20"), None);
    }

    #[test]
    fn test_normalize_builds_view_model() {
        let dto = MaidDto {
            id: Some("a1".into()),
            name: Some("Maria".into()),
            country: Some("Filipino".into()),
            marital_status: Some("Single".into()),
            is_active: true,
            date_of_birth: Some("1990-01-01".into()),
            ..Default::default()
        };
        let record = normalize(&dto).unwrap();
        assert_eq!(record.summary, "Filipino · Single");
        assert_eq!(record.availability(), Availability::Available);
        assert_eq!(record.age_on(date(2024, 1, 1)), Some(34));
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_normalize_skips_records_without_id() {
        let dtos = vec![
            MaidDto {
                id: Some("a1".into()),
                ..Default::default()
            },
            MaidDto::default(),
        ];
        let records = normalize_all(&dtos);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Unnamed");
    }
}
