pub mod view_model;

use self::view_model::{MaidDetailsViewModel, MaidForm};
use crate::shared::components::form_field::{TextField, ToggleField};
use crate::shared::modal::Modal;
use crate::shared::notices::use_notices;
use crate::system::session::use_session;
use contracts::domain::a001_maid::MaidDto;
use leptos::prelude::*;
use thaw::*;

/// Create/edit modal. `initial` is `None` for a new record.
#[component]
pub fn MaidDetails(
    initial: Option<MaidDto>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = MaidDetailsViewModel::new(initial.as_ref());
    let session = use_session();
    let notices = use_notices();

    let title = if vm.is_edit_mode() {
        format!("Edit {}", initial.as_ref().and_then(|d| d.name.clone()).unwrap_or_default())
    } else {
        "New record".to_string()
    };

    // one getter/setter pair per text field
    let text = move |get: fn(&MaidForm) -> String, set: fn(&mut MaidForm, String)| {
        (
            Signal::derive(move || vm.form.with(get)),
            Callback::new(move |value: String| vm.form.update(|f| set(f, value))),
        )
    };
    let flag = move |get: fn(&MaidForm) -> bool, set: fn(&mut MaidForm, bool)| {
        (
            Signal::derive(move || vm.form.with(get)),
            Callback::new(move |value: bool| vm.form.update(|f| set(f, value))),
        )
    };

    let (name, set_name) = text(|f| f.name.clone(), |f, v| f.name = v);
    let (country, set_country) = text(|f| f.country.clone(), |f, v| f.country = v);
    let (supplier, set_supplier) = text(|f| f.supplier.clone(), |f, v| f.supplier = v);
    let (religion, set_religion) = text(|f| f.religion.clone(), |f, v| f.religion = v);
    let (marital, set_marital) = text(|f| f.marital_status.clone(), |f, v| f.marital_status = v);
    let (dob, set_dob) = text(|f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v);
    let (height, set_height) = text(|f| f.height.clone(), |f, v| f.height = v);
    let (weight, set_weight) = text(|f| f.weight.clone(), |f, v| f.weight = v);
    let (salary, set_salary) = text(|f| f.salary.clone(), |f, v| f.salary = v);
    let (loan, set_loan) = text(|f| f.loan_amount.clone(), |f, v| f.loan_amount = v);
    let (children, set_children) =
        text(|f| f.number_of_children.clone(), |f, v| f.number_of_children = v);
    let (skills, set_skills) = text(|f| f.skills.clone(), |f, v| f.skills = v);
    let (languages, set_languages) = text(|f| f.languages.clone(), |f, v| f.languages = v);
    let (types, set_types) = text(|f| f.maid_type.clone(), |f, v| f.maid_type = v);
    let (active, set_active) = flag(|f| f.is_active, |f, v| f.is_active = v);
    let (employed, set_employed) = flag(|f| f.is_employed, |f, v| f.is_employed = v);

    let save = move |_| vm.save_command(session, notices, on_saved);

    view! {
        <Modal
            title=title
            on_close=on_close
            action_buttons=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            }
        >
            {move || vm.error.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}
            <div class="form__grid">
                <TextField label="Name" value=name on_input=set_name required=true />
                <TextField label="Country" value=country on_input=set_country required=true />
                <TextField label="Supplier" value=supplier on_input=set_supplier required=true />
                <TextField label="Religion" value=religion on_input=set_religion />
                <TextField label="Marital status" value=marital on_input=set_marital />
                <TextField label="Date of birth" value=dob on_input=set_dob input_type="date" />
                <TextField label="Height (cm)" value=height on_input=set_height input_type="number" />
                <TextField label="Weight (kg)" value=weight on_input=set_weight input_type="number" />
                <TextField label="Salary" value=salary on_input=set_salary input_type="number" />
                <TextField label="Loan amount" value=loan on_input=set_loan input_type="number" />
                <TextField label="Children" value=children on_input=set_children input_type="number" />
                <TextField label="Skills" value=skills on_input=set_skills hint="Comma separated" />
                <TextField label="Languages" value=languages on_input=set_languages hint="Comma separated" />
                <TextField label="Type" value=types on_input=set_types hint="Comma separated" />
            </div>
            <div class="form__row">
                <ToggleField label="Active" value=active on_change=set_active />
                <ToggleField label="Employed" value=employed on_change=set_employed />
            </div>
        </Modal>
    }
}
