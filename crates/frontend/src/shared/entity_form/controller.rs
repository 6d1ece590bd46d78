use contracts::domain::common::EditableEntity;
use contracts::shared::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Prefilled and read-only
    Viewing,
    /// Blank record with a server-generated code
    Adding,
    /// Prefilled and mutable
    Editing,
}

/// Discarding action waiting for the user to confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Reset,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCheck<T> {
    /// Form is read-only, nothing to save
    Blocked,
    /// Validation failed; errors are now on the form
    Invalid,
    Ready(T),
}

/// Details form state for one entity: mode, initial snapshot, edited copy,
/// inline errors and the pending confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController<T: EditableEntity> {
    mode: FormMode,
    initial: T,
    current: T,
    errors: FieldErrors,
    pending: Option<PendingAction>,
    submitted_once: bool,
}

impl<T: EditableEntity> Default for FormController<T> {
    fn default() -> Self {
        Self::open(None, false)
    }
}

impl<T: EditableEntity> FormController<T> {
    /// `None` opens an add form; `Some` opens edit, or view when `view_only`
    pub fn open(initial_data: Option<T>, view_only: bool) -> Self {
        let (mode, initial) = match initial_data {
            None => (FormMode::Adding, T::default()),
            Some(dto) if view_only => (FormMode::Viewing, dto),
            Some(dto) => (FormMode::Editing, dto),
        };
        Self {
            mode,
            current: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            pending: None,
            submitted_once: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == FormMode::Viewing
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn initial(&self) -> &T {
        &self.initial
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.initial
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Adding => format!("Add {}", T::element_name()),
            FormMode::Editing => format!("Edit {}", T::element_name()),
            FormMode::Viewing => format!("View {}", T::element_name()),
        }
    }

    /// Update one field from user input. Ignored while viewing.
    pub fn set_field(&mut self, key: &str, value: &str) -> bool {
        if self.is_read_only() || !self.current.set_field_value(key, value) {
            return false;
        }
        if self.submitted_once {
            match T::validation_schema().validate_field(&self.current, key) {
                Some(msg) => self.errors.insert(key.to_string(), msg),
                None => self.errors.remove(key),
            };
        }
        true
    }

    /// Put a generated code into both snapshots so prefilling alone does not
    /// make the form dirty. The code is used as returned.
    pub fn apply_generated_code(&mut self, code: String) {
        if self.mode != FormMode::Adding {
            return;
        }
        self.initial.set_code(code.clone());
        self.current.set_code(code);
    }

    /// Returns `true` when the form was reset right away; otherwise a
    /// confirmation is pending.
    pub fn request_reset(&mut self) -> bool {
        if self.is_dirty() {
            self.pending = Some(PendingAction::Reset);
            false
        } else {
            self.reset();
            true
        }
    }

    /// Returns `true` when the dialog can close right away
    pub fn request_cancel(&mut self) -> bool {
        if self.is_dirty() && !self.is_read_only() {
            self.pending = Some(PendingAction::Cancel);
            false
        } else {
            true
        }
    }

    /// Carries out the pending action. A confirmed reset is applied here; a
    /// confirmed cancel is returned for the caller to close the dialog.
    pub fn confirm_pending(&mut self) -> Option<PendingAction> {
        let action = self.pending.take()?;
        if action == PendingAction::Reset {
            self.reset();
        }
        Some(action)
    }

    /// Keep edits and drop the pending confirmation
    pub fn dismiss_pending(&mut self) {
        self.pending = None;
    }

    fn reset(&mut self) {
        self.current = self.initial.clone();
        self.errors.clear();
        self.submitted_once = false;
    }

    pub fn validate(&mut self) -> bool {
        self.errors = T::validation_schema()
            .validate(&self.current)
            .err()
            .unwrap_or_default();
        self.errors.is_empty()
    }

    pub fn prepare_submit(&mut self) -> SubmitCheck<T> {
        if self.is_read_only() {
            return SubmitCheck::Blocked;
        }
        self.submitted_once = true;
        if !self.validate() {
            return SubmitCheck::Invalid;
        }
        SubmitCheck::Ready(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_department::aggregate::DepartmentDto;
    use contracts::domain::a005_product_tax::aggregate::ProductTaxDto;
    use contracts::domain::common::{EntityDto, RecordStatus};

    fn cardiology() -> DepartmentDto {
        DepartmentDto {
            dept_id: 7,
            dept_code: "DEP007".into(),
            dept_name: "Cardiology".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_selects_mode() {
        let add = FormController::<DepartmentDto>::open(None, false);
        assert_eq!(add.mode(), FormMode::Adding);
        assert!(add.current().is_new());

        let edit = FormController::open(Some(cardiology()), false);
        assert_eq!(edit.mode(), FormMode::Editing);
        assert_eq!(edit.title(), "Edit Department");

        let view = FormController::open(Some(cardiology()), true);
        assert_eq!(view.mode(), FormMode::Viewing);
        assert!(view.is_read_only());
    }

    #[test]
    fn test_viewing_ignores_input_and_blocks_submit() {
        let mut form = FormController::open(Some(cardiology()), true);

        assert!(!form.set_field("deptName", "Neurology"));
        assert_eq!(form.current().dept_name, "Cardiology");
        assert_eq!(form.prepare_submit(), SubmitCheck::Blocked);
        assert!(form.request_cancel());
    }

    #[test]
    fn test_reset_on_dirty_form_waits_for_confirmation() {
        let mut form = FormController::open(Some(cardiology()), false);
        form.set_field("deptName", "Cardiology and Vascular");
        form.set_field(RecordStatus::ACTIVE_KEY, "N");
        assert!(form.is_dirty());

        assert!(!form.request_reset());
        assert_eq!(form.pending(), Some(PendingAction::Reset));

        assert_eq!(form.confirm_pending(), Some(PendingAction::Reset));
        assert_eq!(form.current(), &cardiology());
        assert!(!form.is_dirty());
        assert_eq!(form.pending(), None);
    }

    #[test]
    fn test_dismissing_reset_keeps_edits() {
        let mut form = FormController::open(Some(cardiology()), false);
        form.set_field("deptName", "Neurology");

        assert!(!form.request_reset());
        form.dismiss_pending();

        assert_eq!(form.pending(), None);
        assert_eq!(form.current().dept_name, "Neurology");
        assert!(form.is_dirty());
    }

    #[test]
    fn test_clean_form_resets_and_cancels_immediately() {
        let mut form = FormController::open(Some(cardiology()), false);
        assert!(form.request_reset());
        assert!(form.request_cancel());
        assert_eq!(form.pending(), None);
    }

    #[test]
    fn test_cancel_on_dirty_form_needs_confirmation() {
        let mut form = FormController::open(Some(cardiology()), false);
        form.set_field("deptType", "Clinical");

        assert!(!form.request_cancel());
        assert_eq!(form.confirm_pending(), Some(PendingAction::Cancel));
        assert_eq!(form.current().dept_type.as_deref(), Some("Clinical"));
    }

    #[test]
    fn test_generated_code_is_placed_verbatim_and_not_dirty() {
        let mut form = FormController::<DepartmentDto>::open(None, false);
        form.apply_generated_code("004".to_string());

        assert_eq!(form.current().code(), "004");
        assert!(!form.is_dirty());

        let mut edit = FormController::open(Some(cardiology()), false);
        edit.apply_generated_code("DEP999".to_string());
        assert_eq!(edit.current().code(), "DEP007");
    }

    #[test]
    fn test_invalid_submit_reports_inline_errors() {
        let mut form = FormController::<DepartmentDto>::open(None, false);
        form.apply_generated_code("DEP001".to_string());

        assert_eq!(form.prepare_submit(), SubmitCheck::Invalid);
        assert_eq!(form.field_error("deptName"), Some("Name is required"));

        form.set_field("deptName", "Cardiology");
        assert_eq!(form.field_error("deptName"), None);

        match form.prepare_submit() {
            SubmitCheck::Ready(dto) => {
                assert_eq!(dto.dept_id, 0);
                assert_eq!(dto.dept_code, "DEP001");
                assert_eq!(dto.dept_name, "Cardiology");
            }
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_field_range() {
        let mut form = FormController::<ProductTaxDto>::open(None, false);
        form.apply_generated_code("TAX001".to_string());
        form.set_field("pTaxName", "GST");
        form.set_field("pTaxAmt", "140");

        assert_eq!(form.prepare_submit(), SubmitCheck::Invalid);
        assert!(form.field_error("pTaxAmt").is_some());

        form.set_field("pTaxAmt", "18");
        assert!(matches!(form.prepare_submit(), SubmitCheck::Ready(_)));
    }
}
