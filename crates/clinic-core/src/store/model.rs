//! The model: clinic book, preferences and the filtered views over them.

use std::path::Path;

use crate::models::{
    AppointmentEvent, EventId, GuiSettings, MedicalHistoryEvent, Nric, Patient, UserPreferences,
};

use super::{ClinicBook, EventFilter, PatientFilter, StoreResult};

/// The patient whose event lists are currently shown, with their filters.
#[derive(Debug, Clone, PartialEq)]
struct ActivePatient {
    nric: Nric,
    appointment_filter: EventFilter,
    medical_history_filter: EventFilter,
}

impl ActivePatient {
    fn new(nric: Nric) -> Self {
        Self {
            nric,
            appointment_filter: EventFilter::All,
            medical_history_filter: EventFilter::All,
        }
    }
}

/// In-memory state the commands execute against.
///
/// Filtered views are recomputed from the book and the current predicates on
/// every read, so they always reflect the latest mutation.
#[derive(Debug, Clone, Default)]
pub struct Model {
    book: ClinicBook,
    user_prefs: UserPreferences,
    patient_filter: PatientFilter,
    active: Option<ActivePatient>,
}

impl Model {
    pub fn new(book: ClinicBook, user_prefs: UserPreferences) -> Self {
        Self {
            book,
            user_prefs,
            patient_filter: PatientFilter::All,
            active: None,
        }
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    pub fn user_prefs(&self) -> &UserPreferences {
        &self.user_prefs
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.user_prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.set_gui_settings(gui_settings);
    }

    pub fn clinic_book_file_path(&self) -> &Path {
        self.user_prefs.clinic_book_file_path()
    }

    pub fn set_clinic_book_file_path(&mut self, path: &Path) {
        self.user_prefs.set_clinic_book_file_path(path);
    }

    // =========================================================================
    // Clinic book
    // =========================================================================

    pub fn clinic_book(&self) -> &ClinicBook {
        &self.book
    }

    /// Replace the whole book. Filters and the active patient are reset.
    pub fn set_clinic_book(&mut self, book: ClinicBook) {
        self.book = book;
        self.patient_filter = PatientFilter::All;
        self.active = None;
    }

    pub fn has_patient(&self, patient: &Patient) -> bool {
        self.book.has_patient(patient)
    }

    /// Add a patient and show the full list so the new record is visible.
    pub fn add_patient(&mut self, patient: Patient) -> StoreResult<()> {
        self.book.add_patient(patient)?;
        self.patient_filter = PatientFilter::All;
        Ok(())
    }

    /// Replace a patient in place. An active patient follows its new NRIC.
    pub fn set_patient(&mut self, target: &Nric, edited: Patient) -> StoreResult<()> {
        let new_nric = edited.nric.clone();
        self.book.set_patient(target, edited)?;
        if let Some(active) = self.active.as_mut().filter(|a| &a.nric == target) {
            active.nric = new_nric;
        }
        Ok(())
    }

    /// Remove a patient; its events leave the event views with it.
    pub fn delete_patient(&mut self, target: &Nric) -> StoreResult<Patient> {
        let removed = self.book.remove_patient(target)?;
        if self.active.as_ref().is_some_and(|a| &a.nric == target) {
            self.active = None;
        }
        Ok(removed)
    }

    /// Remove every patient. Filters and the active patient are reset.
    pub fn clear(&mut self) {
        self.book.clear();
        self.patient_filter = PatientFilter::All;
        self.active = None;
    }

    // =========================================================================
    // Patient view
    // =========================================================================

    pub fn patient_filter(&self) -> &PatientFilter {
        &self.patient_filter
    }

    pub fn update_patient_filter(&mut self, filter: PatientFilter) {
        self.patient_filter = filter;
    }

    /// Patients matching the current filter, in insertion order.
    pub fn filtered_patients(&self) -> Vec<&Patient> {
        self.book
            .patients()
            .iter()
            .filter(|p| self.patient_filter.matches(p))
            .collect()
    }

    // =========================================================================
    // Active patient and event views
    // =========================================================================

    pub fn active_patient(&self) -> Option<&Patient> {
        self.active
            .as_ref()
            .and_then(|active| self.book.patient(&active.nric))
    }

    /// Make `nric` the active patient. Switching to another patient resets the
    /// event filters; re-focusing the same patient keeps them.
    pub fn focus_patient(&mut self, nric: &Nric) {
        if self.active.as_ref().is_some_and(|a| &a.nric == nric) {
            return;
        }
        self.active = self.book.contains(nric).then(|| ActivePatient::new(nric.clone()));
    }

    pub fn set_appointment_filter(&mut self, filter: EventFilter) {
        if let Some(active) = self.active.as_mut() {
            active.appointment_filter = filter;
        }
    }

    pub fn set_medical_history_filter(&mut self, filter: EventFilter) {
        if let Some(active) = self.active.as_mut() {
            active.medical_history_filter = filter;
        }
    }

    /// The active patient's appointments matching the current filter.
    pub fn filtered_appointments(&self) -> Vec<&AppointmentEvent> {
        match &self.active {
            Some(active) => self.appointments_view(&active.nric),
            None => Vec::new(),
        }
    }

    /// The active patient's medical history matching the current filter.
    pub fn filtered_medical_history(&self) -> Vec<&MedicalHistoryEvent> {
        match &self.active {
            Some(active) => self.medical_history_view(&active.nric),
            None => Vec::new(),
        }
    }

    fn event_filters_for(&self, nric: &Nric) -> (EventFilter, EventFilter) {
        match &self.active {
            Some(active) if &active.nric == nric => {
                (active.appointment_filter, active.medical_history_filter)
            }
            _ => (EventFilter::All, EventFilter::All),
        }
    }

    /// The appointment list positions refer to for `nric`: filtered if the
    /// patient is active, complete otherwise.
    pub fn appointments_view(&self, nric: &Nric) -> Vec<&AppointmentEvent> {
        let (filter, _) = self.event_filters_for(nric);
        self.book
            .patient(nric)
            .map(|p| p.appointments.iter().filter(|a| filter.matches(*a)).collect())
            .unwrap_or_default()
    }

    /// The medical history list positions refer to for `nric`.
    pub fn medical_history_view(&self, nric: &Nric) -> Vec<&MedicalHistoryEvent> {
        let (_, filter) = self.event_filters_for(nric);
        self.book
            .patient(nric)
            .map(|p| p.medical_history.iter().filter(|e| filter.matches(*e)).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // Event mutation
    // =========================================================================

    pub fn add_appointment(&mut self, owner: &Nric, appointment: AppointmentEvent) -> StoreResult<()> {
        self.book.add_appointment(owner, appointment)
    }

    pub fn set_appointment(
        &mut self,
        owner: &Nric,
        id: EventId,
        edited: AppointmentEvent,
    ) -> StoreResult<()> {
        self.book.set_appointment(owner, id, edited)
    }

    pub fn delete_appointment(&mut self, owner: &Nric, id: EventId) -> StoreResult<AppointmentEvent> {
        self.book.remove_appointment(owner, id)
    }

    pub fn add_medical_history_event(
        &mut self,
        owner: &Nric,
        event: MedicalHistoryEvent,
    ) -> StoreResult<()> {
        self.book.add_medical_history_event(owner, event)
    }

    pub fn set_medical_history_event(
        &mut self,
        owner: &Nric,
        id: EventId,
        edited: MedicalHistoryEvent,
    ) -> StoreResult<()> {
        self.book.set_medical_history_event(owner, id, edited)
    }

    pub fn delete_medical_history_event(
        &mut self,
        owner: &Nric,
        id: EventId,
    ) -> StoreResult<MedicalHistoryEvent> {
        self.book.remove_medical_history_event(owner, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{appointment, history, patient, typical_book};

    fn nric(value: &str) -> Nric {
        value.parse().unwrap()
    }

    fn model() -> Model {
        Model::new(typical_book(), UserPreferences::default())
    }

    fn names(model: &Model) -> Vec<&str> {
        model
            .filtered_patients()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn test_filtered_view_follows_predicate() {
        let mut model = model();
        assert_eq!(names(&model), ["Alice Pauline", "Benson Meier", "Carl Kurz"]);

        model.update_patient_filter(PatientFilter::NameContainsKeywords(vec!["kurz".into()]));
        assert_eq!(names(&model), ["Carl Kurz"]);

        model.update_patient_filter(PatientFilter::All);
        assert_eq!(names(&model), ["Alice Pauline", "Benson Meier", "Carl Kurz"]);
    }

    #[test]
    fn test_filtered_view_reflects_mutation() {
        let mut model = model();
        model.update_patient_filter(PatientFilter::NameContainsKeywords(vec!["carl".into()]));

        model.delete_patient(&nric("T3456789C")).unwrap();
        assert!(model.filtered_patients().is_empty());
    }

    #[test]
    fn test_add_resets_patient_filter() {
        let mut model = model();
        model.update_patient_filter(PatientFilter::NameContainsKeywords(vec!["carl".into()]));

        model.add_patient(patient("Daniel Meier", "S4567890D")).unwrap();
        assert_eq!(model.filtered_patients().len(), 4);
    }

    #[test]
    fn test_event_views_follow_active_patient() {
        let mut model = model();
        let alice = nric("S1234567A");
        model.add_appointment(&alice, appointment("2024-01-01")).unwrap();
        model.add_appointment(&alice, appointment("2024-02-01")).unwrap();
        model
            .add_medical_history_event(&alice, history("2023-01-01", "Flu"))
            .unwrap();

        assert!(model.filtered_appointments().is_empty());

        model.focus_patient(&alice);
        assert_eq!(model.filtered_appointments().len(), 2);
        assert_eq!(model.filtered_medical_history().len(), 1);

        model.set_appointment_filter(EventFilter::OnDate("2024-02-01".parse().unwrap()));
        assert_eq!(model.filtered_appointments().len(), 1);
        assert_eq!(model.appointments_view(&alice).len(), 1);

        // Another patient's view is never filtered by Alice's predicate.
        assert!(model.appointments_view(&nric("S2345678B")).is_empty());

        // Re-focusing keeps the filter; switching away resets it.
        model.focus_patient(&alice);
        assert_eq!(model.filtered_appointments().len(), 1);
        model.focus_patient(&nric("S2345678B"));
        model.focus_patient(&alice);
        assert_eq!(model.filtered_appointments().len(), 2);
    }

    #[test]
    fn test_deleting_active_patient_clears_event_views() {
        let mut model = model();
        let alice = nric("S1234567A");
        model.add_appointment(&alice, appointment("2024-01-01")).unwrap();
        model.focus_patient(&alice);

        model.delete_patient(&alice).unwrap();
        assert!(model.active_patient().is_none());
        assert!(model.filtered_appointments().is_empty());
    }

    #[test]
    fn test_active_patient_follows_nric_edit() {
        let mut model = model();
        let alice = nric("S1234567A");
        model.focus_patient(&alice);

        let edited = patient("Alice Pauline", "S9999999Z");
        model.set_patient(&alice, edited).unwrap();

        assert_eq!(model.active_patient().unwrap().nric.as_str(), "S9999999Z");
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut model = model();
        model.focus_patient(&nric("S1234567A"));

        model.clear();
        assert!(model.clinic_book().is_empty());
        assert!(model.filtered_patients().is_empty());
        assert!(model.active_patient().is_none());
    }

    #[test]
    fn test_focus_unknown_patient_clears_active() {
        let mut model = model();
        model.focus_patient(&nric("S1234567A"));
        model.focus_patient(&nric("G0000000X"));
        assert!(model.active_patient().is_none());
    }
}
