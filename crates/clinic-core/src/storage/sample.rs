//! Starter records for a first run.

use std::collections::BTreeSet;

use crate::models::{AppointmentEvent, EventTime, FieldResult, MedicalHistoryEvent, Patient, Tag};
use crate::store::ClinicBook;

use super::{StorageError, StorageResult};

struct SamplePatient {
    name: &'static str,
    nric: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    tags: &'static [&'static str],
    appointments: &'static [(&'static str, Option<&'static str>)],
    history: &'static [(&'static str, &'static str, &'static str)],
}

const SAMPLE_PATIENTS: &[SamplePatient] = &[
    SamplePatient {
        name: "Alex Yeoh",
        nric: "S8712345A",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        tags: &["diabetic"],
        appointments: &[("2024-05-02", Some("09:30"))],
        history: &[("2021-11-03", "Type 2 diabetes", "Metformin")],
    },
    SamplePatient {
        name: "Bernice Yu",
        nric: "T0123456B",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        tags: &["asthmatic", "paediatric"],
        appointments: &[],
        history: &[("2023-02-14", "Asthma", "Salbutamol inhaler")],
    },
    SamplePatient {
        name: "Charlotte Oliveiro",
        nric: "S9234567C",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        tags: &["hypertension"],
        appointments: &[("2024-04-18", None), ("2024-06-20", Some("15:00"))],
        history: &[],
    },
    SamplePatient {
        name: "David Li",
        nric: "G1234567D",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        tags: &[],
        appointments: &[],
        history: &[],
    },
    SamplePatient {
        name: "Irfan Ibrahim",
        nric: "S7654321E",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        tags: &["allergy"],
        appointments: &[("2024-05-09", Some("11:00"))],
        history: &[("2022-08-30", "Penicillin allergy", "Antihistamines")],
    },
    SamplePatient {
        name: "Roy Balakrishnan",
        nric: "F2345678F",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        tags: &[],
        appointments: &[],
        history: &[("2020-01-12", "Fractured wrist", "Cast for six weeks")],
    },
];

impl SamplePatient {
    fn to_patient(&self) -> FieldResult<Patient> {
        let tags = self
            .tags
            .iter()
            .map(|tag| tag.parse())
            .collect::<FieldResult<BTreeSet<Tag>>>()?;
        let mut patient = Patient::new(
            self.name.parse()?,
            self.nric.parse()?,
            self.phone.parse()?,
            self.email.parse()?,
            self.address.parse()?,
            tags,
        );

        for (date, time) in self.appointments {
            let time: Option<EventTime> = time.map(str::parse).transpose()?;
            patient
                .appointments
                .push(AppointmentEvent::new(date.parse()?, time));
        }
        for (date, condition, treatment) in self.history {
            patient.medical_history.push(MedicalHistoryEvent::new(
                date.parse()?,
                condition.parse()?,
                treatment.parse()?,
            ));
        }

        Ok(patient)
    }
}

/// A small clinic book to start from when no data file exists.
pub fn sample_clinic_book() -> StorageResult<ClinicBook> {
    let patients = SAMPLE_PATIENTS
        .iter()
        .map(SamplePatient::to_patient)
        .collect::<FieldResult<Vec<_>>>()
        .map_err(|e| StorageError::IllegalValue(e.to_string()))?;

    ClinicBook::from_patients(patients).map_err(|e| StorageError::IllegalValue(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_book_is_valid() {
        let book = sample_clinic_book().unwrap();
        assert_eq!(book.len(), SAMPLE_PATIENTS.len());
        assert_eq!(book.patients()[0].name.as_str(), "Alex Yeoh");
    }

    #[test]
    fn test_sample_events_belong_to_their_patient() {
        let book = sample_clinic_book().unwrap();
        let charlotte = &book.patients()[2];
        assert_eq!(charlotte.appointments.len(), 2);
        assert!(charlotte.medical_history.is_empty());
    }
}
