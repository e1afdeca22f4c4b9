//! Case and control participants: demographics plus care event histories.

use super::catalogue::{
    CASE_SECONDARY_CODES, CAUSES_OF_DEATH, CONTROL_SECONDARY_CODES, HOSPITALS,
    PRIMARY_CARE_CODES, PRIMARY_CARE_VALUES,
};
use super::field;
use super::person::{address_generator, gp_id_generator, person_template, PersonConfig};
use crate::error::PipelineError;
use chrono::{Duration, NaiveDateTime};
use dgen_generator::{
    parse_timestamp, Bundle, DateRangeGenerator, Generator, GeneratorError, GeneratorExt,
    OptionGenerator, PatternGenerator, Record, Value,
};
use dgen_perturbator::Probability;
use rand::RngCore;

/// Death certificates are dated within this many weeks before the reference.
const DEATH_WINDOW_WEEKS: i64 = 96;

/// Care events stop this many weeks before death.
const PRE_DEATH_GAP_WEEKS: i64 = 4;

/// Secondary care events start this many weeks after birth.
const SECONDARY_CARE_START_WEEKS: i64 = 336;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    Control,
    Case,
}

#[derive(Debug, Clone, Copy)]
pub struct ParticipantConfig {
    pub person: PersonConfig,
    pub kind: ParticipantKind,
    pub death_probability: Probability,
    pub primary_events: usize,
    pub secondary_events: usize,
}

/// Bundle producing a full participant record.
///
/// The control template is the person template extended with `DC`, `PCD` and
/// `SCD`; the case template extends the control template again, replacing
/// `SCD` with a history drawn from disease-specific codes.
pub fn participant_template(config: &ParticipantConfig) -> Result<Bundle, PipelineError> {
    let reference = config.person.reference;

    let control = Bundle::new([
        DeathCertificate::new(config.death_probability, reference)?.named(field::DEATH_CERTIFICATE),
        PrimaryCareHistory::new(config.primary_events, reference)?.named(field::PRIMARY_CARE),
        SecondaryCareHistory::new(config.secondary_events, reference, CONTROL_SECONDARY_CODES)?
            .named(field::SECONDARY_CARE),
    ])?;
    let template = person_template(&config.person)?.extend(control);

    Ok(match config.kind {
        ParticipantKind::Control => template,
        ParticipantKind::Case => template.extend(Bundle::new([SecondaryCareHistory::new(
            config.secondary_events,
            reference,
            CASE_SECONDARY_CODES,
        )?
        .named(field::SECONDARY_CARE)])?),
    })
}

/// Produces a death certificate record with a fixed probability, otherwise
/// [`Value::Null`].
struct DeathCertificate {
    probability: Probability,
    certificate: Bundle,
}

impl DeathCertificate {
    fn new(probability: Probability, reference: NaiveDateTime) -> Result<Self, PipelineError> {
        let window_start = offset_weeks(reference, -DEATH_WINDOW_WEEKS, "reference").map_err(|_| {
            PipelineError::InvalidConfig(format!("reference date {reference} is out of range"))
        })?;
        let certificate = Bundle::new([
            address_generator()?.named(field::DC_ADDRESS),
            OptionGenerator::new(CAUSES_OF_DEATH.iter().copied())?.named(field::DC_CAUSE),
            DateRangeGenerator::new(window_start, reference)?.named(field::DC_DATE),
        ])?;
        Ok(Self {
            probability,
            certificate,
        })
    }
}

impl Generator for DeathCertificate {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        if self.probability.trigger(rng) {
            self.certificate.generate(rng, scope)
        } else {
            Ok(Value::Null)
        }
    }
}

/// Primary care events between birth and the participant's terminal date.
///
/// The practice of each event is the participant's own GP or one of four
/// other practices drawn for this participant.
struct PrimaryCareHistory {
    events: usize,
    reference: NaiveDateTime,
    gp_id: PatternGenerator,
    codes: OptionGenerator,
    values: OptionGenerator,
}

impl PrimaryCareHistory {
    fn new(events: usize, reference: NaiveDateTime) -> Result<Self, PipelineError> {
        Ok(Self {
            events,
            reference,
            gp_id: gp_id_generator()?,
            codes: OptionGenerator::new(PRIMARY_CARE_CODES.iter().copied())?,
            values: OptionGenerator::new(PRIMARY_CARE_VALUES.iter().copied())?,
        })
    }
}

impl Generator for PrimaryCareHistory {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        let own_gp = scope
            .get_text(field::GPID)
            .ok_or_else(|| GeneratorError::MissingField(field::GPID.to_string()))?
            .to_string();
        let mut practices = vec![own_gp];
        for _ in 0..4 {
            practices.push(self.gp_id.generate_string(rng));
        }

        let start = timestamp_field(scope, field::DOB)?;
        let end = terminal_date(scope, self.reference)?;

        let event = Bundle::new([
            OptionGenerator::new(practices)?.named(field::EVENT_GPID),
            DateRangeGenerator::new(start, end)?.named(field::EVENT_DATE),
            self.codes.clone().named(field::EVENT_CODE),
            self.values.clone().named(field::EVENT_DATA),
        ])?;
        event.repeat(self.events).generate(rng, scope)
    }
}

/// Hospital events from early childhood to the participant's terminal date.
struct SecondaryCareHistory {
    events: usize,
    reference: NaiveDateTime,
    hospitals: OptionGenerator,
    codes: OptionGenerator,
}

impl SecondaryCareHistory {
    fn new(
        events: usize,
        reference: NaiveDateTime,
        codes: &[&str],
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            events,
            reference,
            hospitals: OptionGenerator::new(HOSPITALS.iter().copied())?,
            codes: OptionGenerator::new(codes.iter().copied())?,
        })
    }
}

impl Generator for SecondaryCareHistory {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        let dob = timestamp_field(scope, field::DOB)?;
        let start = offset_weeks(dob, SECONDARY_CARE_START_WEEKS, field::DOB)?;
        let end = terminal_date(scope, self.reference)?;

        let event = Bundle::new([
            self.hospitals.clone().named(field::EVENT_HOSPID),
            DateRangeGenerator::new(start, end)?.named(field::EVENT_DATE),
            self.codes.clone().named(field::EVENT_CODE),
        ])?;
        event.repeat(self.events).generate(rng, scope)
    }
}

/// Last date a care event may fall on: the reference instant for living
/// participants, a few weeks before death otherwise.
fn terminal_date(scope: &Record, reference: NaiveDateTime) -> Result<NaiveDateTime, GeneratorError> {
    match scope.get(field::DEATH_CERTIFICATE).and_then(Value::as_record) {
        Some(certificate) => {
            let death = timestamp_field(certificate, field::DC_DATE)?;
            offset_weeks(death, -PRE_DEATH_GAP_WEEKS, field::DC_DATE)
        }
        None => Ok(reference),
    }
}

fn offset_weeks(
    instant: NaiveDateTime,
    weeks: i64,
    name: &str,
) -> Result<NaiveDateTime, GeneratorError> {
    instant
        .checked_add_signed(Duration::weeks(weeks))
        .ok_or_else(|| GeneratorError::DateOutOfRange(name.to_string()))
}

fn timestamp_field(record: &Record, name: &str) -> Result<NaiveDateTime, GeneratorError> {
    record
        .get_text(name)
        .and_then(parse_timestamp)
        .ok_or_else(|| GeneratorError::MissingField(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(kind: ParticipantKind, death: f64) -> ParticipantConfig {
        ParticipantConfig {
            person: PersonConfig {
                min_age: 18,
                max_age: 65,
                reference: parse_timestamp("2017-04-01 00:00:00").unwrap(),
            },
            kind,
            death_probability: Probability::new(death).unwrap(),
            primary_events: 10,
            secondary_events: 7,
        }
    }

    fn events<'a>(record: &'a Record, name: &str) -> Vec<&'a Record> {
        record
            .get(name)
            .and_then(Value::as_list)
            .unwrap()
            .iter()
            .map(|v| v.as_record().unwrap())
            .collect()
    }

    #[test]
    fn test_extends_person_fields() {
        let template = participant_template(&config(ParticipantKind::Control, 0.0)).unwrap();
        assert_eq!(
            template.field_names().collect::<Vec<_>>(),
            vec![
                "PATID", "Gender", "Name", "Surname", "DOB", "Address", "Postcode", "GPID", "DC",
                "PCD", "SCD"
            ]
        );
    }

    #[test]
    fn test_event_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let template = participant_template(&config(ParticipantKind::Control, 0.5)).unwrap();
        let participant = template.generate_record(&mut rng).unwrap();

        assert_eq!(events(&participant, field::PRIMARY_CARE).len(), 10);
        assert_eq!(events(&participant, field::SECONDARY_CARE).len(), 7);
    }

    #[test]
    fn test_living_participants_have_no_certificate() {
        let mut rng = StdRng::seed_from_u64(42);
        let template = participant_template(&config(ParticipantKind::Control, 0.0)).unwrap();

        for _ in 0..20 {
            let participant = template.generate_record(&mut rng).unwrap();
            assert!(participant.get(field::DEATH_CERTIFICATE).unwrap().is_null());
        }
    }

    #[test]
    fn test_events_stop_before_death() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = config(ParticipantKind::Case, 1.0);
        let template = participant_template(&cfg).unwrap();

        for _ in 0..20 {
            let participant = template.generate_record(&mut rng).unwrap();
            let certificate = participant
                .get(field::DEATH_CERTIFICATE)
                .and_then(Value::as_record)
                .unwrap();
            let death = timestamp_field(certificate, field::DC_DATE).unwrap();
            assert!(death <= cfg.person.reference);
            assert!(death >= cfg.person.reference - Duration::weeks(DEATH_WINDOW_WEEKS));
            assert!(CAUSES_OF_DEATH.contains(&certificate.get_text(field::DC_CAUSE).unwrap()));

            let dob = timestamp_field(&participant, field::DOB).unwrap();
            let cutoff = death - Duration::weeks(PRE_DEATH_GAP_WEEKS);
            for event in events(&participant, field::PRIMARY_CARE) {
                let date = timestamp_field(event, field::EVENT_DATE).unwrap();
                assert!(dob <= date && date <= cutoff);
            }
            for event in events(&participant, field::SECONDARY_CARE) {
                let date = timestamp_field(event, field::EVENT_DATE).unwrap();
                assert!(dob + Duration::weeks(SECONDARY_CARE_START_WEEKS) <= date);
                assert!(date <= cutoff);
            }
        }
    }

    #[test]
    fn test_primary_care_practices() {
        let mut rng = StdRng::seed_from_u64(42);
        let template = participant_template(&config(ParticipantKind::Control, 0.0)).unwrap();
        let participant = template.generate_record(&mut rng).unwrap();
        let own_gp = participant.get_text(field::GPID).unwrap();

        let practices: std::collections::HashSet<&str> = events(&participant, field::PRIMARY_CARE)
            .iter()
            .map(|e| e.get_text(field::EVENT_GPID).unwrap())
            .collect();
        assert!(practices.len() <= 5);
        for event in events(&participant, field::PRIMARY_CARE) {
            assert!(PRIMARY_CARE_CODES.contains(&event.get_text(field::EVENT_CODE).unwrap()));
            assert!(PRIMARY_CARE_VALUES.contains(&event.get_text(field::EVENT_DATA).unwrap()));
        }
        assert_eq!(own_gp.len(), 6);
    }

    #[test]
    fn test_case_and_control_codes() {
        let mut rng = StdRng::seed_from_u64(42);
        let control = participant_template(&config(ParticipantKind::Control, 0.0)).unwrap();
        let case = participant_template(&config(ParticipantKind::Case, 0.0)).unwrap();

        for _ in 0..10 {
            let record = control.generate_record(&mut rng).unwrap();
            for event in events(&record, field::SECONDARY_CARE) {
                let code = event.get_text(field::EVENT_CODE).unwrap();
                assert!(CONTROL_SECONDARY_CODES.contains(&code));
                assert!(HOSPITALS.contains(&event.get_text(field::EVENT_HOSPID).unwrap()));
            }
            let record = case.generate_record(&mut rng).unwrap();
            for event in events(&record, field::SECONDARY_CARE) {
                assert!(CASE_SECONDARY_CODES.contains(&event.get_text(field::EVENT_CODE).unwrap()));
            }
        }
    }

    #[test]
    fn test_extreme_reference_date_rejected() {
        let mut cfg = config(ParticipantKind::Control, 0.5);
        cfg.person.reference = NaiveDateTime::MIN;

        assert!(matches!(
            participant_template(&cfg),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_offset_weeks_out_of_range() {
        assert_eq!(
            offset_weeks(NaiveDateTime::MAX, SECONDARY_CARE_START_WEEKS, "DOB"),
            Err(GeneratorError::DateOutOfRange("DOB".to_string()))
        );
        assert_eq!(
            offset_weeks(NaiveDateTime::MIN, -PRE_DEATH_GAP_WEEKS, "DATE"),
            Err(GeneratorError::DateOutOfRange("DATE".to_string()))
        );
        let reference = parse_timestamp("2017-04-01 00:00:00").unwrap();
        assert_eq!(
            offset_weeks(reference, -1, "DATE").unwrap(),
            parse_timestamp("2017-03-25 00:00:00").unwrap()
        );
    }

    #[test]
    fn test_history_requires_demographics() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = parse_timestamp("2017-04-01 00:00:00").unwrap();
        let history = PrimaryCareHistory::new(3, reference).unwrap();

        assert_eq!(
            history.generate_value(&mut rng).unwrap_err(),
            GeneratorError::MissingField("GPID".to_string())
        );
    }
}
