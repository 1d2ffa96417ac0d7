use crate::domain::models::{event::Event, participant::Participant, qr::QrPayload};

/// Assembles the scannable payload for a participant against the active
/// event. Returns `None` when nothing is active; the caller messages
/// "no active event" instead of issuing a payload.
pub fn build_qr_payload(
    participant: &Participant,
    group_name: Option<String>,
    active_event: Option<&Event>,
) -> Option<QrPayload> {
    let event = active_event?;
    Some(QrPayload {
        participant_id: participant.id.clone(),
        id_number: participant.id_number.clone(),
        event_id: event.id.clone(),
        name: participant.full_name(),
        group_name,
        event_name: event.name.clone(),
        check_in_time: event.check_in_time,
        check_out_time: event.check_out_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::participant::{NewParticipantParams, Participant};
    use chrono::{NaiveDate, NaiveTime};

    fn participant() -> Participant {
        Participant::new(NewParticipantParams {
            id_number: "2021-00123".into(),
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            email: "ana@example.com".into(),
            password_hash: "hash".into(),
            year_level: "3".into(),
            section: "B".into(),
            group_id: None,
        })
    }

    #[test]
    fn no_active_event_yields_no_payload() {
        assert!(build_qr_payload(&participant(), None, None).is_none());
    }

    #[test]
    fn payload_binds_participant_to_active_event() {
        let event = Event::new(
            "Orientation".into(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            "ORN-26".into(),
        );

        let p = participant();
        let payload = build_qr_payload(&p, Some("Falcons".into()), Some(&event)).unwrap();

        assert_eq!(payload.participant_id, p.id);
        assert_eq!(payload.id_number, "2021-00123");
        assert_eq!(payload.event_id, event.id);
        assert_eq!(payload.name, "Ana Reyes");
        assert_eq!(payload.group_name.as_deref(), Some("Falcons"));
        assert_eq!(payload.event_name, "Orientation");
        assert_eq!(payload.check_in_time, event.check_in_time);
        assert_eq!(payload.check_out_time, event.check_out_time);
    }
}
