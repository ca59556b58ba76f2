#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, tz::TimeZone, Zoned};

    use crate::{
        error::ValidationError,
        models::{
            AvailabilityState, DateRangeDraft, DurationType, OfflineOption, OfflineSettings,
            StatusState,
        },
    };

    fn at(hour: i8, minute: i8) -> Zoned {
        date(2024, 6, 14)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn test_new_state_is_online() {
        let state = AvailabilityState::new();
        assert!(state.is_online());
        assert_eq!(state.phase(), StatusState::Online);
        assert_eq!(state.selected_option(), OfflineOption::None);
        assert_eq!(state.offline_duration(), "");
        assert!(state.saved_settings().is_none());
        assert!(state.draft().is_none());
        assert!(!state.is_loading());
        assert_eq!(state, AvailabilityState::default());
    }

    #[test]
    fn test_status_state_reads_as_prose() {
        assert_eq!(StatusState::Online.to_string(), "online");
        assert_eq!(
            StatusState::ChoosingOption.to_string(),
            "choosing an offline option"
        );
        assert_eq!(StatusState::OfflineActive.to_string(), "offline");
    }

    #[test]
    fn test_only_online_phase_counts_as_online() {
        assert!(StatusState::Online.is_online());
        assert!(!StatusState::ChoosingOption.is_online());
        assert!(!StatusState::OfflineToday.is_online());
        assert!(!StatusState::OfflineCustomDraft.is_online());
        assert!(!StatusState::OfflineActive.is_online());
    }

    #[test]
    fn test_offline_settings_reject_inverted_dates() {
        let err = OfflineSettings::new(
            date(2024, 6, 15),
            date(2024, 6, 14),
            DurationType::Custom,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));

        let same_day =
            OfflineSettings::new(date(2024, 6, 14), date(2024, 6, 14), DurationType::Today)
                .unwrap();
        assert_eq!(
            same_day,
            OfflineSettings::single_day(date(2024, 6, 14), DurationType::Today)
        );
    }

    #[test]
    fn test_offline_settings_wire_shape() {
        let settings =
            OfflineSettings::new(date(2024, 6, 14), date(2024, 6, 20), DurationType::Custom)
                .unwrap();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startDate": "2024-06-14",
                "endDate": "2024-06-20",
                "durationType": "custom",
            })
        );

        let back: OfflineSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_offline_settings_deserialize_enforces_order() {
        let json = serde_json::json!({
            "startDate": "2024-06-20",
            "endDate": "2024-06-14",
            "durationType": "custom",
        });
        assert!(serde_json::from_value::<OfflineSettings>(json).is_err());
    }

    #[test]
    fn test_draft_is_seeded_with_one_hour() {
        let draft = DateRangeDraft::seeded(at(9, 0)).unwrap();
        assert_eq!(draft.start(), &at(9, 0));
        assert_eq!(draft.end(), &at(10, 0));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_start_past_end_drags_end_along() {
        let mut draft = DateRangeDraft::seeded(at(9, 0)).unwrap();
        draft.set_start(at(12, 0)).unwrap();
        assert_eq!(draft.start(), &at(12, 0));
        assert_eq!(draft.end(), &at(13, 0));
    }

    #[test]
    fn test_draft_start_before_end_keeps_end() {
        let mut draft = DateRangeDraft::seeded(at(9, 0)).unwrap();
        draft.set_start(at(9, 30)).unwrap();
        assert_eq!(draft.end(), &at(10, 0));

        // landing exactly on the end does not move it
        draft.set_start(at(10, 0)).unwrap();
        assert_eq!(draft.end(), &at(10, 0));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_end_before_start_is_refused() {
        let mut draft = DateRangeDraft::seeded(at(9, 0)).unwrap();
        let before = draft.clone();
        let err = draft.set_end(at(8, 59)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
        assert_eq!(draft, before);

        draft.set_end(at(17, 0)).unwrap();
        assert_eq!(draft.end(), &at(17, 0));
    }

    #[test]
    fn test_duration_type_maps_to_option() {
        assert_eq!(OfflineOption::from(DurationType::Today), OfflineOption::Today);
        assert_eq!(OfflineOption::from(DurationType::Custom), OfflineOption::Custom);
        assert_eq!(DurationType::Today.as_str(), "today");
    }
}
