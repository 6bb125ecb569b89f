mod tests {
    use cascade_nightlight::cell::ProgramSelect;
    use cascade_nightlight::effect::{Brightness, ProgramId, ProgramSlot};

    #[test]
    fn test_slot_decomposition() {
        assert_eq!(ProgramSlot::new(0).program(), ProgramId::SunCycle);
        assert_eq!(ProgramSlot::new(0).brightness(), Brightness::Full);
        assert_eq!(ProgramSlot::new(3).program(), ProgramId::ColorCycle);
        assert_eq!(ProgramSlot::new(3).brightness(), Brightness::Full);
        assert_eq!(ProgramSlot::new(4).program(), ProgramId::SunCycle);
        assert_eq!(ProgramSlot::new(4).brightness(), Brightness::Half);
        assert_eq!(ProgramSlot::new(7).program(), ProgramId::ColorCycle);
        assert_eq!(ProgramSlot::new(7).brightness(), Brightness::Half);
    }

    #[test]
    fn test_slot_wraps() {
        assert_eq!(ProgramSlot::new(7).next(), ProgramSlot::new(0));
        assert_eq!(ProgramSlot::new(8), ProgramSlot::new(0));
    }

    #[test]
    fn test_program_id_round_trip() {
        for raw in 0u8..4 {
            let id = ProgramId::from_raw(raw).unwrap();
            assert_eq!(id as u8, raw);
        }
        assert_eq!(ProgramId::from_raw(4), None);
    }

    #[test]
    fn test_program_id_names() {
        assert_eq!(ProgramId::SunCycle.as_str(), "sun_cycle");
        assert_eq!(ProgramId::ColorCycle.as_str(), "color_cycle");
    }

    #[test]
    fn test_select_starts_pending() {
        let select = ProgramSelect::new();
        assert_eq!(select.take_pending(), Some(ProgramSlot::new(0)));
        assert_eq!(select.take_pending(), None);
    }

    #[test]
    fn test_edge_advances_once_until_rearmed() {
        let select = ProgramSelect::new();
        select.take_pending();

        // Two edges inside the debounce window: the handler disarmed
        // itself on the first, so the second is ignored.
        select.notify_edge(true);
        select.notify_edge(true);
        assert_eq!(select.take_pending(), Some(ProgramSlot::new(1)));
        assert_eq!(select.current(), ProgramSlot::new(1));

        select.rearm();
        select.notify_edge(true);
        assert_eq!(select.take_pending(), Some(ProgramSlot::new(2)));
    }

    #[test]
    fn test_unconfirmed_edge_disarms_without_advancing() {
        let select = ProgramSelect::new();
        select.take_pending();

        // A spurious edge with the confirm input released consumes the
        // arming but must not change the slot.
        select.notify_edge(false);
        assert_eq!(select.take_pending(), None);
        assert_eq!(select.current(), ProgramSlot::new(0));

        // Still disarmed: a confirmed edge is ignored until rearm.
        select.notify_edge(true);
        assert_eq!(select.take_pending(), None);

        select.rearm();
        select.notify_edge(true);
        assert_eq!(select.take_pending(), Some(ProgramSlot::new(1)));
    }

    #[test]
    fn test_select_with_slot() {
        let select = ProgramSelect::with_slot(ProgramSlot::new(5));
        assert_eq!(select.current(), ProgramSlot::new(5));
        assert_eq!(select.take_pending(), Some(ProgramSlot::new(5)));
    }
}
