mod tests {
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    use cascade_nightlight::driver::SerialLink;
    use cascade_nightlight::{Frame, OutputLink, Rgb};
    use embedded_hal::digital::{ErrorType, OutputPin};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Data,
        Sclk,
        Xlat,
        Blank,
    }

    type EdgeLog = Rc<RefCell<Vec<(Line, bool)>>>;

    #[derive(Clone)]
    struct LoggedPin {
        line: Line,
        log: EdgeLog,
    }

    impl ErrorType for LoggedPin {
        type Error = Infallible;
    }

    impl OutputPin for LoggedPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    fn logged_link() -> (SerialLink<LoggedPin, LoggedPin, LoggedPin, LoggedPin>, EdgeLog) {
        let log: EdgeLog = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| LoggedPin {
            line,
            log: Rc::clone(&log),
        };
        let link = SerialLink::new(
            pin(Line::Data),
            pin(Line::Sclk),
            pin(Line::Xlat),
            pin(Line::Blank),
        );
        (link, log)
    }

    /// Data level sampled at every rising clock edge.
    fn sampled_bits(log: &EdgeLog) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut data_level = false;
        for &(line, level) in log.borrow().iter() {
            match line {
                Line::Data => data_level = level,
                Line::Sclk if level => bits.push(data_level),
                _ => {}
            }
        }
        bits
    }

    fn component_bits(value: u16) -> Vec<bool> {
        (0..12).rev().map(|bit| value & (1 << bit) != 0).collect()
    }

    #[test]
    fn test_full_frame_bit_count() {
        let (mut link, log) = logged_link();
        link.transmit(&Frame::new()).unwrap();
        assert_eq!(sampled_bits(&log).len(), 8 * 3 * 12);
    }

    #[test]
    fn test_channel_order_descending_components_brg() {
        let mut frame = Frame::new();
        frame.set(
            0,
            Rgb {
                r: 0x123,
                g: 0x456,
                b: 0x789,
            },
        );
        frame.set(
            7,
            Rgb {
                r: 0xABC,
                g: 0x0DE,
                b: 0xF01,
            },
        );

        let (mut link, log) = logged_link();
        link.transmit(&frame).unwrap();
        let bits = sampled_bits(&log);

        // Channel 7 is shifted first (it sits at the far end of the
        // chain), components in blue, red, green order, MSB first.
        assert_eq!(&bits[0..12], component_bits(0xF01).as_slice());
        assert_eq!(&bits[12..24], component_bits(0xABC).as_slice());
        assert_eq!(&bits[24..36], component_bits(0x0DE).as_slice());

        // Channel 0 goes out last.
        let tail = &bits[bits.len() - 36..];
        assert_eq!(&tail[0..12], component_bits(0x789).as_slice());
        assert_eq!(&tail[12..24], component_bits(0x123).as_slice());
        assert_eq!(&tail[24..36], component_bits(0x456).as_slice());
    }

    #[test]
    fn test_latch_pulsed_inside_blank_window() {
        let (mut link, log) = logged_link();
        link.transmit(&Frame::new()).unwrap();

        let log = log.borrow();
        let tail: Vec<_> = log[log.len() - 4..].to_vec();
        assert_eq!(
            tail,
            vec![
                (Line::Blank, true),
                (Line::Xlat, true),
                (Line::Xlat, false),
                (Line::Blank, false),
            ]
        );
        // No latch or blank activity during shift-out.
        for &(line, _) in &log[..log.len() - 4] {
            assert!(line == Line::Data || line == Line::Sclk);
        }
    }

    #[test]
    fn test_frame_clamps_components() {
        let mut frame = Frame::new();
        frame.set(
            2,
            Rgb {
                r: 0xFFFF,
                g: 0x1000,
                b: 0x0FFF,
            },
        );
        let color = frame.get(2);
        assert_eq!(color.r, 0x0FFF);
        assert_eq!(color.g, 0x0FFF);
        assert_eq!(color.b, 0x0FFF);
    }
}
