mod tests {
    use myrtio_tiny_rgb::color::{HueColor, HueModel, Rgb};
    use myrtio_tiny_rgb::protocol::{Command, CommandError, parse};
    use myrtio_tiny_rgb::{ChannelOffset, ModeId};

    fn command(line: &str) -> Command {
        parse(line.as_bytes(), HueModel::Hsv, true).unwrap().command
    }

    #[test]
    fn test_parse_every_command() {
        assert_eq!(command("SRGB:100050025"), Command::SetRgb(Rgb::new(100, 50, 25)));
        assert_eq!(
            command("SHSV:010200255"),
            Command::SetHue(HueColor::new(10, 200, 255))
        );
        assert_eq!(
            command("SSV:128064"),
            Command::SetSatLevel {
                sat: 128,
                level: 64
            }
        );
        assert_eq!(command("SMD:001"), Command::SetMode(ModeId::RandomFade));
        assert_eq!(command("SM:255128000"), Command::SetBound(Rgb::new(255, 128, 0)));
        assert_eq!(
            command("SO:-10+2099"),
            Command::SetOffset(ChannelOffset::new(-10, 20, 99))
        );
        assert_eq!(command("SW:077"), Command::SetWhite(77));
        assert_eq!(command("SD:050"), Command::SetWait(50));
        assert_eq!(command("SAV:1"), Command::SetAutosave(true));
        assert_eq!(command("SAV:0"), Command::SetAutosave(false));
        assert_eq!(command("status"), Command::Status);
        assert_eq!(command("help"), Command::Help);
    }

    #[test]
    fn test_token_may_appear_anywhere() {
        assert_eq!(command("xxSD:010"), Command::SetWait(10));
        assert_eq!(command("> status please"), Command::Status);
    }

    #[test]
    fn test_priority_order_wins() {
        assert_eq!(
            command("SD:010SRGB:001002003"),
            Command::SetRgb(Rgb::new(1, 2, 3))
        );
        assert_eq!(command("help status"), Command::Status);
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(
            parse(b"srgb:100100100", HueModel::Hsv, false),
            Err(CommandError::Unrecognized)
        );
        assert_eq!(parse(b"STATUS", HueModel::Hsv, false), Err(CommandError::Unrecognized));
    }

    #[test]
    fn test_unknown_line_is_rejected() {
        assert_eq!(parse(b"bogus", HueModel::Hsv, false), Err(CommandError::Unrecognized));
        assert_eq!(parse(b"", HueModel::Hsv, false), Err(CommandError::Unrecognized));
    }

    #[test]
    fn test_hue_token_follows_model() {
        assert_eq!(
            parse(b"SHSL:001002003", HueModel::Hsv, false),
            Err(CommandError::Unrecognized)
        );
        let parsed = parse(b"SHSL:001002003", HueModel::Hsl, false).unwrap();
        assert_eq!(parsed.command, Command::SetHue(HueColor::new(1, 2, 3)));
    }

    #[test]
    fn test_white_requires_channel() {
        assert_eq!(
            parse(b"SW:100", HueModel::Hsv, false),
            Err(CommandError::WhiteChannelDisabled)
        );
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert_eq!(
            parse(b"SMD:000", HueModel::Hsv, false),
            Err(CommandError::UnknownMode(0))
        );
        assert_eq!(
            parse(b"SMD:004", HueModel::Hsv, false),
            Err(CommandError::UnknownMode(4))
        );
    }

    #[test]
    fn test_malformed_fields_are_counted() {
        let parsed = parse(b"SRGB:1x0abc025", HueModel::Hsv, false).unwrap();
        assert_eq!(parsed.command, Command::SetRgb(Rgb::new(1, 0, 25)));
        assert_eq!(parsed.malformed_fields, 2);

        let parsed = parse(b"SD:050", HueModel::Hsv, false).unwrap();
        assert_eq!(parsed.malformed_fields, 0);
    }

    #[test]
    fn test_zero_is_an_explicit_value() {
        assert_eq!(
            command("SSV:000000"),
            Command::SetSatLevel { sat: 0, level: 0 }
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CommandError::UnknownMode(7).to_string(), "unknown mode 7");
        assert_eq!(CommandError::Unrecognized.to_string(), "unrecognized command");
    }
}
