#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use pmdash::libs::date::{
        parse_date, parse_flexible_date, parse_input_date, sortable_timestamp, start_of_day, to_display_date,
        MAX_SAFE_INTEGER,
    };

    #[test]
    fn test_parse_date_local_midnight() {
        let expected = Local.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap().timestamp_millis();
        assert_eq!(parse_date("15/01/2024"), expected);
    }

    #[test]
    fn test_parse_date_unreadable_is_zero() {
        assert_eq!(parse_date(""), 0);
        assert_eq!(parse_date("15-01-2024"), 0);
        assert_eq!(parse_date("15/01"), 0);
        assert_eq!(parse_date("aa/bb/cccc"), 0);
        assert_eq!(parse_date("15/xx/2024"), 0);
    }

    #[test]
    fn test_parse_date_rolls_over_out_of_range_days() {
        assert_eq!(parse_date("31/02/2024"), parse_date("02/03/2024"));
        assert_eq!(parse_date("32/01/2024"), parse_date("01/02/2024"));
        assert_eq!(parse_date("00/03/2024"), parse_date("29/02/2024"));
        assert_eq!(parse_date("01/13/2023"), parse_date("01/01/2024"));
        assert_eq!(parse_date("01/00/2024"), parse_date("01/12/2023"));
        assert_ne!(parse_date("31/02/2024"), 0);
    }

    #[test]
    fn test_parse_date_orders_days() {
        assert!(parse_date("01/02/2024") > parse_date("31/01/2024"));
        assert!(parse_date("01/01/2025") > parse_date("31/12/2024"));
    }

    #[test]
    fn test_to_display_date() {
        assert_eq!(to_display_date("2024-01-15"), "15/01/2024");
        assert_eq!(to_display_date(""), "");
        assert_eq!(to_display_date("15/01/2024"), "");
    }

    #[test]
    fn test_parse_input_date_fallbacks() {
        assert_eq!(parse_input_date("", i64::MIN), i64::MIN);
        assert_eq!(parse_input_date("", i64::MAX), i64::MAX);
        assert_eq!(parse_input_date("2024-01-15", i64::MIN), parse_date("15/01/2024"));
        assert_eq!(parse_input_date("garbage", i64::MAX), 0);
    }

    #[test]
    fn test_parse_flexible_date_forms() {
        let ticktick = parse_flexible_date("2024-01-15T09:00:00.000+0000").unwrap();
        let rfc = parse_flexible_date("2024-01-15T09:00:00Z").unwrap();
        assert_eq!(ticktick.timestamp_millis(), rfc.timestamp_millis());

        let bare = parse_flexible_date("2024-01-15").unwrap();
        assert_eq!(bare.timestamp(), 1_705_276_800);

        assert_eq!(
            parse_flexible_date("15/01/2024").unwrap().timestamp_millis(),
            parse_date("15/01/2024")
        );
        assert!(parse_flexible_date("   ").is_none());
        assert!(parse_flexible_date("next week").is_none());
    }

    #[test]
    fn test_sortable_timestamp_missing_goes_last() {
        assert_eq!(sortable_timestamp(None), MAX_SAFE_INTEGER);
        assert_eq!(sortable_timestamp(Some("soon")), MAX_SAFE_INTEGER);
        assert!(sortable_timestamp(Some("2099-12-31")) < MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_start_of_day() {
        let now = Local.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(start_of_day(now), parse_date("10/03/2024"));
    }
}
