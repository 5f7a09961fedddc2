//! Date codec tests against recorded service strings

use armcalc_wire::dates::{
    parse_search_date, parse_wcf_date, to_search_date_string, to_wcf_date_string,
};
use armcalc_wire::WireError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

mod wcf_dates {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recorded_service_values() {
        // Strings captured from live batch replies.
        let reference = parse_wcf_date("/Date(1408431600000-0700)/").unwrap();
        assert_eq!(reference.timestamp_millis(), 1408431599300);

        let realignment = parse_wcf_date("/Date(534067200000-0800)/").unwrap();
        assert_eq!(realignment.timestamp_millis(), 534067199200);
    }

    #[test]
    fn test_offset_is_millisecond_arithmetic_not_timezone() {
        // -0700 shifts by 700ms; a timezone conversion would shift by 7 hours.
        let with_offset = parse_wcf_date("/Date(1000000-0700)/").unwrap();
        let without = parse_wcf_date("/Date(1000000)/").unwrap();
        let delta = without.timestamp_millis() - with_offset.timestamp_millis();
        assert_eq!(delta, 700);
    }

    #[test]
    fn test_decode_accepts_what_encode_omits() {
        // Encode never writes an offset, decode still accepts one.
        let decoded = parse_wcf_date("/Date(1408431600000-0000)/").unwrap();
        let reencoded = to_wcf_date_string(&decoded);
        assert_eq!(reencoded, "/Date(1408431600000)/");
    }

    #[test]
    fn test_rejections() {
        for bad in ["garbage", "Date(123)", "/Date(abc)/", "1408431600000"] {
            assert!(
                matches!(parse_wcf_date(bad), Err(WireError::InvalidWcfDate(_))),
                "expected rejection of {bad:?}"
            );
        }
    }
}

mod search_dates {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recorded_service_values() {
        assert_eq!(
            parse_search_date("19861204").unwrap(),
            NaiveDate::from_ymd_opt(1986, 12, 4).unwrap()
        );
        assert_eq!(
            parse_search_date("20140819").unwrap(),
            NaiveDate::from_ymd_opt(2014, 8, 19).unwrap()
        );
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            parse_search_date("20160229").unwrap(),
            NaiveDate::from_ymd_opt(2016, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_search_date("20150229"),
            Err(WireError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_roundtrip_across_year_range() {
        for (y, m, d) in [(1000, 1, 1), (1986, 12, 4), (2014, 8, 19), (9999, 12, 31)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let text = to_search_date_string(&date);
            assert_eq!(parse_search_date(&text).unwrap(), date);
        }
    }

    #[test]
    fn test_rejects_separators_and_width() {
        for bad in ["2014-08-19", "2014/08/19", "140819", "20140819 "] {
            assert!(
                matches!(parse_search_date(bad), Err(WireError::InvalidSearchDate(_))),
                "expected rejection of {bad:?}"
            );
        }
    }
}
