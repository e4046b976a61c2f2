/// Clock-time (group 4A) as decoded from the 17-bit Modified Julian Day and
/// local time/offset fields. Kept as its raw components; conversion to a
/// calendar timestamp is available behind the `chrono` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime {
    pub day_high: bool,
    pub day_low: u16,
    pub hour: u8,
    pub minute: u8,
    /// Local offset from UTC in half-hours, negative west of Greenwich.
    pub utc_offset_half_hours: i8,
}

impl ClockTime {
    /// Reconstructs the full 17-bit Modified Julian Day.
    pub fn modified_julian_day(&self) -> u32 {
        ((self.day_high as u32) << 16) | self.day_low as u32
    }

    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        let date = epoch.checked_add_signed(Duration::days(
            self.modified_julian_day() as i64 - 1,
        ))?;
        let naive = date.and_hms_opt(self.hour as u32, self.minute as u32, 0)?;
        let offset_seconds = self.utc_offset_half_hours as i32 * 1800;
        let offset = FixedOffset::east_opt(offset_seconds)?;
        offset.from_local_datetime(&naive).single()
    }
}

/// The Program Identification Code and the in-house clock snapshot it
/// arrived alongside, reported by group 4A / EON 14B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pic {
    pub day: u16,
    pub hour: u8,
    pub minute: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modified_julian_day_reassembles_the_high_bit() {
        let clock = ClockTime {
            day_high: true,
            day_low: 0,
            hour: 0,
            minute: 0,
            utc_offset_half_hours: 0,
        };
        assert_eq!(clock.modified_julian_day(), 1 << 16);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn to_datetime_applies_the_utc_offset() {
        use chrono::Timelike;
        let clock = ClockTime {
            day_high: false,
            day_low: 58849, // 2020-01-01 per the MJD epoch used here.
            hour: 12,
            minute: 30,
            utc_offset_half_hours: -4,
        };
        let dt = clock.to_datetime().expect("valid date");
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.offset().local_minus_utc(), -7200);
    }
}
