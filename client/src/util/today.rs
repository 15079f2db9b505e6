//! Local calendar day and shuffle seed from the browser clock.

#[cfg(test)]
#[path = "today_test.rs"]
mod today_test;

use qotd::CalendarDay;

/// Today in the viewer's local timezone.
pub fn today() -> CalendarDay {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        from_js_parts(now.get_full_year(), now.get_month(), now.get_date())
            .or_else(|| from_js_parts(now.get_utc_full_year(), now.get_utc_month(), now.get_utc_date()))
            .unwrap_or_else(|| CalendarDay::new(time::macros::date!(1970-01-01)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CalendarDay::new(time::OffsetDateTime::now_utc().date())
    }
}

/// Seed for the deck shuffle.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn random_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        let word = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        (word() << 32) | word()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64)
    }
}

/// Build a day from JS `Date` getters, whose month is zero-based.
#[cfg(any(test, feature = "hydrate"))]
fn from_js_parts(year: u32, month0: u32, day: u32) -> Option<CalendarDay> {
    let year = i32::try_from(year).ok()?;
    let month = u8::try_from(month0.checked_add(1)?).ok()?;
    let day = u8::try_from(day).ok()?;
    CalendarDay::from_ymd(year, month, day).ok()
}
