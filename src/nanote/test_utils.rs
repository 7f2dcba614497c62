use crate::model::{Note, NoteCollection};
use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 5).unwrap()
}

/// Notes with the given titles, in the given order, all stamped at [`fixed_now`].
pub fn collection_of(titles: &[&str]) -> NoteCollection {
    titles
        .iter()
        .map(|title| Note::new(title.to_string(), fixed_now()))
        .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
