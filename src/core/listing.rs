use crate::models::{ListingRow, StoreFile};

/// One row per Clockset / Paid Break punch, in file order.
pub fn build_listing(store: &StoreFile) -> Vec<ListingRow> {
    store
        .punches()
        .map(|r| ListingRow {
            store_no: store.store_id.clone(),
            emp_id: r.employee_id.clone(),
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            day: r.day_of_week.clone(),
            date: r.date.clone(),
            start_time: r.start_time.clone(),
            end_time: r.end_time.clone(),
            record_type: r.record_type.rt_as_str().to_string(),
            duration: r.decimal_hours,
        })
        .collect()
}
