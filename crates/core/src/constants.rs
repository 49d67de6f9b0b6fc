/// Storage and wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Status value returned by write endpoints.
pub const STATUS_SUCCESS: &str = "success";

/// Maximum number of transactions requested from the bank data provider per refresh.
pub const BANK_TRANSACTIONS_PAGE_SIZE: i32 = 100;
